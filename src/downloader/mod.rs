mod fetcher;
mod outcome;
mod pool;

use std::env;
use std::fmt;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info, warn};
use url::Url;

use crate::error::{DownloadError, Error};
use crate::resources::Resource;

pub use fetcher::UReqFetcher;
pub use outcome::{BatchReport, DownloadOutcome};
pub use pool::{TaskHandle, WorkerPool};

pub const DEFAULT_WORKERS: usize = 5;

/// What a transport hands back for one GET.
pub enum Response {
    /// Status 200, body not yet read.
    Ok(Box<dyn Read + Send>),
    Status(u16),
    NetworkError(String),
}

impl Response {
    pub fn ok(body: impl Read + Send + 'static) -> Self {
        Self::Ok(Box::new(body))
    }

    pub fn status(code: u16) -> Self {
        Self::Status(code)
    }

    pub fn network_error(message: impl Into<String>) -> Self {
        Self::NetworkError(message.into())
    }
}

impl fmt::Debug for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(_) => f.write_str("Ok(..)"),
            Self::Status(code) => f.debug_tuple("Status").field(code).finish(),
            Self::NetworkError(message) => f.debug_tuple("NetworkError").field(message).finish(),
        }
    }
}

/// A transport able to issue one GET. Shared by every worker of a batch.
pub trait FileDownloader: Send + Sync {
    fn fetch(&self, url: &str) -> Response;
}

/// Fetches resources into a single output directory, one file per sequence index.
pub struct Downloader<T: FileDownloader> {
    fetcher: T,
    path: PathBuf,
}

impl<T> Downloader<T>
where
    T: FileDownloader,
{
    /// Creates the output directory if it is missing.
    pub fn with_fetcher(path: impl AsRef<Path>, fetcher: T) -> Result<Self, Error> {
        let path = Self::create_path(path.as_ref())?;

        Ok(Downloader { path, fetcher })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_path(&self, resource: &Resource) -> PathBuf {
        self.path.join(file_name(resource.sequence_index))
    }

    pub fn run(&self, items: &[Resource], max_concurrency: usize) -> Result<BatchReport, Error> {
        self.run_with(items, max_concurrency, |_| {})
    }

    /// Downloads every item with at most `max_concurrency` fetches in flight.
    ///
    /// `on_outcome` is called from the worker as soon as an item finishes, so
    /// calls arrive in completion order. The returned report is in input order.
    /// Per-item failures only show up in the report; `Err` means nothing ran.
    pub fn run_with<F>(
        &self,
        items: &[Resource],
        max_concurrency: usize,
        on_outcome: F,
    ) -> Result<BatchReport, Error>
    where
        F: Fn(&DownloadOutcome) + Sync,
    {
        let pool = WorkerPool::new(max_concurrency)?;

        debug!(
            items = items.len(),
            workers = pool.workers(),
            path = %self.path.display(),
            "starting batch"
        );

        let outcomes = pool.map(items, |resource| {
            let outcome = DownloadOutcome::new(resource.clone(), self.download(resource));
            on_outcome(&outcome);
            outcome
        });

        Ok(BatchReport::new(outcomes))
    }

    pub fn download(&self, resource: &Resource) -> Result<PathBuf, DownloadError> {
        let result = self.fetch_to_file(resource);

        match &result {
            Ok(file) => info!(name = %resource.name, file = %file.display(), "downloaded"),
            Err(err) => warn!(
                name = %resource.name,
                url = %resource.source_url,
                %err,
                "download failed"
            ),
        }

        result
    }

    /// Empties the output directory, leaving it in place for the next run.
    pub fn clear_cache(&self) -> Result<(), Error> {
        fs::remove_dir_all(&self.path)?;
        fs::create_dir_all(&self.path)?;
        Ok(())
    }

    fn fetch_to_file(&self, resource: &Resource) -> Result<PathBuf, DownloadError> {
        let url = Url::parse(&resource.source_url)
            .map_err(|err| DownloadError::InvalidUrl(format!("{}: {}", resource.source_url, err)))?;

        debug!(url = url.as_str(), index = resource.sequence_index, "fetching");

        match self.fetcher.fetch(url.as_str()) {
            Response::Status(code) => Err(DownloadError::Status(code)),
            Response::NetworkError(message) => Err(DownloadError::Network(message)),

            Response::Ok(mut body) => {
                let file_path = self.file_path(resource);
                self.save(&mut body, &file_path)?;
                Ok(file_path)
            }
        }
    }

    // The body lands in a temporary sibling first, so a failed transfer never
    // leaves a file at `file_path`.
    fn save(&self, body: &mut dyn Read, file_path: &Path) -> Result<(), DownloadError> {
        let mut file = NamedTempFile::new_in(&self.path)?;

        copy_body(body, &mut file)?;

        file.persist(file_path).map_err(|err| err.error)?;

        Ok(())
    }

    fn create_path(path: &Path) -> io::Result<PathBuf> {
        let absolute_path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            env::current_dir()?.join(path)
        };

        fs::create_dir_all(&absolute_path)?;

        Ok(absolute_path)
    }
}

impl Downloader<UReqFetcher> {
    pub fn new(path: impl AsRef<Path>) -> Result<Self, Error> {
        Downloader::with_fetcher(path, UReqFetcher::new())
    }
}

// Read failures belong to the transport, write failures to the disk.
fn copy_body(body: &mut dyn Read, file: &mut impl Write) -> Result<u64, DownloadError> {
    let mut buf = [0u8; 8192];
    let mut written = 0;

    loop {
        let read = match body.read(&mut buf) {
            Ok(0) => return Ok(written),
            Ok(read) => read,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(DownloadError::Network(err.to_string())),
        };

        file.write_all(&buf[..read])?;
        written += read as u64;
    }
}

/// `celebrity_01.jpg` for index 0. Past 99 the number just gets wider.
pub fn file_name(sequence_index: usize) -> String {
    format!("celebrity_{:02}.jpg", sequence_index + 1)
}
