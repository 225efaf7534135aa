pub mod config;
mod downloader;
pub mod error;
pub mod resources;

pub use config::Config;
pub use downloader::{
    file_name, BatchReport, DownloadOutcome, Downloader, FileDownloader, Response, TaskHandle,
    UReqFetcher, WorkerPool, DEFAULT_WORKERS,
};
pub use error::{DownloadError, Error};
pub use resources::{celebrities, Resource};
