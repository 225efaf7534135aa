use std::fmt;
use std::path::PathBuf;

use crate::error::DownloadError;
use crate::resources::Resource;

/// What happened to one item of a batch.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadOutcome {
    pub resource: Resource,
    pub result: Result<PathBuf, DownloadError>,
}

impl DownloadOutcome {
    pub fn new(resource: Resource, result: Result<PathBuf, DownloadError>) -> Self {
        Self { resource, result }
    }

    pub fn succeeded(&self) -> bool {
        self.result.is_ok()
    }

    pub fn error(&self) -> Option<&DownloadError> {
        self.result.as_ref().err()
    }
}

impl fmt::Display for DownloadOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = &self.resource.name;

        match &self.result {
            Ok(file) => {
                let file_name = file
                    .file_name()
                    .map(|file_name| file_name.to_string_lossy())
                    .unwrap_or_else(|| file.to_string_lossy());
                write!(f, "Downloaded: {} -> {}", name, file_name)
            }
            Err(DownloadError::Status(code)) => {
                write!(f, "Download failed: {} - status code: {}", name, code)
            }
            Err(err) => write!(f, "Error: {} - {}", name, err),
        }
    }
}

/// Outcomes of a whole batch, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchReport {
    pub outcomes: Vec<DownloadOutcome>,
}

impl BatchReport {
    pub fn new(outcomes: Vec<DownloadOutcome>) -> Self {
        Self { outcomes }
    }

    pub fn success_count(&self) -> usize {
        self.outcomes.iter().filter(|outcome| outcome.succeeded()).count()
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Download complete! Succeeded: {}/{}",
            self.success_count(),
            self.total()
        )
    }
}
