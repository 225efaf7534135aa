use thiserror::Error;

/// Failures that prevent a batch from starting at all.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("worker count must be at least 1")]
    InvalidConcurrency,

    #[error("could not build worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),

    #[error("worker task panicked")]
    TaskPanicked,
}

/// Per-item failure. Never escapes a worker; it is folded into the item's outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DownloadError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    #[error("status code {0}")]
    Status(u16),

    #[error("network error: {0}")]
    Network(String),

    #[error("write error: {0}")]
    Io(String),
}

impl From<std::io::Error> for DownloadError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
