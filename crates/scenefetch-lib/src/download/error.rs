use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

/// A failure below the HTTP status line: DNS, connect, TLS, timeouts, broken streams.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Other(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DownloadErrorKind {
    Transport,
    Response,
    Body,
    OutputDirectoryMissing,
    Write,
}

#[derive(Error, Debug)]
pub enum DownloadError {
    #[error("Request for {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: TransportError,
    },

    #[error("Request for {url} failed: Unexpected response status {status}")]
    Response {
        url: String,
        status: StatusCode,
        body: Option<String>,
    },

    #[error("Request for {url} failed: {source}")]
    Body {
        url: String,
        #[source]
        source: TransportError,
    },

    #[error("Output directory does not exist: {}", .directory.display())]
    OutputDirectoryMissing { directory: PathBuf },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DownloadError {
    pub fn kind(&self) -> DownloadErrorKind {
        match self {
            DownloadError::Transport { .. } => DownloadErrorKind::Transport,
            DownloadError::Response { .. } => DownloadErrorKind::Response,
            DownloadError::Body { .. } => DownloadErrorKind::Body,
            DownloadError::OutputDirectoryMissing { .. } => {
                DownloadErrorKind::OutputDirectoryMissing
            }
            DownloadError::Write { .. } => DownloadErrorKind::Write,
        }
    }

    /// Whether the failure happened on the network side rather than on disk.
    pub fn is_network(&self) -> bool {
        matches!(
            self.kind(),
            DownloadErrorKind::Transport | DownloadErrorKind::Response | DownloadErrorKind::Body
        )
    }
}
