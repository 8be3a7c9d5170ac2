#[allow(clippy::module_inception)]
mod download;
mod error;
pub mod filename;
mod io;
mod types;

pub use download::run_batch;
pub use error::{DownloadError, DownloadErrorKind, TransportError};
pub use io::{
    FileSystem, HttpClient, HttpClientOptions, HttpResponse, ReqwestHttpClient, TokioFileSystem,
};
pub use types::{BatchSummary, DownloadOptions, DownloadTask};
