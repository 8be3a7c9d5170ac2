use crate::download::{DownloadError, TransportError};
use crate::scenes::ScenesError;
use crate::tiles::TileTemplateError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SceneFetchError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Scenes(#[from] ScenesError),

    #[error(transparent)]
    Download(#[from] DownloadError),

    #[error("Failed to set up HTTP client: {0}")]
    HttpClient(#[from] TransportError),

    #[error(transparent)]
    TileTemplate(#[from] TileTemplateError),

    #[error("Invalid CLI arguments: {details}")]
    CliArgumentValidation { details: String },

    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unexpected error: {0}")]
    Unexpected(#[from] eyre::Report),
}
