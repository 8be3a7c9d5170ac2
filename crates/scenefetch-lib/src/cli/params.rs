use crate::download::{DownloadOptions, HttpClientOptions};
use crate::scenes::ProductSelection;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct DownloadParams {
    /// Scenes file; standard input when `None`.
    pub scenes_path: Option<PathBuf>,
    pub directory: PathBuf,
    pub selection: ProductSelection,
    pub options: DownloadOptions,
    pub http: HttpClientOptions,
}

#[derive(Debug, Clone)]
pub struct TileUrlParams {
    pub template: String,
    pub api_key: Option<String>,
    pub json: bool,
}
