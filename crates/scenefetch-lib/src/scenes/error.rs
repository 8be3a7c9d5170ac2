use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScenesError {
    #[error("Failed to read scenes from {source_name}: {source}")]
    Read {
        source_name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse scenes from {source_name}: {source}")]
    Parse {
        source_name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Scene {scene} has no {product} link")]
    MissingProduct { scene: String, product: String },

    #[error("Scene {scene} has an invalid {product} link {url}: {source}")]
    InvalidLink {
        scene: String,
        product: String,
        url: String,
        #[source]
        source: url::ParseError,
    },
}

impl ScenesError {
    pub(crate) fn source_name(path: Option<&Path>) -> String {
        match path {
            Some(path) => path.display().to_string(),
            None => "standard input".to_string(),
        }
    }
}
