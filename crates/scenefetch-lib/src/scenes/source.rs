use super::error::ScenesError;
use super::model::SceneCollection;
use std::path::Path;
use tokio::io::AsyncReadExt;
use tracing::{debug, info};

/// Reads a scene collection from `path`, or from standard input when no path is given.
pub async fn load_scenes(path: Option<&Path>) -> Result<SceneCollection, ScenesError> {
    let source_name = ScenesError::source_name(path);
    debug!(source = %source_name, "Reading scenes");

    let contents = match path {
        Some(path) => tokio::fs::read_to_string(path).await,
        None => {
            let mut contents = String::new();
            tokio::io::stdin()
                .read_to_string(&mut contents)
                .await
                .map(|_| contents)
        }
    }
    .map_err(|source| ScenesError::Read {
        source_name: source_name.clone(),
        source,
    })?;

    let scenes = parse_scenes(&contents, &source_name)?;
    info!(source = %source_name, scenes = scenes.features.len(), "Loaded scenes");
    Ok(scenes)
}

pub fn parse_scenes(contents: &str, source_name: &str) -> Result<SceneCollection, ScenesError> {
    serde_json::from_str(contents).map_err(|source| ScenesError::Parse {
        source_name: source_name.to_string(),
        source,
    })
}
