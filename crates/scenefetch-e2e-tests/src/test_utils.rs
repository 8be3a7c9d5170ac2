use axum::Router;
use axum::extract::Query;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::get;
use eyre::Result;
use scenefetch_lib::Config;
use scenefetch_lib::scenes::{Scene, SceneCollection, SceneLinks, SceneProperties};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tempfile::TempDir;

static TRACING: Once = Once::new();

pub fn init_tracing() {
    TRACING.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .init();
    });
}

async fn thumbnail_with_disposition(
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let size = params.get("size").cloned().unwrap_or_default();
    let format = params.get("format").cloned().unwrap_or_default();
    (
        [(
            header::CONTENT_DISPOSITION,
            "attachment; filename=\"scene_a.png\"",
        )],
        format!("thumb a {size} {format}"),
    )
}

async fn thumbnail_without_disposition() -> impl IntoResponse {
    "thumb b"
}

async fn unavailable() -> impl IntoResponse {
    (StatusCode::INTERNAL_SERVER_ERROR, "scene unavailable")
}

fn scene_router() -> Router {
    Router::new()
        .route("/scenes/a/thumb", get(thumbnail_with_disposition))
        .route("/files/scene_b.png", get(thumbnail_without_disposition))
        .route("/files/unavailable.png", get(unavailable))
}

/// Serves a fixed set of scene products on an ephemeral local port and returns its base URL.
pub async fn spawn_scene_server() -> Result<String> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move { axum::serve(listener, scene_router()).await });
    Ok(format!("http://{addr}"))
}

/// Writes a scene collection whose thumbnail links are the given URLs.
pub fn write_scenes_file(dir: &Path, thumbnails: &[String]) -> Result<PathBuf> {
    let scenes = SceneCollection {
        features: thumbnails
            .iter()
            .enumerate()
            .map(|(i, thumbnail)| Scene {
                id: Some(format!("scene_{i}")),
                properties: SceneProperties {
                    links: SceneLinks {
                        thumbnail: Some(thumbnail.clone()),
                    },
                    data: None,
                },
            })
            .collect(),
    };

    let path = dir.join("scenes.json");
    std::fs::write(&path, serde_json::to_string_pretty(&scenes)?)?;
    Ok(path)
}

pub fn write_config_file(dir: &Path, config: &Config) -> Result<PathBuf> {
    let config_path = dir.join("scenefetch.json");
    std::fs::write(&config_path, serde_json::to_string_pretty(config)?)?;
    Ok(config_path)
}

pub fn setup_test_environment() -> Result<(TempDir, PathBuf)> {
    let temp_dir = tempfile::tempdir()?;
    let output_dir = temp_dir.path().join("output");
    std::fs::create_dir(&output_dir)?;
    Ok((temp_dir, output_dir))
}
