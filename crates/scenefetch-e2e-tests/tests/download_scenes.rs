use scenefetch_e2e_tests::{
    init_tracing, setup_test_environment, spawn_scene_server, write_config_file,
    write_scenes_file,
};
use scenefetch_lib::config::DownloadConfig;
use scenefetch_lib::scenes::{ThumbnailFormat, ThumbnailSize};
use scenefetch_lib::{Config, SceneFetchError};
use scenefetch_lib::cli::{Command, DownloadParams, ResolvedCommand, resolve_command, run_download};
use scenefetch_lib::download::DownloadErrorKind;
use scenefetch_lib::scenes::ScenesError;
use std::path::Path;

fn build_download_params(scenes_path: &Path, directory: &Path) -> DownloadParams {
    let command = Command::Download {
        config_path: None,
        scenes_path: Some(scenes_path.to_str().unwrap().to_string()),
        directory: Some(directory.to_str().unwrap().to_string()),
        product: None,
        size: None,
        format: None,
        concurrency: Some(2),
    };
    match resolve_command(command).expect("Failed to resolve download command") {
        ResolvedCommand::Download(params) => params,
        _ => unreachable!("Resolved command type mismatch"),
    }
}

#[tokio::test]
async fn test_download_thumbnails_end_to_end() {
    init_tracing();

    let (temp_dir, output_dir) = setup_test_environment().expect("Failed to setup test environment");
    let base_url = spawn_scene_server().await.expect("Failed to start scene server");
    let scenes_path = write_scenes_file(
        temp_dir.path(),
        &[
            format!("{base_url}/scenes/a/thumb"),
            format!("{base_url}/files/scene_b.png"),
        ],
    )
    .expect("Failed to write scenes file");

    let summary = run_download(build_download_params(&scenes_path, &output_dir))
        .await
        .expect("Download should succeed");

    assert_eq!(summary.len(), 2, "One file should be written per scene");
    assert_eq!(
        std::fs::read_to_string(output_dir.join("scene_a.png")).unwrap(),
        "thumb a lg png",
        "Content-disposition should name the file and thumbnail parameters should be sent"
    );
    assert_eq!(
        std::fs::read_to_string(output_dir.join("scene_b.png")).unwrap(),
        "thumb b",
        "Without content-disposition the URL path should name the file"
    );
}

#[tokio::test]
async fn test_config_file_selects_directory_and_thumbnail() {
    init_tracing();

    let (temp_dir, output_dir) = setup_test_environment().expect("Failed to setup test environment");
    let base_url = spawn_scene_server().await.expect("Failed to start scene server");
    let scenes_path = write_scenes_file(temp_dir.path(), &[format!("{base_url}/scenes/a/thumb")])
        .expect("Failed to write scenes file");
    let config = Config {
        download: DownloadConfig {
            directory: Some(output_dir.clone()),
            size: ThumbnailSize::Sm,
            format: ThumbnailFormat::Jpg,
            ..DownloadConfig::default()
        },
        ..Config::default()
    };
    let config_path =
        write_config_file(temp_dir.path(), &config).expect("Failed to write config file");

    let command = Command::Download {
        config_path: Some(config_path.to_str().unwrap().to_string()),
        scenes_path: Some(scenes_path.to_str().unwrap().to_string()),
        directory: None,
        product: None,
        size: None,
        format: None,
        concurrency: None,
    };
    let params = match resolve_command(command).expect("Failed to resolve download command") {
        ResolvedCommand::Download(params) => params,
        _ => unreachable!("Resolved command type mismatch"),
    };

    run_download(params).await.expect("Download should succeed");

    assert_eq!(
        std::fs::read_to_string(output_dir.join("scene_a.png")).unwrap(),
        "thumb a sm jpg",
        "Thumbnail parameters should come from the config file"
    );
}

#[tokio::test]
async fn test_download_into_missing_directory_fails() {
    init_tracing();

    let (temp_dir, _output_dir) = setup_test_environment().expect("Failed to setup test environment");
    let base_url = spawn_scene_server().await.expect("Failed to start scene server");
    let scenes_path = write_scenes_file(temp_dir.path(), &[format!("{base_url}/files/scene_b.png")])
        .expect("Failed to write scenes file");

    let missing = temp_dir.path().join("missing");
    let result = run_download(build_download_params(&scenes_path, &missing)).await;

    match result {
        Err(SceneFetchError::Download(err)) => {
            assert_eq!(err.kind(), DownloadErrorKind::OutputDirectoryMissing);
            assert!(err.to_string().contains("does not exist"));
        }
        other => panic!("Expected missing directory error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_fails_the_batch() {
    init_tracing();

    let (temp_dir, output_dir) = setup_test_environment().expect("Failed to setup test environment");
    let base_url = spawn_scene_server().await.expect("Failed to start scene server");
    let failing_url = format!("{base_url}/files/unavailable.png");
    let scenes_path = write_scenes_file(temp_dir.path(), &[failing_url.clone()])
        .expect("Failed to write scenes file");

    let result = run_download(build_download_params(&scenes_path, &output_dir)).await;

    match result {
        Err(SceneFetchError::Download(err)) => {
            assert_eq!(err.kind(), DownloadErrorKind::Response);
            assert!(
                err.to_string().contains("/files/unavailable.png"),
                "Error should name the failing URL: {err}"
            );
        }
        other => panic!("Expected response error, got {other:?}"),
    }
    assert_eq!(std::fs::read_dir(&output_dir).unwrap().count(), 0);
}

#[tokio::test]
async fn test_malformed_scenes_abort_before_downloading() {
    init_tracing();

    let (temp_dir, output_dir) = setup_test_environment().expect("Failed to setup test environment");
    let scenes_path = temp_dir.path().join("scenes.json");
    std::fs::write(&scenes_path, "{ \"features\": [").unwrap();

    let result = run_download(build_download_params(&scenes_path, &output_dir)).await;

    assert!(
        matches!(result, Err(SceneFetchError::Scenes(ScenesError::Parse { .. }))),
        "Malformed scenes should be a parse error: {result:?}"
    );
    assert_eq!(std::fs::read_dir(&output_dir).unwrap().count(), 0);
}

#[tokio::test]
async fn test_empty_scene_list_succeeds() {
    init_tracing();

    let (temp_dir, output_dir) = setup_test_environment().expect("Failed to setup test environment");
    let scenes_path = write_scenes_file(temp_dir.path(), &[]).expect("Failed to write scenes file");

    let summary = run_download(build_download_params(&scenes_path, &output_dir))
        .await
        .expect("Empty download should succeed");

    assert!(summary.is_empty());
    assert_eq!(std::fs::read_dir(&output_dir).unwrap().count(), 0);
}
