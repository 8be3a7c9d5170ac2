use crate::cli::DownloadParams;
use crate::download::{BatchSummary, DownloadTask, ReqwestHttpClient, TokioFileSystem, run_batch};
use crate::error::SceneFetchError;
use crate::scenes::{load_scenes, product_urls};
use tracing;

pub async fn run_download(params: DownloadParams) -> Result<BatchSummary, SceneFetchError> {
    let DownloadParams {
        scenes_path,
        directory,
        selection,
        options,
        http,
    } = params;

    let scenes = load_scenes(scenes_path.as_deref()).await?;
    let urls = product_urls(&scenes, &selection)?;

    let tasks = urls
        .into_iter()
        .map(|url| DownloadTask::new(url, directory.clone()))
        .collect::<Vec<_>>();

    tracing::info!(
        "Downloading {} {} products to {}",
        tasks.len(),
        selection.product,
        directory.display()
    );
    let client = ReqwestHttpClient::new(&http)?;
    let summary = run_batch(tasks, options.concurrency, &client, &TokioFileSystem).await?;

    tracing::info!("Download completed successfully");
    Ok(summary)
}
