use super::error::DownloadError;
use super::filename::resolve_filename;
use super::io::{FileSystem, HttpClient, HttpResponse};
use super::types::{BatchSummary, DownloadTask};
use futures::stream::{FuturesUnordered, StreamExt};
use reqwest::header::CONTENT_DISPOSITION;
use std::io::ErrorKind;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{debug, info, warn};

/// Upper bound on how much of an error response body is kept for diagnostics.
const MAX_ERROR_BODY_BYTES: usize = 512;

/// Downloads every task, keeping at most `concurrency` of them in flight.
///
/// Tasks start in submission order. The first failure stops any further task from
/// starting; downloads already in flight run to completion but their results are
/// discarded, and the first failure is returned.
pub async fn run_batch<C, F>(
    tasks: Vec<DownloadTask>,
    concurrency: NonZeroUsize,
    http: &C,
    fs: &F,
) -> Result<BatchSummary, DownloadError>
where
    C: HttpClient,
    F: FileSystem,
{
    if tasks.is_empty() {
        debug!("Nothing to download");
        return Ok(BatchSummary::default());
    }

    let total = tasks.len();
    let limit = concurrency.get().min(total);
    info!(total, concurrency = limit, "Starting downloads");

    let mut backlog = tasks.into_iter().enumerate();
    let mut in_flight = FuturesUnordered::new();
    let mut outputs = Vec::with_capacity(total);
    let mut first_failure: Option<DownloadError> = None;

    loop {
        if first_failure.is_none() {
            while in_flight.len() < limit {
                let Some((index, task)) = backlog.next() else {
                    break;
                };
                debug!(index, url = %task.source_url, "Queueing download");
                in_flight.push(async move { (index, download_one(&task, http, fs).await) });
            }
        }

        let Some((index, outcome)) = in_flight.next().await else {
            break;
        };

        match outcome {
            Ok(path) if first_failure.is_none() => outputs.push(path),
            Ok(path) => {
                debug!(index, output = %path.display(), "Discarding result after earlier failure");
            }
            Err(err) => {
                warn!(index, "Download failed: {:#}", err);
                if first_failure.is_none() {
                    if !in_flight.is_empty() {
                        info!(
                            remaining = in_flight.len(),
                            "Waiting for in-flight downloads to finish"
                        );
                    }
                    first_failure = Some(err);
                }
            }
        }
    }

    match first_failure {
        Some(err) => Err(err),
        None => {
            info!(total, "All downloads finished");
            Ok(BatchSummary { outputs })
        }
    }
}

async fn download_one<C, F>(
    task: &DownloadTask,
    http: &C,
    fs: &F,
) -> Result<PathBuf, DownloadError>
where
    C: HttpClient,
    F: FileSystem,
{
    let url = task.source_url.as_str();
    debug!(url, "Getting");

    let response = http
        .get(url)
        .await
        .map_err(|source| DownloadError::Transport {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        let body = read_body_snippet(response).await;
        match &body {
            Some(body) => debug!(url, %status, body = %body, "Response error"),
            None => debug!(url, %status, "Response error"),
        }
        return Err(DownloadError::Response {
            url: url.to_string(),
            status,
            body,
        });
    }

    let disposition = response
        .headers()
        .get(CONTENT_DISPOSITION)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned());
    if disposition.is_none() {
        warn!(url, %status, headers = ?response.headers(), "Expected content-disposition header");
    }
    let filename = resolve_filename(disposition.as_deref(), url);
    let output_path = task.target_directory.join(filename);

    debug!(url, output = %output_path.display(), "Writing");
    let file = fs
        .create(&output_path)
        .await
        .map_err(|source| match source.kind() {
            ErrorKind::NotFound => DownloadError::OutputDirectoryMissing {
                directory: task.target_directory.clone(),
            },
            _ => DownloadError::Write {
                path: output_path.clone(),
                source,
            },
        })?;
    let mut writer = BufWriter::new(file);

    let mut body = response.into_body_stream();
    let mut bytes_written = 0u64;
    while let Some(chunk) = body.next().await {
        let chunk = chunk.map_err(|source| DownloadError::Body {
            url: url.to_string(),
            source,
        })?;
        writer
            .write_all(&chunk)
            .await
            .map_err(|source| DownloadError::Write {
                path: output_path.clone(),
                source,
            })?;
        bytes_written += chunk.len() as u64;
    }

    writer
        .flush()
        .await
        .map_err(|source| DownloadError::Write {
            path: output_path.clone(),
            source,
        })?;

    info!(url, output = %output_path.display(), bytes = bytes_written, "Downloaded");
    Ok(output_path)
}

async fn read_body_snippet(response: impl HttpResponse) -> Option<String> {
    let mut body = response.into_body_stream();
    let mut buffer = Vec::new();
    while buffer.len() < MAX_ERROR_BODY_BYTES {
        match body.next().await {
            Some(Ok(chunk)) => buffer.extend_from_slice(&chunk),
            _ => break,
        }
    }
    buffer.truncate(MAX_ERROR_BODY_BYTES);

    let text = String::from_utf8_lossy(&buffer).trim().to_string();
    (!text.is_empty()).then_some(text)
}
