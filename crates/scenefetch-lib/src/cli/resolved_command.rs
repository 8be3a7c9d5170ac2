use crate::cli::args::Command;
use crate::cli::params::{DownloadParams, TileUrlParams};
use crate::config::{Config, HttpConfig, load_config};
use crate::download::{DownloadOptions, HttpClientOptions};
use crate::error::SceneFetchError;
use crate::scenes::ProductSelection;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum ResolvedCommand {
    Download(DownloadParams),
    TileUrl(TileUrlParams),
}

pub fn resolve_command(command: Command) -> Result<ResolvedCommand, SceneFetchError> {
    match command {
        Command::Download {
            config_path,
            scenes_path,
            directory,
            product,
            size,
            format,
            concurrency,
        } => {
            let app_config = match config_path {
                Some(config_path) => {
                    tracing::info!("Loading configuration from {}", config_path);
                    load_config(&config_path)?
                }
                None => Config::default(),
            };
            let download_config = app_config.download;

            let concurrency = concurrency.unwrap_or(download_config.concurrency);
            let concurrency =
                NonZeroUsize::new(concurrency).ok_or_else(|| SceneFetchError::CliArgumentValidation {
                    details: "concurrency must be greater than 0.".to_string(),
                })?;

            let directory = match directory
                .map(PathBuf::from)
                .or_else(|| download_config.directory.clone())
            {
                Some(directory) => directory,
                None => std::env::current_dir()?,
            };

            let configured = download_config.selection();
            let selection = ProductSelection {
                product: product.unwrap_or(configured.product),
                size: size.unwrap_or(configured.size),
                format: format.unwrap_or(configured.format),
            };

            Ok(ResolvedCommand::Download(DownloadParams {
                scenes_path: scenes_path.map(PathBuf::from),
                directory,
                selection,
                options: DownloadOptions { concurrency },
                http: http_client_options(&app_config.http),
            }))
        }
        Command::TileUrl {
            template,
            api_key,
            json,
        } => Ok(ResolvedCommand::TileUrl(TileUrlParams {
            template,
            api_key,
            json,
        })),
    }
}

fn http_client_options(http_config: &HttpConfig) -> HttpClientOptions {
    let defaults = HttpClientOptions::default();
    HttpClientOptions {
        user_agent: http_config
            .user_agent
            .clone()
            .unwrap_or(defaults.user_agent),
        connect_timeout: http_config.connect_timeout_secs.map(Duration::from_secs),
        timeout: http_config.timeout_secs.map(Duration::from_secs),
    }
}
