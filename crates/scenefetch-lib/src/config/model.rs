use crate::download::{DownloadOptions, HttpClientOptions};
use crate::scenes::{Product, ProductSelection, ThumbnailFormat, ThumbnailSize};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub download: DownloadConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct DownloadConfig {
    /// Output directory; the current directory when unset.
    pub directory: Option<PathBuf>,
    pub concurrency: usize,
    pub product: Product,
    pub size: ThumbnailSize,
    pub format: ThumbnailFormat,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            directory: None,
            concurrency: DownloadOptions::DEFAULT_CONCURRENCY.get(),
            product: Product::default(),
            size: ThumbnailSize::default(),
            format: ThumbnailFormat::default(),
        }
    }
}

impl DownloadConfig {
    pub fn selection(&self) -> ProductSelection {
        ProductSelection {
            product: self.product,
            size: self.size,
            format: self.format,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct HttpConfig {
    pub user_agent: Option<String>,
    pub connect_timeout_secs: Option<u64>,
    pub timeout_secs: Option<u64>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: None,
            connect_timeout_secs: Some(
                HttpClientOptions::DEFAULT_CONNECT_TIMEOUT.as_secs(),
            ),
            timeout_secs: None,
        }
    }
}
