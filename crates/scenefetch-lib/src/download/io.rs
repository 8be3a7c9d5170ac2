use super::error::TransportError;
use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::{BoxStream, StreamExt, TryStreamExt};
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use std::path::Path;
use std::time::Duration;
use tokio::io::AsyncWrite;

/// The network side of a download.
///
/// Any response that made it back from the server is `Ok`, whatever its status; only
/// transport failures are reported as errors.
#[async_trait]
pub trait HttpClient: Send + Sync {
    type Response: HttpResponse;

    async fn get(&self, url: &str) -> Result<Self::Response, TransportError>;
}

pub trait HttpResponse: Send {
    fn status(&self) -> StatusCode;

    fn headers(&self) -> &HeaderMap;

    fn into_body_stream(self) -> BoxStream<'static, Result<Bytes, TransportError>>;
}

/// The disk side of a download.
#[async_trait]
pub trait FileSystem: Send + Sync {
    type Writer: AsyncWrite + Unpin + Send;

    async fn create(&self, path: &Path) -> std::io::Result<Self::Writer>;
}

#[derive(Clone, Debug)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

#[derive(Clone, Debug)]
pub struct HttpClientOptions {
    pub user_agent: String,
    pub connect_timeout: Option<Duration>,
    pub timeout: Option<Duration>,
}

impl HttpClientOptions {
    pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(30);
}

impl Default for HttpClientOptions {
    fn default() -> Self {
        Self {
            user_agent: concat!("scenefetch/", env!("CARGO_PKG_VERSION")).to_string(),
            connect_timeout: Some(Self::DEFAULT_CONNECT_TIMEOUT),
            timeout: None,
        }
    }
}

impl ReqwestHttpClient {
    pub fn new(options: &HttpClientOptions) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder().user_agent(&options.user_agent);
        if let Some(connect_timeout) = options.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    type Response = reqwest::Response;

    async fn get(&self, url: &str) -> Result<Self::Response, TransportError> {
        Ok(self.client.get(url).send().await?)
    }
}

impl HttpResponse for reqwest::Response {
    fn status(&self) -> StatusCode {
        self.status()
    }

    fn headers(&self) -> &HeaderMap {
        self.headers()
    }

    fn into_body_stream(self) -> BoxStream<'static, Result<Bytes, TransportError>> {
        self.bytes_stream().map_err(TransportError::from).boxed()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TokioFileSystem;

#[async_trait]
impl FileSystem for TokioFileSystem {
    type Writer = tokio::fs::File;

    async fn create(&self, path: &Path) -> std::io::Result<Self::Writer> {
        tokio::fs::File::create(path).await
    }
}
