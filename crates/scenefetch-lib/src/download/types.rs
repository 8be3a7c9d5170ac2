use std::num::NonZeroUsize;
use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadTask {
    pub source_url: String,
    pub target_directory: PathBuf,
}

impl DownloadTask {
    pub fn new(source_url: impl Into<String>, target_directory: impl Into<PathBuf>) -> Self {
        Self {
            source_url: source_url.into(),
            target_directory: target_directory.into(),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct DownloadOptions {
    pub concurrency: NonZeroUsize,
}

impl DownloadOptions {
    pub const DEFAULT_CONCURRENCY: NonZeroUsize = NonZeroUsize::new(16).unwrap();
}

/// What a successful batch produced, in completion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub outputs: Vec<PathBuf>,
}

impl BatchSummary {
    pub fn len(&self) -> usize {
        self.outputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }
}
