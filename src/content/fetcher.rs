//! Content retrieval
//!
//! A [`ContentSource`] fetches a content file by its relative path.
//! [`fetch_and_convert`] is the only consumer the pages use: it never fails,
//! it falls back to a fixed message for the kind of item instead.

use async_trait::async_trait;
use indexmap::IndexMap;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

use super::converter::convert;
use crate::catalog::ContentKind;

/// Content retrieval errors
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid content path: {0}")]
    InvalidPath(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Content not found: {0}")]
    NotFound(String),
}

/// Fetch-by-path capability
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Retrieve the full text of the file at `path`; invalid UTF-8 is
    /// replaced with U+FFFD
    async fn fetch(&self, path: &str) -> Result<String, FetchError>;
}

/// Reads content files below a root directory
#[derive(Debug, Clone)]
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Resolve `path` below the root; absolute paths and `..` are refused
    fn resolve(&self, path: &str) -> Result<PathBuf, FetchError> {
        let relative = Path::new(path);
        let is_plain = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        if path.is_empty() || !is_plain {
            return Err(FetchError::InvalidPath(path.to_string()));
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl ContentSource for FsSource {
    async fn fetch(&self, path: &str) -> Result<String, FetchError> {
        let full = self.resolve(path)?;
        tracing::debug!("Reading content {:?}", full);
        let bytes = tokio::fs::read(&full).await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Fetches content files relative to a base URL
#[derive(Debug, Clone)]
pub struct HttpSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    pub fn with_client(base_url: &str, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl ContentSource for HttpSource {
    async fn fetch(&self, path: &str) -> Result<String, FetchError> {
        let url = self.url_for(path);
        tracing::debug!("Fetching content {}", url);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url,
            });
        }
        let bytes = response.bytes().await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Content held in memory, keyed by path
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: IndexMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: &str, text: &str) -> Self {
        self.insert(path, text);
        self
    }

    pub fn insert(&mut self, path: &str, text: &str) {
        self.files.insert(path.to_string(), text.to_string());
    }
}

#[async_trait]
impl ContentSource for MemorySource {
    async fn fetch(&self, path: &str) -> Result<String, FetchError> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(path.to_string()))
    }
}

/// Fetch a content file and convert it to HTML.
///
/// Resolves to the kind's fallback message when retrieval fails.
pub async fn fetch_and_convert<S>(source: &S, path: &str, kind: ContentKind) -> String
where
    S: ContentSource + ?Sized,
{
    match source.fetch(path).await {
        Ok(text) => convert(&text),
        Err(e) => {
            tracing::warn!("Failed to load {:?} content {}: {}", kind, path, e);
            kind.fallback_html().to_string()
        }
    }
}
