//! Fetcher that reads the resume document from a local file.

use async_trait::async_trait;
use bytes::Bytes;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::FetchError;
use crate::traits::DataFetcher;

/// Reads the document from a file shipped alongside the binary.
#[derive(Debug, Clone)]
pub struct BundledDataFetcher {
    path: PathBuf,
    location: String,
}

impl BundledDataFetcher {
    /// Fetcher for an explicit file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let location = path.display().to_string();
        Self { path, location }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DataFetcher for BundledDataFetcher {
    fn location(&self) -> &str {
        &self.location
    }

    async fn fetch(&self) -> Result<Bytes, FetchError> {
        match tokio::fs::read(&self.path).await {
            Ok(contents) => {
                tracing::debug!(path = %self.location, bytes = contents.len(), "Read bundled document");
                Ok(Bytes::from(contents))
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Err(FetchError::MissingResource {
                location: self.location.clone(),
            }),
            Err(err) => Err(FetchError::Transport(format!("{}: {}", self.location, err))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_fetch_reads_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ok.json");
        std::fs::write(&path, br#"{"title":{"text":"A"}}"#).unwrap();

        let fetcher = BundledDataFetcher::new(&path);
        let bytes = fetcher.fetch().await.unwrap();
        assert_eq!(&bytes[..], br#"{"title":{"text":"A"}}"#);
    }

    #[tokio::test]
    async fn test_fetch_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let fetcher = BundledDataFetcher::new(temp_dir.path().join("missing.json"));
        let err = fetcher.fetch().await.unwrap_err();
        assert!(matches!(err, FetchError::MissingResource { .. }));
    }

    #[tokio::test]
    async fn test_fetch_directory_is_transport_error() {
        let temp_dir = TempDir::new().unwrap();
        let fetcher = BundledDataFetcher::new(temp_dir.path());
        let err = fetcher.fetch().await.unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
    }

    #[test]
    fn test_location_is_path() {
        let fetcher = BundledDataFetcher::new("/tmp/resume.json");
        assert_eq!(fetcher.location(), "/tmp/resume.json");
        assert_eq!(fetcher.path(), Path::new("/tmp/resume.json"));
    }
}
