//! Canned document fetcher for testing.

use async_trait::async_trait;
use bytes::Bytes;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::error::FetchError;
use crate::traits::DataFetcher;

/// Returns the same result on every fetch and counts the calls.
#[derive(Debug, Clone)]
pub struct StaticDataFetcher {
    result: Result<Bytes, FetchError>,
    calls: Arc<AtomicUsize>,
}

impl StaticDataFetcher {
    /// Fetcher that always yields `document`.
    pub fn document(document: impl Into<Bytes>) -> Self {
        Self {
            result: Ok(document.into()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Fetcher that always fails with `error`.
    pub fn failing(error: FetchError) -> Self {
        Self {
            result: Err(error),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of fetches performed so far (shared between clones).
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DataFetcher for StaticDataFetcher {
    fn location(&self) -> &str {
        "static"
    }

    async fn fetch(&self) -> Result<Bytes, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}
