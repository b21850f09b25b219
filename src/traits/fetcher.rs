//! Document fetcher abstraction.
//!
//! A fetcher produces the raw bytes of the resume document. It knows nothing
//! about the document's shape; decoding happens in [`crate::descriptor`].

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::FetchError;

/// Source of the resume document's raw bytes.
///
/// Each call to [`fetch`](DataFetcher::fetch) performs one independent
/// retrieval. Implementations must be shareable across tasks.
#[async_trait]
pub trait DataFetcher: Send + Sync {
    /// Human-readable location of the document (URL or file path).
    fn location(&self) -> &str;

    /// Retrieve the document bytes.
    async fn fetch(&self) -> Result<Bytes, FetchError>;
}
