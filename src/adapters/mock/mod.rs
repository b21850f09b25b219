//! Mock implementations for testing.
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`StaticDataFetcher`] - Document fetcher with a canned result

pub mod fetcher;
pub mod http;

pub use fetcher::StaticDataFetcher;
pub use http::{MockHttpClient, MockResponse, RecordedRequest};
