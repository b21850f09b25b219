//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`BundledDataFetcher`] - Reads the document from a local file
//! - [`RemoteDataFetcher`] - Downloads the document with an [`HttpClient`](crate::traits::HttpClient)
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - Configurable HTTP responses
//! - [`mock::StaticDataFetcher`] - Fixed document bytes or a fixed failure

pub mod bundled;
pub mod mock;
pub mod remote;
pub mod reqwest_http;

pub use bundled::BundledDataFetcher;
pub use mock::{MockHttpClient, StaticDataFetcher};
pub use remote::{RemoteDataFetcher, DEFAULT_RESUME_URL};
pub use reqwest_http::ReqwestHttpClient;
