//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP GET used by the remote document fetcher
//! - [`DataFetcher`] - Supplies the raw bytes of the resume document

pub mod fetcher;
pub mod http;

pub use fetcher::DataFetcher;
pub use http::{Headers, HttpClient, HttpError, Response};
