//! Fetcher that downloads the resume document over HTTP.

use async_trait::async_trait;
use bytes::Bytes;
use std::sync::Arc;

use crate::error::FetchError;
use crate::traits::{DataFetcher, Headers, HttpClient};

/// The published resume document.
pub const DEFAULT_RESUME_URL: &str = "https://gist.githubusercontent.com/tgeernaert/ceb10b281131c2153b4f282f778e3f25/raw/52f076dbd1f99dacb4223b1fc4f09e34ea65d3a4/resume.json";

/// Performs one GET against a fixed URL per fetch.
#[derive(Clone)]
pub struct RemoteDataFetcher {
    client: Arc<dyn HttpClient>,
    url: String,
}

impl RemoteDataFetcher {
    pub fn new(client: Arc<dyn HttpClient>, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// Fetcher for [`DEFAULT_RESUME_URL`].
    pub fn published(client: Arc<dyn HttpClient>) -> Self {
        Self::new(client, DEFAULT_RESUME_URL)
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl std::fmt::Debug for RemoteDataFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteDataFetcher")
            .field("url", &self.url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl DataFetcher for RemoteDataFetcher {
    fn location(&self) -> &str {
        &self.url
    }

    async fn fetch(&self) -> Result<Bytes, FetchError> {
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());

        let response = self
            .client
            .get(&self.url, &headers)
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        // Anything outside the HTTP status range is not a real HTTP response.
        if !(100..=599).contains(&response.status) {
            return Err(FetchError::InvalidResponse {
                location: self.url.clone(),
            });
        }
        if !response.is_success() {
            tracing::warn!(url = %self.url, status = response.status, "Document request failed");
            return Err(FetchError::ErrorStatus(response.status));
        }
        if response.body.is_empty() {
            return Err(FetchError::MissingResource {
                location: self.url.clone(),
            });
        }

        tracing::debug!(url = %self.url, bytes = response.body.len(), "Downloaded document");
        Ok(response.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::traits::{HttpError, Response};

    const URL: &str = "https://example.com/resume.json";

    fn fetcher_with(response: MockResponse) -> (RemoteDataFetcher, MockHttpClient) {
        let client = MockHttpClient::new();
        client.set_response(URL, response);
        (RemoteDataFetcher::new(Arc::new(client.clone()), URL), client)
    }

    #[tokio::test]
    async fn test_fetch_success_returns_body() {
        let (fetcher, client) = fetcher_with(MockResponse::Success(Response::new(
            200,
            Bytes::from_static(b"{}"),
        )));

        let body = fetcher.fetch().await.unwrap();
        assert_eq!(&body[..], b"{}");

        let requests = client.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, URL);
        assert_eq!(
            requests[0].headers.get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[tokio::test]
    async fn test_fetch_error_status() {
        let (fetcher, _) =
            fetcher_with(MockResponse::Success(Response::new(404, Bytes::new())));
        assert_eq!(fetcher.fetch().await, Err(FetchError::ErrorStatus(404)));
    }

    #[tokio::test]
    async fn test_fetch_empty_body_is_missing_resource() {
        let (fetcher, _) =
            fetcher_with(MockResponse::Success(Response::new(200, Bytes::new())));
        assert!(matches!(
            fetcher.fetch().await,
            Err(FetchError::MissingResource { .. })
        ));
    }

    #[tokio::test]
    async fn test_fetch_bogus_status_is_invalid_response() {
        let (fetcher, _) = fetcher_with(MockResponse::Success(Response::new(
            0,
            Bytes::from_static(b"{}"),
        )));
        assert!(matches!(
            fetcher.fetch().await,
            Err(FetchError::InvalidResponse { .. })
        ));
    }

    #[tokio::test]
    async fn test_fetch_transport_error() {
        let (fetcher, _) = fetcher_with(MockResponse::Error(HttpError::ConnectionFailed(
            "refused".to_string(),
        )));
        assert_eq!(
            fetcher.fetch().await,
            Err(FetchError::Transport("Connection failed: refused".to_string()))
        );
    }

    #[test]
    fn test_published_url() {
        let fetcher = RemoteDataFetcher::published(Arc::new(MockHttpClient::new()));
        assert_eq!(fetcher.location(), DEFAULT_RESUME_URL);
    }
}
