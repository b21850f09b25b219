//! Errors raised by document fetchers.

use thiserror::Error;

/// Failure to obtain the raw document bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The document was not found at the configured location.
    #[error("resume document not found: {location}")]
    MissingResource { location: String },

    /// The server did not return a usable response.
    #[error("invalid response from {location}")]
    InvalidResponse { location: String },

    /// The server returned a non-2xx status code.
    #[error("server returned status {0}")]
    ErrorStatus(u16),

    /// The request never completed (connection, DNS, TLS, timeout).
    #[error("transport error: {0}")]
    Transport(String),
}

impl FetchError {
    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            FetchError::MissingResource { .. } => "FETCH_MISSING",
            FetchError::InvalidResponse { .. } => "FETCH_INVALID_RESPONSE",
            FetchError::ErrorStatus(_) => "FETCH_STATUS",
            FetchError::Transport(_) => "FETCH_TRANSPORT",
        }
    }

    /// Status code carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::ErrorStatus(code) => Some(*code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_display() {
        assert_eq!(
            FetchError::ErrorStatus(404).to_string(),
            "server returned status 404"
        );
        assert_eq!(
            FetchError::MissingResource {
                location: "resume.json".to_string()
            }
            .to_string(),
            "resume document not found: resume.json"
        );
    }

    #[test]
    fn test_fetch_error_status() {
        assert_eq!(FetchError::ErrorStatus(503).status(), Some(503));
        assert_eq!(FetchError::Transport("refused".to_string()).status(), None);
    }
}
