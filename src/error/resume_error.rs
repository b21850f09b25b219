//! Unified error type for loading a resume document.
//!
//! `ResumeError` is what the view model sees when a fetch-then-decode cycle
//! fails: either the bytes never arrived or they arrived malformed.

use thiserror::Error;

use super::category::ErrorCategory;
use super::decode::DecodeError;
use super::fetch::FetchError;

/// Any failure along the fetch -> decode path.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResumeError {
    /// The fetcher could not deliver the document.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The document was delivered but is malformed.
    #[error("malformed document: {0}")]
    Decode(#[from] DecodeError),
}

impl ResumeError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ResumeError::Fetch(FetchError::Transport(_)) => ErrorCategory::Network,
            ResumeError::Fetch(FetchError::ErrorStatus(_))
            | ResumeError::Fetch(FetchError::InvalidResponse { .. }) => ErrorCategory::Server,
            ResumeError::Fetch(FetchError::MissingResource { .. }) => ErrorCategory::Configuration,
            ResumeError::Decode(_) => ErrorCategory::Document,
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ResumeError::Fetch(err) => err.error_code(),
            ResumeError::Decode(err) => err.error_code(),
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            ResumeError::Fetch(FetchError::MissingResource { location }) => {
                format!("The resume document could not be found at {}.", location)
            }
            ResumeError::Fetch(FetchError::ErrorStatus(404)) => {
                "The resume document was not found on the server.".to_string()
            }
            ResumeError::Fetch(FetchError::ErrorStatus(status)) => {
                format!("The server returned an error (HTTP {}).", status)
            }
            ResumeError::Fetch(FetchError::InvalidResponse { .. }) => {
                "The server returned an invalid response.".to_string()
            }
            ResumeError::Fetch(FetchError::Transport(_)) => {
                "Unable to reach the server. Please check your internet connection.".to_string()
            }
            ResumeError::Decode(err) => match err.path() {
                Some(path) if !path.is_empty() => {
                    format!("The resume document is malformed near {}.", path)
                }
                _ => "The resume document is malformed.".to_string(),
            },
        }
    }

    /// Get the recovery hint for this error.
    pub fn recovery_hint(&self) -> &'static str {
        self.category().recovery_hint()
    }
}
