//! Error category classification for unified error handling.
//!
//! Categories let the host decide how to treat a failed document load
//! without matching on every concrete error variant.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Transport-level failures (connection refused, DNS, TLS).
    Network,

    /// The server answered, but with an error status or a broken response.
    Server,

    /// The document was fetched but does not describe a valid view tree.
    Document,

    /// The document source is misconfigured (e.g. a missing local file).
    Configuration,
}

impl ErrorCategory {
    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Server => "server",
            ErrorCategory::Document => "document",
            ErrorCategory::Configuration => "configuration",
        }
    }

    /// Returns what the user can do about an error in this category.
    /// The document is loaded once per launch, so every hint ends in a restart.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Check your internet connection, then restart resume",
            ErrorCategory::Server => "The server may be having problems; restart resume later",
            ErrorCategory::Document => "Fix the resume document, then restart resume",
            ErrorCategory::Configuration => "Check the --file/--url settings",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_as_str() {
        assert_eq!(ErrorCategory::Network.as_str(), "network");
        assert_eq!(ErrorCategory::Server.as_str(), "server");
        assert_eq!(ErrorCategory::Document.as_str(), "document");
        assert_eq!(ErrorCategory::Configuration.as_str(), "configuration");
    }

    #[test]
    fn test_category_display() {
        assert_eq!(format!("{}", ErrorCategory::Document), "document");
    }

    #[test]
    fn test_category_recovery_hint() {
        assert!(ErrorCategory::Network.recovery_hint().contains("internet"));
        assert!(ErrorCategory::Document.recovery_hint().contains("document"));
    }

    #[test]
    fn test_recovery_hint_offers_no_in_app_retry() {
        for category in [
            ErrorCategory::Network,
            ErrorCategory::Server,
            ErrorCategory::Document,
            ErrorCategory::Configuration,
        ] {
            let hint = category.recovery_hint();
            assert!(!hint.contains("try again"), "{}", hint);
            assert!(!hint.contains("reload"), "{}", hint);
        }
    }
}
