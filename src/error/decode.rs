//! Errors raised while decoding a resume document into a node tree.
//!
//! Every variant is a "malformed document": the bytes arrived but do not
//! describe a valid tree. Each carries the JSON-pointer path of the node
//! that failed so the diagnostic can point at the offending spot.

use thiserror::Error;

/// A decode failure with enough context to report the offending key/value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    /// The input was not parseable JSON at all.
    #[error("invalid JSON: {message}")]
    InvalidJson { message: String },

    /// Nodes nest deeper than the decoder accepts.
    #[error("document nested too deeply (more than {limit} levels of nodes)")]
    NestedTooDeeply { limit: usize },

    /// A node position held something other than a JSON object.
    #[error("expected a node object at '{path}', found {found}")]
    NotAnObject { path: String, found: String },

    /// A node object had no keys.
    #[error("node at '{path}' has no recognized key")]
    NoRecognizedKey { path: String },

    /// A node object had more than one key.
    #[error("node at '{path}' has {} keys ({}), expected exactly one", .keys.len(), .keys.join(", "))]
    MultipleKeys { path: String, keys: Vec<String> },

    /// A node object's only key is not a known node kind.
    #[error("unknown node kind '{key}' at '{path}'")]
    UnknownKey { path: String, key: String },

    /// A required field is absent from a node body.
    #[error("missing field '{field}' at '{path}'")]
    MissingField { path: String, field: &'static str },

    /// A field is present but has the wrong JSON type.
    #[error("field '{field}' at '{path}' must be {expected}, found {found}")]
    InvalidField {
        path: String,
        field: &'static str,
        expected: &'static str,
        found: String,
    },

    /// `axis` is not one of the two accepted wire strings.
    #[error("invalid axis '{value}' at '{path}' (expected \"horizontal\" or \"verticle\")")]
    InvalidAxis { path: String, value: String },

    /// `alignment` is not one of the five accepted tokens.
    #[error("invalid alignment '{value}' at '{path}'")]
    InvalidAlignment { path: String, value: String },

    /// `space.value` is neither a nonnegative number nor "flex".
    #[error("invalid space value {value} at '{path}' (expected a nonnegative number or \"flex\")")]
    InvalidSpaceValue { path: String, value: String },
}

impl DecodeError {
    /// Every decode failure means the document itself is malformed.
    pub fn is_malformed_document(&self) -> bool {
        true
    }

    /// Path of the node that failed, if the failure is tied to one.
    pub fn path(&self) -> Option<&str> {
        match self {
            DecodeError::InvalidJson { .. } | DecodeError::NestedTooDeeply { .. } => None,
            DecodeError::NotAnObject { path, .. }
            | DecodeError::NoRecognizedKey { path }
            | DecodeError::MultipleKeys { path, .. }
            | DecodeError::UnknownKey { path, .. }
            | DecodeError::MissingField { path, .. }
            | DecodeError::InvalidField { path, .. }
            | DecodeError::InvalidAxis { path, .. }
            | DecodeError::InvalidAlignment { path, .. }
            | DecodeError::InvalidSpaceValue { path, .. } => Some(path),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            DecodeError::InvalidJson { .. } => "DOC_INVALID_JSON",
            DecodeError::NestedTooDeeply { .. } => "DOC_TOO_DEEP",
            DecodeError::NotAnObject { .. } => "DOC_NOT_OBJECT",
            DecodeError::NoRecognizedKey { .. } => "DOC_NO_KEY",
            DecodeError::MultipleKeys { .. } => "DOC_MULTIPLE_KEYS",
            DecodeError::UnknownKey { .. } => "DOC_UNKNOWN_KEY",
            DecodeError::MissingField { .. } => "DOC_MISSING_FIELD",
            DecodeError::InvalidField { .. } => "DOC_INVALID_FIELD",
            DecodeError::InvalidAxis { .. } => "DOC_INVALID_AXIS",
            DecodeError::InvalidAlignment { .. } => "DOC_INVALID_ALIGNMENT",
            DecodeError::InvalidSpaceValue { .. } => "DOC_INVALID_SPACE",
        }
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        let message = err.to_string();
        // serde_json has no public error code for its own nesting limit.
        if message.starts_with("recursion limit exceeded") {
            return DecodeError::NestedTooDeeply {
                limit: crate::descriptor::MAX_NODE_DEPTH,
            };
        }
        DecodeError::InvalidJson { message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiple_keys_display_lists_keys() {
        let err = DecodeError::MultipleKeys {
            path: "".to_string(),
            keys: vec!["title".to_string(), "body".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "node at '' has 2 keys (title, body), expected exactly one"
        );
    }

    #[test]
    fn test_invalid_axis_display() {
        let err = DecodeError::InvalidAxis {
            path: "/stack".to_string(),
            value: "vertical".to_string(),
        };
        assert!(err.to_string().contains("'vertical'"));
        assert!(err.to_string().contains("verticle"));
    }

    #[test]
    fn test_path_accessor() {
        let err = DecodeError::UnknownKey {
            path: "/stack/subviews/1".to_string(),
            key: "image".to_string(),
        };
        assert_eq!(err.path(), Some("/stack/subviews/1"));
        assert_eq!(
            DecodeError::InvalidJson {
                message: "eof".to_string()
            }
            .path(),
            None
        );
    }

    #[test]
    fn test_from_serde_json_error() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let decode: DecodeError = err.into();
        assert!(matches!(decode, DecodeError::InvalidJson { .. }));
        assert!(decode.is_malformed_document());
    }
}
