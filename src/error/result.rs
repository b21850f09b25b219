//! Result type alias for resume operations.

use super::resume_error::ResumeError;

/// Type alias for Results using ResumeError.
pub type ResumeResult<T> = Result<T, ResumeError>;
