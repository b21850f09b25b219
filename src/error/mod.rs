//! Error handling for the resume viewer.
//!
//! - [`DecodeError`]: the document is malformed (unknown/duplicate/missing
//!   keys, bad axis, alignment or space values)
//! - [`FetchError`]: the document could not be obtained
//! - [`ResumeError`]: either of the above, with a category, an error code and
//!   a user-facing message
//!
//! | Category | Description | Retryable |
//! |----------|-------------|-----------|
//! | Network | Connection, DNS, TLS | Yes |
//! | Server | Error status, invalid response | Yes |
//! | Document | Malformed resume document | No |
//! | Configuration | Missing local document | No |
//!
//! None of these abort the process; the view model logs them and keeps its
//! previous state.

mod category;
mod decode;
mod fetch;
mod result;
mod resume_error;

pub use category::ErrorCategory;
pub use decode::DecodeError;
pub use fetch::FetchError;
pub use result::ResumeResult;
pub use resume_error::ResumeError;
