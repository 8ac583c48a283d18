//! Error Handling Module
//!
//! Every failure path of the request pipeline ends in exactly one
//! [`ApiError`], including:
//! - Pre-flight auth failures (no network I/O performed)
//! - Non-2xx HTTP responses, with the server's error body attached
//! - Transport failures, timeouts, and manual aborts (`status == 0`)
//!
//! # Example
//!
//! ```rust,ignore
//! use dallaem_client::error::{ApiError, ErrorCategory};
//!
//! let error = ApiError::from_response(404, "Not Found", None);
//! assert_eq!(error.category(), ErrorCategory::Client);
//! ```

// Module declarations
mod conversions;
pub mod types;

// Re-exports for public API
pub use types::*;
