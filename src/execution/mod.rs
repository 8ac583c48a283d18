//! Request execution pipeline.
//!
//! One internal `execute` routine carries every call: URL composition, the
//! `with_auth` pre-flight, body encoding, header merging, single-source
//! cancellation, and normalization of every failure into
//! [`ApiError`](crate::error::ApiError).

mod cancel;
mod execute;
pub mod merge;
mod request;

pub use cancel::CancelHandle;
pub use request::{HttpBody, RequestOptions};

pub(crate) use execute::execute;
pub(crate) use request::Request;

#[cfg(test)]
mod tests;
