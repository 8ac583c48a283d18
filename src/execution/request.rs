//! Request descriptor types consumed by the pipeline.

use std::collections::HashMap;
use std::time::Duration;

use super::cancel::CancelHandle;

/// Default per-call timeout when the caller supplies neither a timeout nor a
/// cancellation handle of their own.
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Request body variants.
///
/// Structured payloads are JSON-encoded by the pipeline; opaque payloads pass
/// through unmodified so the transport can set its own framing (notably the
/// multipart boundary).
pub enum HttpBody {
    /// No request body (GET, DELETE, and bodiless POSTs such as `join`).
    Empty,
    /// Structured payload; serialized with `Content-Type: application/json`.
    Json(serde_json::Value),
    /// Multipart form. The transport owns the boundary-based `Content-Type`.
    Multipart(reqwest::multipart::Form),
    /// Raw bytes, passed through with no `Content-Type` forced.
    Bytes(Vec<u8>),
}

/// Per-call configuration, merged over the pipeline's defaults.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Attach `Authorization: Bearer <token>` from the token store. Fails
    /// fast with a 401-shaped error when no usable token exists.
    pub with_auth: bool,
    /// Per-call timeout; defaults to 10 seconds. Ignored when `cancel` is
    /// set — the caller's handle is then the only abort source.
    pub timeout: Option<Duration>,
    /// Caller-owned cancellation handle. Takes precedence over the internal
    /// timeout; the pipeline never arms both.
    pub cancel: Option<CancelHandle>,
    /// Extra headers, merged key-by-key over the pipeline's defaults.
    pub headers: HashMap<String, String>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require bearer-token authorization for this call.
    pub fn with_auth(mut self) -> Self {
        self.with_auth = true;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn cancel(mut self, handle: CancelHandle) -> Self {
        self.cancel = Some(handle);
        self
    }

    /// Add one extra header for this call.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// A fully described call, consumed once by `execute`.
pub(crate) struct Request {
    pub method: reqwest::Method,
    pub path: String,
    pub body: HttpBody,
    pub options: RequestOptions,
}

/// Correlation context attached to tracing output for one call.
pub(crate) struct RequestContext {
    pub request_id: String,
    pub method: reqwest::Method,
    pub path: String,
}

impl RequestContext {
    pub(crate) fn new(method: &reqwest::Method, path: &str) -> Self {
        Self {
            request_id: uuid::Uuid::new_v4().to_string(),
            method: method.clone(),
            path: path.to_string(),
        }
    }
}
