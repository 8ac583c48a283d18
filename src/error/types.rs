//! The structured error raised by the request pipeline.

use serde_json::Value;

/// Message carried by aborted requests, whether the internal timeout or a
/// caller-held [`CancelHandle`](crate::execution::CancelHandle) fired.
pub const ABORT_MESSAGE: &str = "Request aborted (timeout or manual abort)";

/// Coarse classification of an [`ApiError`], derived from its status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 401/403 — session problems; the pipeline has already torn the session down for 401.
    Auth,
    /// Other 4xx — validation failures, conflicts, not-found.
    Client,
    /// 5xx — the caller typically shows a generic "try again" message.
    Server,
    /// Status 0 — no HTTP response was received (network failure, timeout, abort,
    /// or a local pre-flight/configuration failure).
    Transport,
}

/// The single error shape the request pipeline ever raises.
///
/// Callers branch on `status` and `code` rather than on exception types:
/// a 400 with `parameter` maps to an inline field error, a 401 means the
/// session was torn down, a 5xx maps to a generic retry prompt.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message} (status {status})")]
pub struct ApiError {
    /// HTTP status code; `0` means no HTTP response was received.
    pub status: u16,
    /// Human-readable summary. Prefers the server-supplied `message`, falling
    /// back to the transport-level status text.
    pub message: String,
    /// Machine-readable code copied from the server's error body
    /// (e.g. `VALIDATION_ERROR`, `UNAUTHORIZED`, `EMAIL_EXISTS`).
    pub code: Option<String>,
    /// Field name the server flagged as invalid (e.g. `"email"`).
    pub parameter: Option<String>,
    /// Raw parsed error payload; `None` when the body was absent or not valid JSON.
    pub body: Option<Value>,
}

impl ApiError {
    /// Build an error from a non-2xx HTTP response.
    ///
    /// Copies `code`, `parameter` and `message` out of the parsed error body
    /// when present; `status_text` is the fallback message when the body
    /// carries none.
    pub fn from_response(status: u16, status_text: impl Into<String>, body: Option<Value>) -> Self {
        let pick = |key: &str| {
            body.as_ref()
                .and_then(|b| b.get(key))
                .and_then(Value::as_str)
                .map(str::to_owned)
        };
        let message = pick("message").unwrap_or_else(|| status_text.into());
        Self {
            status,
            message,
            code: pick("code"),
            parameter: pick("parameter"),
            body,
        }
    }

    /// A transport-level failure: no HTTP response was received.
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            status: 0,
            message: message.into(),
            code: None,
            parameter: None,
            body: None,
        }
    }

    /// The request was cancelled, by timeout or by an explicit abort.
    pub fn aborted() -> Self {
        Self::transport(ABORT_MESSAGE)
    }

    /// Pre-flight auth failure: `with_auth` was requested but no usable token
    /// exists. Reported as 401 so callers can distinguish it from generic
    /// transport failure the same way they distinguish a server-side 401.
    pub fn unauthorized() -> Self {
        Self::from_response(
            401,
            "Unauthorized",
            Some(serde_json::json!({
                "code": "UNAUTHORIZED",
                "message": "Authorization header required",
            })),
        )
    }

    /// A programmer error in how the client was wired up (e.g. `with_auth`
    /// without a token store). Never produced by server or network behavior.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::transport(message)
    }

    /// Classify this error by its status code.
    pub fn category(&self) -> ErrorCategory {
        match self.status {
            0 => ErrorCategory::Transport,
            401 | 403 => ErrorCategory::Auth,
            400..=499 => ErrorCategory::Client,
            _ => ErrorCategory::Server,
        }
    }

    /// True when this error is the abort/timeout rejection.
    pub fn is_aborted(&self) -> bool {
        self.status == 0 && self.message == ABORT_MESSAGE
    }
}
