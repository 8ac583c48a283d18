//! Cancellation utilities
//!
//! Provides a first-class cancellation handle for in-flight requests.

use tokio_util::sync::CancellationToken;

/// A handle that can be used to request cancellation of a call.
///
/// When a caller supplies one via
/// [`RequestOptions::cancel`](super::RequestOptions::cancel), it becomes the
/// *only* abort source for that call — the pipeline does not arm its internal
/// timeout alongside it. Cloning shares the same underlying token.
#[derive(Clone, Debug, Default)]
pub struct CancelHandle {
    token: CancellationToken,
}

impl CancelHandle {
    /// Create a new cancel handle.
    pub fn new() -> Self {
        Self {
            token: CancellationToken::new(),
        }
    }

    /// Request cancellation. The governed request settles as soon as possible
    /// with the abort-classified error; dropping it closes the underlying
    /// HTTP connection.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Check if cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// A future that resolves when cancellation is requested.
    pub fn cancelled(&self) -> tokio_util::sync::WaitForCancellationFuture<'_> {
        self.token.cancelled()
    }
}
