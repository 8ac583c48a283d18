//! Token persistence seam.

use std::sync::Mutex;

use secrecy::{ExposeSecret, SecretString};

/// Persisted bearer-token storage consumed by the request pipeline.
///
/// The pipeline reads the token on every `with_auth` call and clears it on
/// any 401 response. Implementations must be cheap to call from concurrent
/// in-flight requests; clearing an already-cleared token is a no-op.
pub trait TokenStore: Send + Sync {
    /// The persisted bearer token, if any.
    fn token(&self) -> Option<SecretString>;

    /// Persist a new bearer token, replacing any existing one.
    fn set_token(&self, token: SecretString);

    /// Drop the persisted token.
    fn remove_token(&self);
}

/// In-memory [`TokenStore`].
///
/// The default store for native callers; applications with their own
/// persistence (keychain, config file) implement [`TokenStore`] directly.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<SecretString>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-loaded with a token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(SecretString::from(token.into()))),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn token(&self) -> Option<SecretString> {
        self.token
            .lock()
            .ok()
            .and_then(|guard| guard.as_ref().map(|t| SecretString::from(t.expose_secret())))
    }

    fn set_token(&self, token: SecretString) {
        if let Ok(mut guard) = self.token.lock() {
            *guard = Some(token);
        }
    }

    fn remove_token(&self) {
        if let Ok(mut guard) = self.token.lock() {
            *guard = None;
        }
    }
}
