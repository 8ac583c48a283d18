//! Typed endpoint wrappers, one module per resource.
//!
//! Each function is a thin call into the client's verb methods; errors
//! surface unchanged as [`ApiError`](crate::error::ApiError).

pub mod auths;
pub mod gatherings;
pub mod reviews;

/// Query-string builder. Values are URL-encoded; absent fields are omitted.
#[derive(Debug, Default)]
pub(crate) struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, key: &str, value: impl std::fmt::Display) {
        self.pairs.push((key.to_string(), value.to_string()));
    }

    pub(crate) fn push_opt(&mut self, key: &str, value: Option<impl std::fmt::Display>) {
        if let Some(value) = value {
            self.push(key, value);
        }
    }

    /// Append the accumulated pairs to `path`, or return `path` untouched
    /// when nothing was pushed.
    pub(crate) fn append_to(self, path: &str) -> String {
        if self.pairs.is_empty() {
            return path.to_string();
        }
        let encoded: Vec<String> = self
            .pairs
            .iter()
            .map(|(k, v)| format!("{k}={}", urlencoding::encode(v)))
            .collect();
        format!("{path}?{}", encoded.join("&"))
    }
}
