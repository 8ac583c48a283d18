//! Header merging.
//!
//! Caller-supplied headers are merged key-by-key over the pipeline's
//! defaults, so a request that adds one custom header does not wipe out the
//! `Content-Type` or `Authorization` the pipeline already set. Header names
//! normalize to lowercase through `HeaderName`, which makes the merge
//! case-insensitive.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::collections::HashMap;

/// Merge extra headers into base headers, returning a new map.
///
/// Extra headers override base headers of the same (case-insensitive) name;
/// all other base entries survive.
pub fn merge_headers(mut base: HeaderMap, extra: &HashMap<String, String>) -> HeaderMap {
    apply_extra_headers(&mut base, extra);
    base
}

/// Apply extra headers to a mutable HeaderMap in place.
///
/// Entries that do not form a valid header name/value pair are skipped.
pub fn apply_extra_headers(base: &mut HeaderMap, extra: &HashMap<String, String>) {
    for (k, v) in extra {
        match (
            HeaderName::from_bytes(k.as_bytes()),
            HeaderValue::from_str(v),
        ) {
            (Ok(name), Ok(val)) => {
                base.insert(name, val);
            }
            _ => {
                tracing::warn!(header = %k, "skipping invalid request header");
            }
        }
    }
}
