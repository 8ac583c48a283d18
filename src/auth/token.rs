//! Client-side JWT inspection.
//!
//! The service issues ordinary JWTs; expiry is detected locally by decoding
//! the payload segment. No signature verification happens here — the token is
//! opaque credential material and the server remains the authority.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

/// Claims embedded in a Dallaem access token.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenClaims {
    pub team_id: String,
    pub user_id: i64,
    /// Issued-at, seconds since the Unix epoch.
    pub iat: i64,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
}

/// Expiry state of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenStatus {
    /// Still comfortably valid.
    Valid,
    /// Not yet expired, but expiring within the caller's threshold.
    Imminent,
    /// Expired, or undecodable — treated as not authenticated either way.
    Expired,
}

/// Decode the payload segment of a JWT. Returns `None` for anything that is
/// not three dot-separated segments of base64url JSON.
pub fn decode_claims(token: &str) -> Option<TokenClaims> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Classify a token's expiry against the current clock.
///
/// `threshold_secs` widens the window: a token expiring within that many
/// seconds reports [`TokenStatus::Imminent`]. Pass `0` for a plain
/// expired/valid check.
pub fn token_status(token: &str, threshold_secs: i64) -> TokenStatus {
    let Some(claims) = decode_claims(token) else {
        return TokenStatus::Expired;
    };

    let now = chrono::Utc::now().timestamp();
    if claims.exp < now {
        TokenStatus::Expired
    } else if claims.exp < now + threshold_secs {
        TokenStatus::Imminent
    } else {
        TokenStatus::Valid
    }
}
