//! The core request pipeline.

use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde_json::Value;

use super::merge;
use super::request::{DEFAULT_TIMEOUT, HttpBody, Request, RequestContext};
use crate::auth::{decode_claims, signin_redirect_url};
use crate::client::ClientInner;
use crate::error::ApiError;

/// Execute one request and return the parsed JSON response body.
///
/// Every failure path — pre-flight auth, non-2xx response, abort/timeout,
/// transport or parse failure — raises exactly one [`ApiError`].
pub(crate) async fn execute(inner: &ClientInner, request: Request) -> Result<Value, ApiError> {
    let Request {
        method,
        path,
        body,
        options,
    } = request;
    let ctx = RequestContext::new(&method, &path);

    // 1. Compose the full URL from the configured base URL.
    let url = format!("{}{}", inner.base_url, path);

    // 2. Bearer auth pre-flight: fail fast without touching the network when
    //    no usable token exists. An expired `exp` claim counts as no token;
    //    a token that does not decode as a JWT is passed through as opaque.
    let mut headers = HeaderMap::new();
    if options.with_auth {
        let store = inner.token_store.as_deref().ok_or_else(|| {
            ApiError::configuration(
                "with_auth requires a token store; configure one on the client builder",
            )
        })?;

        let now = chrono::Utc::now().timestamp();
        let token = store
            .token()
            .filter(|t| !decode_claims(t.expose_secret()).is_some_and(|c| c.exp < now));

        let Some(token) = token else {
            tracing::warn!(
                request_id = %ctx.request_id,
                path = %ctx.path,
                "with_auth call without a usable token; rejecting before send"
            );
            return Err(ApiError::unauthorized());
        };

        let bearer = format!("Bearer {}", token.expose_secret());
        let mut value = HeaderValue::from_str(&bearer).map_err(|e| {
            ApiError::configuration(format!("token is not a valid header value: {e}"))
        })?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }

    // 3. Body encoding: structured payloads get a JSON content type; opaque
    //    payloads keep their own framing.
    if matches!(body, HttpBody::Json(_)) {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    }

    // 4. Merge caller headers key-by-key over the defaults.
    merge::apply_extra_headers(&mut headers, &options.headers);
    if matches!(body, HttpBody::Multipart(_)) {
        // Multipart must own its boundary-based Content-Type.
        headers.remove(CONTENT_TYPE);
    }

    let mut rb = inner.http.request(method, &url).headers(headers);
    rb = match body {
        HttpBody::Empty => rb,
        HttpBody::Json(json) => rb.body(serde_json::to_vec(&json)?),
        HttpBody::Multipart(form) => rb.multipart(form),
        HttpBody::Bytes(bytes) => rb.body(bytes),
    };

    tracing::debug!(
        request_id = %ctx.request_id,
        method = %ctx.method,
        path = %ctx.path,
        "sending request"
    );

    // 5. Exactly one cancellation source governs the call: the caller's
    //    handle when supplied, otherwise an internal timeout.
    let send = async {
        let resp = rb.send().await.map_err(ApiError::from)?;
        let status = resp.status();
        let text = resp.text().await.map_err(ApiError::from)?;
        Ok::<_, ApiError>((status, text))
    };
    let settled = match &options.cancel {
        Some(handle) => {
            tokio::select! {
                _ = handle.cancelled() => Err(ApiError::aborted()),
                out = send => out,
            }
        }
        None => {
            let timeout = options.timeout.unwrap_or(DEFAULT_TIMEOUT);
            tokio::select! {
                _ = tokio::time::sleep(timeout) => Err(ApiError::aborted()),
                out = send => out,
            }
        }
    };
    let (status, text) = match settled {
        Ok(out) => out,
        Err(err) => {
            tracing::warn!(
                request_id = %ctx.request_id,
                path = %ctx.path,
                error = %err,
                "request did not settle"
            );
            return Err(err);
        }
    };

    // 6. Non-2xx: parse the error body as JSON when possible; a 401 tears the
    //    session down before the error is raised.
    if !status.is_success() {
        let error_body: Option<Value> = serde_json::from_str(&text).ok();
        if status == StatusCode::UNAUTHORIZED {
            expire_session(inner);
        }
        let err = ApiError::from_response(
            status.as_u16(),
            status.canonical_reason().unwrap_or("HTTP error"),
            error_body,
        );
        tracing::warn!(
            request_id = %ctx.request_id,
            path = %ctx.path,
            status = status.as_u16(),
            code = err.code.as_deref().unwrap_or(""),
            "request failed"
        );
        return Err(err);
    }

    // 7. Success: return the parsed JSON body as-is. Empty bodies (DELETE)
    //    decode as null so callers can ask for `()`.
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&text).map_err(|e| {
        tracing::warn!(
            request_id = %ctx.request_id,
            path = %ctx.path,
            "2xx response with an unparseable body"
        );
        ApiError::transport(format!("Invalid JSON response: {e}"))
    })
}

/// The 401 side effect: clear the persisted token, and redirect to the
/// sign-in page carrying the current path unless the navigator is already
/// there. Both halves are idempotent, so concurrent in-flight requests that
/// each observe a 401 are safe.
fn expire_session(inner: &ClientInner) {
    if let Some(store) = &inner.token_store {
        store.remove_token();
    }
    if let Some(nav) = &inner.navigator {
        let current = nav.current_path();
        if current != crate::auth::SIGNIN_PATH {
            nav.navigate(&signin_redirect_url(&current));
        }
    }
    tracing::warn!("session expired: token cleared");
}
