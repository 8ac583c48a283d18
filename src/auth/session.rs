//! Session teardown on 401.

/// Route of the sign-in page. The 401 side effect never redirects when the
/// navigator already reports this path.
pub(crate) const SIGNIN_PATH: &str = "/signin";

/// Navigation seam for the 401 sign-out-and-redirect side effect.
///
/// Stands in for the host application's location/router. Embedders that have
/// no navigation concept can simply not configure one; the token is still
/// cleared on 401 and only the redirect is skipped.
pub trait Navigator: Send + Sync {
    /// The path the user is currently on.
    fn current_path(&self) -> String;

    /// Navigate to `url`. Called at most once per failed request.
    fn navigate(&self, url: &str);
}

/// Build the sign-in redirect carrying the current path for post-login
/// return, e.g. `/signin?next=%2Fgatherings%2F7`.
pub(crate) fn signin_redirect_url(current_path: &str) -> String {
    format!("{SIGNIN_PATH}?next={}", urlencoding::encode(current_path))
}
