//! Authentication: token persistence and inspection.
//!
//! The pipeline never owns credential state. It reads and clears tokens
//! through the injected [`TokenStore`] seam, and detects expiry client-side
//! by decoding the token's embedded `exp` claim — there is no refresh flow.

mod session;
mod store;
mod token;

pub use session::Navigator;
pub use store::{MemoryTokenStore, TokenStore};
pub use token::{TokenClaims, TokenStatus, decode_claims, token_status};

pub(crate) use session::signin_redirect_url;
pub(crate) use session::SIGNIN_PATH;
