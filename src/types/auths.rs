//! Auth endpoint payloads.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct SigninRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SigninResponse {
    /// Access token; a JWT carrying `teamId`/`userId`/`iat`/`exp`.
    pub token: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub company_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SignupResponse {
    pub message: String,
}
