//! User profile payloads.

use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub team_id: i64,
    pub id: i64,
    pub name: String,
    pub email: String,
    pub company_name: String,
    /// Profile image URL, if one was uploaded.
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Profile edit. Both fields optional; sent as multipart form data so the
/// image bytes can ride along.
#[derive(Debug, Clone, Default)]
pub struct UpdateUser {
    pub company_name: Option<String>,
    pub image: Option<ImageUpload>,
}

/// A file destined for a multipart `image` part.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    /// Original file name; also used to guess the MIME type.
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }
}
