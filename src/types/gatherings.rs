//! Gathering payloads and query filters.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::types::user::ImageUpload;

/// Program type of a gathering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GatheringType {
    Dallaemfit,
    OfficeStretching,
    Mindfulness,
    Workation,
}

impl GatheringType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dallaemfit => "DALLAEMFIT",
            Self::OfficeStretching => "OFFICE_STRETCHING",
            Self::Mindfulness => "MINDFULNESS",
            Self::Workation => "WORKATION",
        }
    }
}

impl std::fmt::Display for GatheringType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Supported gathering locations. The wire values are the Korean district
/// names the service uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GatheringLocation {
    #[serde(rename = "건대입구")]
    KonkukUniv,
    #[serde(rename = "을지로3가")]
    Euljiro3ga,
    #[serde(rename = "신림")]
    Sillim,
    #[serde(rename = "홍대입구")]
    HongikUniv,
}

impl GatheringLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::KonkukUniv => "건대입구",
            Self::Euljiro3ga => "을지로3가",
            Self::Sillim => "신림",
            Self::HongikUniv => "홍대입구",
        }
    }
}

impl std::fmt::Display for GatheringLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction for list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gathering {
    pub team_id: i64,
    pub id: i64,
    #[serde(rename = "type")]
    pub gathering_type: GatheringType,
    pub name: String,
    pub date_time: DateTime<Utc>,
    pub registration_end: DateTime<Utc>,
    pub location: String,
    pub participant_count: u32,
    pub capacity: u32,
    pub image: Option<String>,
    pub created_by: i64,
    /// Set when the owner cancelled the gathering.
    pub canceled_at: Option<DateTime<Utc>>,
}

/// A gathering the signed-in user has joined.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinedGathering {
    #[serde(flatten)]
    pub gathering: Gathering,
    pub joined_at: DateTime<Utc>,
    pub is_completed: bool,
    pub is_reviewed: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatheringParticipant {
    pub team_id: i64,
    pub user_id: i64,
    pub gathering_id: i64,
    pub joined_at: DateTime<Utc>,
    #[serde(rename = "User")]
    pub user: ParticipantUser,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantUser {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub company_name: String,
    pub image: Option<String>,
}

/// Filters for `GET /gatherings`. Absent fields are omitted from the query.
#[derive(Debug, Clone, Default)]
pub struct GatheringsQuery {
    pub gathering_type: Option<GatheringType>,
    pub location: Option<GatheringLocation>,
    /// Gathering date, `YYYY-MM-DD`.
    pub date: Option<NaiveDate>,
    pub created_by: Option<i64>,
    pub sort_by: Option<GatheringSortBy>,
    pub sort_order: Option<SortOrder>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatheringSortBy {
    DateTime,
    RegistrationEnd,
    ParticipantCount,
}

impl std::fmt::Display for GatheringSortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::DateTime => "dateTime",
            Self::RegistrationEnd => "registrationEnd",
            Self::ParticipantCount => "participantCount",
        })
    }
}

/// Filters for `GET /gatherings/joined`.
#[derive(Debug, Clone, Default)]
pub struct JoinedGatheringsQuery {
    pub completed: Option<bool>,
    pub reviewed: Option<bool>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub sort_by: Option<JoinedSortBy>,
    pub sort_order: Option<SortOrder>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinedSortBy {
    DateTime,
    RegistrationEnd,
    JoinedAt,
}

impl std::fmt::Display for JoinedSortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::DateTime => "dateTime",
            Self::RegistrationEnd => "registrationEnd",
            Self::JoinedAt => "joinedAt",
        })
    }
}

/// Payload for creating a gathering. Sent as multipart form data so the
/// image file can ride along.
#[derive(Debug, Clone)]
pub struct CreateGathering {
    pub name: String,
    pub location: GatheringLocation,
    pub gathering_type: GatheringType,
    pub date_time: DateTime<Utc>,
    pub registration_end: DateTime<Utc>,
    pub capacity: u32,
    pub image: Option<ImageUpload>,
}
