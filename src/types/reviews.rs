//! Review payloads and query filters.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::types::gatherings::{GatheringLocation, GatheringType, SortOrder};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    pub gathering_id: i64,
    /// 1–5.
    pub score: u8,
    pub comment: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub team_id: i64,
    pub id: i64,
    pub score: u8,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    /// Summary of the reviewed gathering. Capitalized key on the wire.
    #[serde(rename = "Gathering")]
    pub gathering: ReviewGathering,
    /// Review author. Capitalized key on the wire.
    #[serde(rename = "User")]
    pub user: ReviewUser,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewGathering {
    pub team_id: i64,
    pub id: i64,
    #[serde(rename = "type")]
    pub gathering_type: GatheringType,
    pub name: String,
    pub date_time: DateTime<Utc>,
    pub location: String,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewUser {
    pub team_id: i64,
    pub id: i64,
    pub name: String,
    pub image: Option<String>,
}

/// Paginated review listing.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewsPage {
    pub data: Vec<Review>,
    pub total_item_count: u64,
    pub current_page: u32,
    pub total_pages: u32,
}

/// Filters for `GET /reviews`. Absent fields are omitted from the query.
#[derive(Debug, Clone, Default)]
pub struct ReviewsQuery {
    pub gathering_id: Option<i64>,
    pub user_id: Option<i64>,
    pub gathering_type: Option<GatheringType>,
    pub location: Option<GatheringLocation>,
    pub date: Option<NaiveDate>,
    pub registration_end: Option<NaiveDate>,
    pub sort_by: Option<ReviewSortBy>,
    pub sort_order: Option<SortOrder>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewSortBy {
    CreatedAt,
    Score,
    ParticipantCount,
}

impl std::fmt::Display for ReviewSortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::CreatedAt => "createdAt",
            Self::Score => "score",
            Self::ParticipantCount => "participantCount",
        })
    }
}

/// Score distribution for one gathering type.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewScore {
    pub team_id: i64,
    pub gathering_id: i64,
    #[serde(rename = "type")]
    pub gathering_type: GatheringType,
    pub average_score: f64,
    pub one_star: u32,
    pub two_stars: u32,
    pub three_stars: u32,
    pub four_stars: u32,
    pub five_stars: u32,
}

/// Filters for `GET /reviews/scores`.
#[derive(Debug, Clone, Default)]
pub struct ReviewScoresQuery {
    /// Comma-joined on the wire when multiple ids are given.
    pub gathering_ids: Vec<i64>,
    pub gathering_type: Option<GatheringType>,
}
