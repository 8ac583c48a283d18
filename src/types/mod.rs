//! Wire-format models for the Dallaem API.
//!
//! Field names follow the server's camelCase JSON; timestamps are ISO-8601
//! and map to `chrono::DateTime<Utc>`, date-only filters stay `NaiveDate`.

mod auths;
mod gatherings;
mod reviews;
mod user;

pub use auths::{SigninRequest, SigninResponse, SignupRequest, SignupResponse};
pub use gatherings::{
    CreateGathering, Gathering, GatheringLocation, GatheringParticipant, GatheringSortBy,
    GatheringType, GatheringsQuery, JoinedGathering, JoinedGatheringsQuery, JoinedSortBy,
    ParticipantUser, SortOrder,
};
pub use reviews::{
    CreateReviewRequest, Review, ReviewGathering, ReviewScore, ReviewScoresQuery, ReviewSortBy,
    ReviewUser, ReviewsPage, ReviewsQuery,
};
pub use user::{ImageUpload, UpdateUser, UserInfo};
