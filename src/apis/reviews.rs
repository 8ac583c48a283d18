//! `/reviews` endpoints: listing, creation, score aggregates.

use super::Query;
use crate::client::DallaemClient;
use crate::error::ApiError;
use crate::execution::RequestOptions;
use crate::types::{CreateReviewRequest, Review, ReviewScore, ReviewScoresQuery, ReviewsPage, ReviewsQuery};

/// `GET /reviews` with optional filter/sort/paging parameters.
pub async fn get_reviews(
    client: &DallaemClient,
    params: &ReviewsQuery,
) -> Result<ReviewsPage, ApiError> {
    let mut q = Query::new();
    q.push_opt("gatheringId", params.gathering_id);
    q.push_opt("userId", params.user_id);
    q.push_opt("type", params.gathering_type);
    q.push_opt("location", params.location);
    q.push_opt("date", params.date);
    q.push_opt("registrationEnd", params.registration_end);
    q.push_opt("sortBy", params.sort_by);
    q.push_opt("sortOrder", params.sort_order);
    q.push_opt("limit", params.limit);
    q.push_opt("offset", params.offset);
    client.get(&q.append_to("/reviews"), RequestOptions::new()).await
}

/// `POST /reviews` — leave a review for a joined gathering.
pub async fn post_review(
    client: &DallaemClient,
    data: &CreateReviewRequest,
) -> Result<Review, ApiError> {
    client
        .post("/reviews", data, RequestOptions::new().with_auth())
        .await
}

/// `GET /reviews/scores` — per-gathering score distributions.
pub async fn get_review_scores(
    client: &DallaemClient,
    params: &ReviewScoresQuery,
) -> Result<Vec<ReviewScore>, ApiError> {
    let mut q = Query::new();
    if !params.gathering_ids.is_empty() {
        let ids: Vec<String> = params.gathering_ids.iter().map(i64::to_string).collect();
        q.push("gatheringId", ids.join(","));
    }
    q.push_opt("type", params.gathering_type);
    client
        .get(&q.append_to("/reviews/scores"), RequestOptions::new())
        .await
}
