//! `/gatherings` endpoints: browse, create, join/leave, cancel.

use super::Query;
use crate::client::DallaemClient;
use crate::error::ApiError;
use crate::execution::RequestOptions;
use crate::types::{
    CreateGathering, Gathering, GatheringParticipant, GatheringsQuery, JoinedGathering,
    JoinedGatheringsQuery,
};

/// `GET /gatherings` with optional filter/sort/paging parameters.
pub async fn get_gatherings(
    client: &DallaemClient,
    params: &GatheringsQuery,
) -> Result<Vec<Gathering>, ApiError> {
    let mut q = Query::new();
    q.push_opt("type", params.gathering_type);
    q.push_opt("location", params.location);
    q.push_opt("date", params.date);
    q.push_opt("createdBy", params.created_by);
    q.push_opt("sortBy", params.sort_by);
    q.push_opt("sortOrder", params.sort_order);
    q.push_opt("limit", params.limit);
    q.push_opt("offset", params.offset);
    client.get(&q.append_to("/gatherings"), RequestOptions::new()).await
}

/// `GET /gatherings/{id}`.
pub async fn get_gathering(client: &DallaemClient, gathering_id: i64) -> Result<Gathering, ApiError> {
    client
        .get(&format!("/gatherings/{gathering_id}"), RequestOptions::new())
        .await
}

/// `POST /gatherings` — create a gathering. Multipart so the image file can
/// be uploaded in the same request.
pub async fn create_gathering(
    client: &DallaemClient,
    data: CreateGathering,
) -> Result<Gathering, ApiError> {
    let mut form = reqwest::multipart::Form::new()
        .text("name", data.name)
        .text("location", data.location.as_str())
        .text("type", data.gathering_type.as_str())
        .text("dateTime", data.date_time.to_rfc3339())
        .text("registrationEnd", data.registration_end.to_rfc3339())
        .text("capacity", data.capacity.to_string());
    if let Some(image) = data.image {
        let mime = mime_guess::from_path(&image.file_name).first_or_octet_stream();
        let part = reqwest::multipart::Part::bytes(image.bytes)
            .file_name(image.file_name)
            .mime_str(mime.as_ref())?;
        form = form.part("image", part);
    }
    client
        .post_multipart("/gatherings", form, RequestOptions::new().with_auth())
        .await
}

/// `POST /gatherings/{id}/join`.
pub async fn post_gathering_join(
    client: &DallaemClient,
    gathering_id: i64,
) -> Result<Gathering, ApiError> {
    client
        .post_empty(
            &format!("/gatherings/{gathering_id}/join"),
            RequestOptions::new().with_auth(),
        )
        .await
}

/// `DELETE /gatherings/{id}/leave`. The response body is empty.
pub async fn delete_gathering_leave(
    client: &DallaemClient,
    gathering_id: i64,
) -> Result<(), ApiError> {
    client
        .delete(
            &format!("/gatherings/{gathering_id}/leave"),
            RequestOptions::new().with_auth(),
        )
        .await
}

/// `PUT /gatherings/{id}/cancel` — owner-only cancellation.
pub async fn put_gathering_cancel(
    client: &DallaemClient,
    gathering_id: i64,
) -> Result<Gathering, ApiError> {
    client
        .put_empty(
            &format!("/gatherings/{gathering_id}/cancel"),
            RequestOptions::new().with_auth(),
        )
        .await
}

/// `GET /gatherings/{id}/participants`.
pub async fn get_gathering_participants(
    client: &DallaemClient,
    gathering_id: i64,
) -> Result<Vec<GatheringParticipant>, ApiError> {
    client
        .get(
            &format!("/gatherings/{gathering_id}/participants"),
            RequestOptions::new().with_auth(),
        )
        .await
}

/// `GET /gatherings/joined` — gatherings the signed-in user has joined.
pub async fn get_joined_gatherings(
    client: &DallaemClient,
    params: &JoinedGatheringsQuery,
) -> Result<Vec<JoinedGathering>, ApiError> {
    let mut q = Query::new();
    q.push_opt("completed", params.completed);
    q.push_opt("reviewed", params.reviewed);
    q.push_opt("limit", params.limit);
    q.push_opt("offset", params.offset);
    q.push_opt("sortBy", params.sort_by);
    q.push_opt("sortOrder", params.sort_order);
    client
        .get(
            &q.append_to("/gatherings/joined"),
            RequestOptions::new().with_auth(),
        )
        .await
}
