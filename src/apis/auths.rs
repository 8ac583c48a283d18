//! `/auths` endpoints: signup, signin/signout, profile.

use secrecy::SecretString;

use crate::client::DallaemClient;
use crate::error::ApiError;
use crate::execution::RequestOptions;
use crate::types::{SigninRequest, SigninResponse, SignupRequest, SignupResponse, UpdateUser, UserInfo};

/// `POST /auths/signin`. On success the access token is persisted into the
/// client's token store, making subsequent `with_auth` calls work.
pub async fn post_signin(client: &DallaemClient, data: &SigninRequest) -> Result<(), ApiError> {
    let res: SigninResponse = client
        .post("/auths/signin", data, RequestOptions::new())
        .await?;
    if let Some(store) = client.token_store() {
        store.set_token(SecretString::from(res.token));
    }
    Ok(())
}

/// `POST /auths/signup`.
pub async fn post_signup(
    client: &DallaemClient,
    data: &SignupRequest,
) -> Result<SignupResponse, ApiError> {
    client.post("/auths/signup", data, RequestOptions::new()).await
}

/// `POST /auths/signout`. Clears the persisted token afterwards regardless of
/// what the server returned in the body.
pub async fn post_signout(client: &DallaemClient) -> Result<(), ApiError> {
    let _: serde_json::Value = client
        .post_empty("/auths/signout", RequestOptions::new())
        .await?;
    if let Some(store) = client.token_store() {
        store.remove_token();
    }
    Ok(())
}

/// `GET /auths/user` — the signed-in user's profile.
pub async fn get_user(client: &DallaemClient) -> Result<UserInfo, ApiError> {
    client
        .get("/auths/user", RequestOptions::new().with_auth())
        .await
}

/// `PUT /auths/user` — edit company name and/or profile image. Sent as
/// multipart form data so the image bytes can ride along.
pub async fn update_user(client: &DallaemClient, update: UpdateUser) -> Result<UserInfo, ApiError> {
    let mut form = reqwest::multipart::Form::new();
    if let Some(company_name) = update.company_name {
        form = form.text("companyName", company_name);
    }
    if let Some(image) = update.image {
        let mime = mime_guess::from_path(&image.file_name).first_or_octet_stream();
        let part = reqwest::multipart::Part::bytes(image.bytes)
            .file_name(image.file_name)
            .mime_str(mime.as_ref())?;
        form = form.part("image", part);
    }
    client
        .put_multipart("/auths/user", form, RequestOptions::new().with_auth())
        .await
}
