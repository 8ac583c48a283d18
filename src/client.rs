//! The Dallaem API client.

use std::sync::Arc;
use std::time::Duration;

use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::auth::{Navigator, TokenStore, TokenStatus, token_status};
use crate::error::ApiError;
use crate::execution::{self, HttpBody, Request, RequestOptions};

/// Environment variable consulted when the builder is given no base URL.
pub const BASE_URL_ENV: &str = "DALLAEM_API_URL";

/// Client for the Gachi-Dallaem gathering service.
///
/// Cheap to clone; all clones share one connection pool, token store and
/// navigator. Each call is an independent asynchronous operation — the client
/// does not serialize or queue requests.
///
/// ```rust,ignore
/// let client = DallaemClient::builder()
///     .base_url("https://fe-adv-project-together-dallaem.vercel.app/11-5")
///     .token_store(Arc::new(MemoryTokenStore::new()))
///     .build()?;
/// let gatherings: Vec<Gathering> = client.get("/gatherings", RequestOptions::new()).await?;
/// ```
#[derive(Clone)]
pub struct DallaemClient {
    inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) token_store: Option<Arc<dyn TokenStore>>,
    pub(crate) navigator: Option<Arc<dyn Navigator>>,
}

impl DallaemClient {
    pub fn builder() -> DallaemClientBuilder {
        DallaemClientBuilder::default()
    }

    /// GET `path`, decoding the JSON response into `T`.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        self.request(reqwest::Method::GET, path, HttpBody::Empty, options)
            .await
    }

    /// POST a JSON payload to `path`.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        data: &B,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        let body = HttpBody::Json(serde_json::to_value(data)?);
        self.request(reqwest::Method::POST, path, body, options)
            .await
    }

    /// POST with no body (e.g. `/gatherings/{id}/join`).
    pub async fn post_empty<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        self.request(reqwest::Method::POST, path, HttpBody::Empty, options)
            .await
    }

    /// POST a multipart form (file uploads). No JSON content type is forced;
    /// the transport sets the boundary itself.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        self.request(reqwest::Method::POST, path, HttpBody::Multipart(form), options)
            .await
    }

    /// PUT a JSON payload to `path`.
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        data: &B,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        let body = HttpBody::Json(serde_json::to_value(data)?);
        self.request(reqwest::Method::PUT, path, body, options).await
    }

    /// PUT with no body (e.g. `/gatherings/{id}/cancel`).
    pub async fn put_empty<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        self.request(reqwest::Method::PUT, path, HttpBody::Empty, options)
            .await
    }

    /// PUT a multipart form (e.g. profile update with an image).
    pub async fn put_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        self.request(reqwest::Method::PUT, path, HttpBody::Multipart(form), options)
            .await
    }

    /// DELETE `path`. Endpoints with empty response bodies decode as `()`.
    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        self.request(reqwest::Method::DELETE, path, HttpBody::Empty, options)
            .await
    }

    /// Raw entry point behind the verb methods: execute one request and
    /// decode the JSON body into `T`.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: HttpBody,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        let value = execution::execute(
            &self.inner,
            Request {
                method,
                path: path.to_string(),
                body,
                options,
            },
        )
        .await?;
        serde_json::from_value(value)
            .map_err(|e| ApiError::transport(format!("Failed to decode response: {e}")))
    }

    /// True when a token is persisted and its `exp` claim has not passed.
    pub fn is_authenticated(&self) -> bool {
        self.token_store()
            .and_then(|store| store.token())
            .is_some_and(|t| token_status(t.expose_secret(), 0) != TokenStatus::Expired)
    }

    /// The token store this client was built with, if any.
    pub fn token_store(&self) -> Option<&Arc<dyn TokenStore>> {
        self.inner.token_store.as_ref()
    }
}

/// Builder for [`DallaemClient`].
#[derive(Default)]
pub struct DallaemClientBuilder {
    base_url: Option<String>,
    http: Option<reqwest::Client>,
    token_store: Option<Arc<dyn TokenStore>>,
    navigator: Option<Arc<dyn Navigator>>,
}

impl DallaemClientBuilder {
    /// API base URL, e.g. `https://…/11-5`. Falls back to the
    /// `DALLAEM_API_URL` environment variable when unset.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Supply a pre-configured `reqwest::Client` (proxies, TLS settings).
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Token persistence for `with_auth` calls and signin/signout.
    pub fn token_store(mut self, store: Arc<dyn TokenStore>) -> Self {
        self.token_store = Some(store);
        self
    }

    /// Navigation seam for the 401 redirect side effect.
    pub fn navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    pub fn build(self) -> Result<DallaemClient, ApiError> {
        let base_url = self
            .base_url
            .or_else(|| std::env::var(BASE_URL_ENV).ok())
            .ok_or_else(|| {
                ApiError::configuration(format!(
                    "no base URL: call base_url() or set {BASE_URL_ENV}"
                ))
            })?;

        Ok(DallaemClient {
            inner: Arc::new(ClientInner {
                http: self.http.unwrap_or_default(),
                base_url: base_url.trim_end_matches('/').to_string(),
                token_store: self.token_store,
                navigator: self.navigator,
            }),
        })
    }
}
