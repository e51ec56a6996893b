//! Typed client for the recipe REST API.
//!
//! # Responsibilities
//! - One method per resource operation, each issuing exactly one request
//! - Share a single configured client (base path, default JSON header)
//!   across all JSON calls
//! - Keep the image upload on its own bare client with a multipart body
//!
//! # Design Decisions
//! - No retries, no timeouts beyond transport defaults, no error swallowing
//! - Recipe identifiers are opaque strings, spliced into the path verbatim
//! - The upload posts to the fixed absolute `/api/upload` path under the
//!   origin, not under the configured base, and keeps the JSON default
//!   header off multipart requests

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{multipart, Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::api::error::ApiError;
use crate::api::types::{ApiMessage, Recipe, RecipePayload, Tag, UploadedImage};
use crate::config::ClientConfig;

/// Client for the recipe backend. Read-only after construction; cheap to
/// share across concurrent calls.
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// Shared instance for JSON calls: default JSON content type, paths
    /// joined onto `base`.
    http: Client,
    /// Bare instance for the multipart upload; carries no default headers.
    upload_http: Client,
    base: String,
    origin: String,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let http = Client::builder().default_headers(headers).build()?;
        let upload_http = Client::new();

        let origin = config.origin.trim_end_matches('/').to_string();
        let base = format!("{}{}", origin, config.api_base.trim_end_matches('/'));

        Ok(Self {
            http,
            upload_http,
            base,
            origin,
        })
    }

    /// List all recipes.
    pub async fn list_recipes(&self) -> Result<Vec<Recipe>, ApiError> {
        self.get_json("/recipes").await
    }

    /// Fetch a single recipe by identifier.
    pub async fn get_recipe(&self, id: &str) -> Result<Recipe, ApiError> {
        self.get_json(&format!("/recipes/{id}")).await
    }

    /// Create a recipe from the given payload.
    pub async fn create_recipe(&self, payload: &RecipePayload) -> Result<Recipe, ApiError> {
        self.send_json(Method::POST, "/recipes", payload).await
    }

    /// Update an existing recipe. Fields absent from the payload are left
    /// unchanged by the server.
    pub async fn update_recipe(
        &self,
        id: &str,
        payload: &RecipePayload,
    ) -> Result<Recipe, ApiError> {
        self.send_json(Method::PUT, &format!("/recipes/{id}"), payload)
            .await
    }

    /// Delete a recipe by identifier.
    pub async fn delete_recipe(&self, id: &str) -> Result<ApiMessage, ApiError> {
        let url = format!("{}/recipes/{id}", self.base);
        debug!(%url, "DELETE recipe");
        let resp = self.http.delete(&url).send().await?;
        Self::read_body(resp).await
    }

    /// List all known tags.
    pub async fn list_tags(&self) -> Result<Vec<Tag>, ApiError> {
        self.get_json("/tags").await
    }

    /// Upload an image, sent as a multipart field named `file`.
    ///
    /// This is the one call that does not go through the shared instance:
    /// multipart bodies must not carry the default JSON content type.
    pub async fn upload_image(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadedImage, ApiError> {
        let part = multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = multipart::Form::new().part("file", part);

        let url = format!("{}/api/upload", self.origin);
        debug!(%url, file_name, "POST image upload");
        let resp = self.upload_http.post(&url).multipart(form).send().await?;
        Self::read_body(resp).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base, path);
        debug!(%url, "GET");
        let resp = self.http.get(&url).send().await?;
        Self::read_body(resp).await
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base, path);
        debug!(%method, %url, "sending JSON request");
        let resp = self.http.request(method, &url).json(body).send().await?;
        Self::read_body(resp).await
    }

    /// Map a response to the typed body: 2xx deserializes, anything else
    /// becomes [`ApiError::Status`] carrying the status and body text.
    async fn read_body<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            debug!(%status, "api call returned error status");
            return Err(ApiError::Status { status, body });
        }
        Ok(resp.json::<T>().await?)
    }
}
