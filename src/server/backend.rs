//! HTTP client for the backend API.
//!
//! Every page in this application is a thin view over the backend: reads and writes are
//! proxied through `BackendClient`, which joins request paths onto the configured base
//! URL, attaches the session's bearer token, and converts non-success responses into
//! `ApiError::Status` carrying the backend's own error message.

use reqwest::{RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use url::Url;

use crate::{
    model::api::{BackendErrorDto, JsonList},
    server::error::api::ApiError,
};

#[derive(Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: Url,
}

impl BackendClient {
    /// Creates a client for the backend rooted at `base_url`.
    ///
    /// `base_url` should end in `/` so that relative paths are appended rather than
    /// replacing the last segment; `Config` guarantees this.
    pub fn new(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// GET `path` and decode the JSON body.
    pub async fn get<T>(&self, path: &str, token: Option<&str>) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        let response = self.send(self.http.get(url), path, token).await?;
        decode(response, path).await
    }

    /// GET `path` and decode a JSON collection, plain or reference-preserved.
    pub async fn get_list<T>(&self, path: &str, token: Option<&str>) -> Result<Vec<T>, ApiError>
    where
        T: DeserializeOwned,
    {
        let list: JsonList<T> = self.get(path, token).await?;
        Ok(list.into_vec())
    }

    /// POST `body` as JSON to `path` and decode the JSON response.
    pub async fn post<B, T>(&self, path: &str, body: &B, token: Option<&str>) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        let response = self
            .send(self.http.post(url).json(body), path, token)
            .await?;
        decode(response, path).await
    }

    /// POST `body` as JSON to `path`, ignoring any response body.
    pub async fn post_empty<B>(&self, path: &str, body: &B, token: Option<&str>) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(path)?;
        self.send(self.http.post(url).json(body), path, token)
            .await?;
        Ok(())
    }

    /// PUT `body` as JSON to `path`, ignoring any response body.
    pub async fn put<B>(&self, path: &str, body: &B, token: Option<&str>) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(path)?;
        self.send(self.http.put(url).json(body), path, token)
            .await?;
        Ok(())
    }

    /// DELETE `path`, ignoring any response body.
    pub async fn delete(&self, path: &str, token: Option<&str>) -> Result<(), ApiError> {
        let url = self.endpoint(path)?;
        self.send(self.http.delete(url), path, token).await?;
        Ok(())
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|source| ApiError::InvalidUrl {
                path: path.to_string(),
                source,
            })
    }

    /// Sends the request and maps non-success statuses to `ApiError::Status`.
    async fn send(
        &self,
        request: RequestBuilder,
        path: &str,
        token: Option<&str>,
    ) -> Result<Response, ApiError> {
        let request = match token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await.map_err(|source| ApiError::Transport {
            endpoint: path.to_string(),
            source,
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = error_message(&body)
            .or_else(|| status.canonical_reason().map(str::to_string))
            .unwrap_or_else(|| "Unknown error".to_string());

        tracing::debug!(%status, endpoint = path, "Backend returned error: {}", message);

        Err(ApiError::Status {
            endpoint: path.to_string(),
            status,
            message,
        })
    }
}

async fn decode<T: DeserializeOwned>(response: Response, path: &str) -> Result<T, ApiError> {
    response.json::<T>().await.map_err(|source| ApiError::Decode {
        endpoint: path.to_string(),
        source,
    })
}

/// Extracts a readable message from an error response body.
///
/// Structured JSON error bodies win; otherwise non-empty plain text is used as-is.
fn error_message(body: &str) -> Option<String> {
    if let Ok(dto) = serde_json::from_str::<BackendErrorDto>(body) {
        if let Some(message) = dto.into_message() {
            return Some(message);
        }
    }

    let text = body.trim();
    if text.is_empty() || text.starts_with('{') {
        return None;
    }

    // Bare JSON strings such as "Trip is full" arrive quoted
    Some(text.trim_matches('"').to_string())
}
