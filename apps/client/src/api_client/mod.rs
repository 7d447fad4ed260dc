//! Matcher API client — the single point of entry for all backend calls.
//!
//! The controller only sees the `MatcherApi` trait; `HttpMatcherApi` is the
//! reqwest implementation used by the binary. No retries: each action is
//! exactly one request.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::errors::ClientError;
use crate::models::matching::{
    CoverLetterResponse, HealthResponse, MatchResponse, SubmissionRequest,
};

pub mod endpoints;

/// Backend operations the form controller depends on.
#[async_trait]
pub trait MatcherApi: Send + Sync {
    async fn match_resume(&self, request: &SubmissionRequest) -> Result<MatchResponse, ClientError>;

    async fn generate_cover_letter(
        &self,
        request: &SubmissionRequest,
    ) -> Result<CoverLetterResponse, ClientError>;

    async fn health(&self) -> Result<HealthResponse, ClientError>;
}

/// reqwest-backed `MatcherApi`.
#[derive(Clone)]
pub struct HttpMatcherApi {
    client: Client,
    base_url: String,
}

impl HttpMatcherApi {
    /// `timeout = None` leaves requests unbounded.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, ClientError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        read_json(path, response).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let response = self.client.get(self.url(path)).send().await?;
        read_json(path, response).await
    }
}

/// Maps non-2xx to `ClientError::Api` and decodes the body otherwise.
async fn read_json<T: DeserializeOwned>(
    path: &str,
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(ClientError::from_status(status.as_u16(), body));
    }

    debug!("{} returned {} ({} bytes)", path, status, body.len());
    serde_json::from_str(&body).map_err(ClientError::Parse)
}

#[async_trait]
impl MatcherApi for HttpMatcherApi {
    async fn match_resume(&self, request: &SubmissionRequest) -> Result<MatchResponse, ClientError> {
        self.post_json(endpoints::MATCH, request).await
    }

    async fn generate_cover_letter(
        &self,
        request: &SubmissionRequest,
    ) -> Result<CoverLetterResponse, ClientError> {
        self.post_json(endpoints::COVER_LETTER, request).await
    }

    async fn health(&self) -> Result<HealthResponse, ClientError> {
        self.get_json(endpoints::HEALTH).await
    }
}
