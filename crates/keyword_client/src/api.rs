use std::time::Duration;

use keyword_logging::kw_debug;
use reqwest::multipart::Form;
use reqwest::{Response, Url};
use serde::de::DeserializeOwned;

use crate::{ApiError, FailureKind, SearchRequest, SearchResponse, SubscribeResponse};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSettings {
    pub base_url: String,
    pub search_path: String,
    pub subscribe_path: String,
    /// `None` leaves the transport's own behaviour in place.
    pub connect_timeout: Option<Duration>,
    pub request_timeout: Option<Duration>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            search_path: "/api/search".to_string(),
            subscribe_path: "/api/subscribe".to_string(),
            connect_timeout: None,
            request_timeout: None,
        }
    }
}

/// The two backend calls the client depends on. Each call is exactly one
/// request; nothing here retries.
#[async_trait::async_trait]
pub trait KeywordApi: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<String>, ApiError>;

    /// Returns the server's confirmation message.
    async fn subscribe(&self, email: &str, topic: &str) -> Result<String, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestApi {
    client: reqwest::Client,
    search_url: Url,
    subscribe_url: Url,
}

impl ReqwestApi {
    pub fn new(settings: &ApiSettings) -> Result<Self, ApiError> {
        let base = Url::parse(&settings.base_url)
            .map_err(|err| ApiError::new(FailureKind::InvalidUrl, err.to_string()))?;
        let search_url = join(&base, &settings.search_path)?;
        let subscribe_url = join(&base, &settings.subscribe_path)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| ApiError::new(FailureKind::Network, err.to_string()))?;

        Ok(Self {
            client,
            search_url,
            subscribe_url,
        })
    }

    pub fn search_url(&self) -> &Url {
        &self.search_url
    }

    pub fn subscribe_url(&self) -> &Url {
        &self.subscribe_url
    }
}

#[async_trait::async_trait]
impl KeywordApi for ReqwestApi {
    async fn search(&self, query: &str) -> Result<Vec<String>, ApiError> {
        kw_debug!("POST {} query_len={}", self.search_url, query.len());
        let response = self
            .client
            .post(self.search_url.clone())
            .json(&SearchRequest { query })
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let body: SearchResponse = decode_success(response).await?;
        Ok(body.keywords)
    }

    async fn subscribe(&self, email: &str, topic: &str) -> Result<String, ApiError> {
        kw_debug!("POST {} topic_len={}", self.subscribe_url, topic.len());
        let form = Form::new()
            .text("email", email.to_owned())
            .text("topic", topic.to_owned());
        let response = self
            .client
            .post(self.subscribe_url.clone())
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let body: SubscribeResponse = decode_success(response).await?;
        Ok(body.message)
    }
}

fn join(base: &Url, path: &str) -> Result<Url, ApiError> {
    base.join(path)
        .map_err(|err| ApiError::new(FailureKind::InvalidUrl, format!("{path}: {err}")))
}

/// Non-success statuses fail without reading the body.
async fn decode_success<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::new(
            FailureKind::HttpStatus(status.as_u16()),
            status.to_string(),
        ));
    }

    let bytes = response.bytes().await.map_err(map_reqwest_error)?;
    serde_json::from_slice(&bytes).map_err(|err| ApiError::new(FailureKind::Decode, err.to_string()))
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return ApiError::new(FailureKind::Decode, err.to_string());
    }
    ApiError::new(FailureKind::Network, err.to_string())
}
