use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::wire::{
    ChatRequest, ChatResponse, ErrorBody, LoginResponse, TranslateRequest, TranslateResponse,
};
use super::{AccountBackend, ChatBackend, Credentials, RegisterForm, TranslateBackend, UserProfile};
use crate::error::BackendError;

/// Endpoint used when no backend is configured.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000";

/// Per-request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP implementation of all backend traits.
///
/// Every request is bounded by `timeout` and aborted when the cancellation
/// token fires.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
    timeout: Duration,
    cancel: CancellationToken,
}

impl HttpBackend {
    pub fn new(endpoint: impl Into<String>, api_key: Option<String>, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            api_key,
            timeout,
            cancel: CancellationToken::new(),
        }
    }

    /// Replaces the token that aborts in-flight requests.
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    pub const fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }

    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.endpoint.trim_end_matches('/'))
    }

    /// Posts `body` and returns the status with the raw response body.
    async fn exchange<B: Serialize + Sync + ?Sized>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<(StatusCode, Vec<u8>), BackendError> {
        let started = Instant::now();

        let round_trip = async {
            let mut request = self.client.post(url).json(body);
            if let Some(api_key) = &self.api_key {
                request = request.bearer_auth(api_key);
            }

            let response = request
                .send()
                .await
                .map_err(|source| BackendError::Transport {
                    url: url.to_string(),
                    source,
                })?;
            let status = response.status();
            let bytes = response
                .bytes()
                .await
                .map_err(|source| BackendError::Transport {
                    url: url.to_string(),
                    source,
                })?;
            Ok((status, bytes.to_vec()))
        };

        let result = tokio::select! {
            biased;
            () = self.cancel.cancelled() => Err(BackendError::Cancelled { url: url.to_string() }),
            outcome = tokio::time::timeout(self.timeout, round_trip) => outcome.unwrap_or_else(|_| {
                Err(BackendError::Timeout { url: url.to_string(), timeout: self.timeout })
            }),
        };

        debug!(
            url,
            elapsed_ms = started.elapsed().as_millis() as u64,
            ok = result.is_ok(),
            "backend request finished"
        );
        result
    }

    /// Posts `body` and returns the body of a success response.
    async fn post<B: Serialize + Sync + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(String, Vec<u8>), BackendError> {
        let url = self.url(path);
        let (status, bytes) = self.exchange(&url, body).await?;

        if !status.is_success() {
            return Err(match serde_json::from_slice::<ErrorBody>(&bytes) {
                Ok(body) => BackendError::Status {
                    status,
                    message: body.error,
                },
                Err(e) => BackendError::Decode {
                    url,
                    reason: format!("{status} with unreadable body: {e}"),
                },
            });
        }

        Ok((url, bytes))
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, BackendError>
    where
        B: Serialize + Sync + ?Sized,
        R: DeserializeOwned,
    {
        let (url, bytes) = self.post(path, body).await?;
        serde_json::from_slice(&bytes).map_err(|e| BackendError::Decode {
            url,
            reason: e.to_string(),
        })
    }
}

#[async_trait]
impl TranslateBackend for HttpBackend {
    async fn translate(
        &self,
        texts: &[&str],
        target_lang: &str,
    ) -> Result<Vec<String>, BackendError> {
        let body = TranslateRequest {
            text: texts,
            target_lang,
        };
        let response: TranslateResponse = self.post_json("/translate", &body).await?;
        Ok(response.translated_text)
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ChatBackend for HttpBackend {
    async fn chat(&self, message: &str) -> Result<String, BackendError> {
        let response: ChatResponse = self.post_json("/chat", &ChatRequest { message }).await?;
        Ok(response.response)
    }
}

#[async_trait]
impl AccountBackend for HttpBackend {
    async fn login(&self, credentials: &Credentials) -> Result<UserProfile, BackendError> {
        let response: LoginResponse = self.post_json("/api/login", credentials).await?;
        Ok(response.user)
    }

    async fn register(&self, form: &RegisterForm) -> Result<(), BackendError> {
        self.post("/api/register", form).await?;
        Ok(())
    }
}
