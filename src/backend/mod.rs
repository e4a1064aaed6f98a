//! Client for the tutor backend's HTTP API.
//!
//! The session components depend on the traits below rather than on the
//! HTTP client, so they can run against in-process fakes.

mod client;
mod wire;

use async_trait::async_trait;

use crate::error::BackendError;

pub use client::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, HttpBackend};
pub use wire::{Credentials, LearnerField, RegisterForm, UserProfile};

/// Batch text translation (`POST /translate`).
#[async_trait]
pub trait TranslateBackend: Send + Sync {
    /// Translates every string in `texts` into `target_lang`.
    ///
    /// Implementations return the backend's list as-is; callers check
    /// that it has one entry per input.
    async fn translate(&self, texts: &[&str], target_lang: &str)
    -> Result<Vec<String>, BackendError>;

    /// Identifies the backend instance, used to scope cached translations.
    fn endpoint(&self) -> &str;
}

/// Conversational replies (`POST /chat`).
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn chat(&self, message: &str) -> Result<String, BackendError>;
}

/// Account endpoints (`POST /api/login`, `POST /api/register`).
#[async_trait]
pub trait AccountBackend: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> Result<UserProfile, BackendError>;

    async fn register(&self, form: &RegisterForm) -> Result<(), BackendError>;
}
