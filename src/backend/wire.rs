//! JSON bodies exchanged with the tutor backend.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(crate) struct ChatRequest<'a> {
    pub message: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct TranslateRequest<'a> {
    pub text: &'a [&'a str],
    pub target_lang: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TranslateResponse {
    pub translated_text: Vec<String>,
}

/// Body of a non-success response.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoginResponse {
    pub user: UserProfile,
}

/// Email/password pair sent to `/api/login`.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// What the learner is studying for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum LearnerField {
    #[serde(rename = "student")]
    Student,
    #[serde(rename = "tamil learner")]
    TamilLearner,
    #[serde(rename = "other")]
    Other,
}

/// Body sent to `/api/register`.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Preferred language, free text.
    pub language: String,
    pub field: LearnerField,
}

/// The `user` object returned by a successful login.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub field: Option<String>,
}
