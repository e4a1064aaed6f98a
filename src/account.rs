//! Login and registration against the tutor backend.
//!
//! Failures are outcomes to show the learner, not errors to propagate.

use std::fmt;
use tracing::{info, warn};

use crate::backend::{AccountBackend, Credentials, RegisterForm, UserProfile};
use crate::error::BackendError;

const LOGIN_OK: &str = "Login successful!";
const LOGIN_FAILED: &str = "Login failed";
const REGISTER_OK: &str = "Registration successful! Please login.";
const REGISTER_FAILED: &str = "Registration failed";
const SERVER_ERROR: &str = "Server error";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountOutcome {
    LoggedIn(UserProfile),
    Registered,
    /// The backend (or local validation) refused the request.
    Rejected(String),
    /// No usable answer came back.
    Unreachable,
}

impl AccountOutcome {
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::LoggedIn(_) | Self::Registered)
    }

    /// The message shown to the learner.
    pub fn message(&self) -> &str {
        match self {
            Self::LoggedIn(_) => LOGIN_OK,
            Self::Registered => REGISTER_OK,
            Self::Rejected(message) => message,
            Self::Unreachable => SERVER_ERROR,
        }
    }
}

impl fmt::Display for AccountOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

pub async fn login(backend: &dyn AccountBackend, email: &str, password: &str) -> AccountOutcome {
    if email.trim().is_empty() || password.is_empty() {
        return AccountOutcome::Rejected("Email and password are required".to_string());
    }

    let credentials = Credentials {
        email: email.trim().to_string(),
        password: password.to_string(),
    };

    match backend.login(&credentials).await {
        Ok(user) => {
            info!(email = %credentials.email, "logged in");
            AccountOutcome::LoggedIn(user)
        }
        Err(error) => failure(&error, LOGIN_FAILED),
    }
}

pub async fn register(backend: &dyn AccountBackend, form: &RegisterForm) -> AccountOutcome {
    if form.email.trim().is_empty() || form.password.is_empty() {
        return AccountOutcome::Rejected("Email and password are required".to_string());
    }

    match backend.register(form).await {
        Ok(()) => AccountOutcome::Registered,
        Err(error) => failure(&error, REGISTER_FAILED),
    }
}

fn failure(error: &BackendError, fallback: &str) -> AccountOutcome {
    warn!(%error, "account request failed");
    match error {
        BackendError::Status { message, .. } => {
            AccountOutcome::Rejected(message.clone().unwrap_or_else(|| fallback.to_string()))
        }
        _ => AccountOutcome::Unreachable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::LearnerField;
    use async_trait::async_trait;
    use reqwest::StatusCode;
    use std::sync::atomic::{AtomicUsize, Ordering};

    enum Reply {
        Accept,
        Refuse(Option<&'static str>),
        Garbled,
    }

    struct FakeAccounts {
        reply: Reply,
        calls: AtomicUsize,
    }

    impl FakeAccounts {
        const fn new(reply: Reply) -> Self {
            Self {
                reply,
                calls: AtomicUsize::new(0),
            }
        }

        fn result<T>(&self, ok: T) -> Result<T, BackendError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.reply {
                Reply::Accept => Ok(ok),
                Reply::Refuse(message) => Err(BackendError::Status {
                    status: StatusCode::UNAUTHORIZED,
                    message: message.map(ToString::to_string),
                }),
                Reply::Garbled => Err(BackendError::Decode {
                    url: "test://accounts".to_string(),
                    reason: "expected value".to_string(),
                }),
            }
        }
    }

    #[async_trait]
    impl AccountBackend for FakeAccounts {
        async fn login(&self, credentials: &Credentials) -> Result<UserProfile, BackendError> {
            self.result(UserProfile {
                email: Some(credentials.email.clone()),
                ..UserProfile::default()
            })
        }

        async fn register(&self, _form: &RegisterForm) -> Result<(), BackendError> {
            self.result(())
        }
    }

    fn form() -> RegisterForm {
        RegisterForm {
            name: "Kavya".to_string(),
            email: "kavya@example.com".to_string(),
            password: "secret".to_string(),
            language: "Tamil".to_string(),
            field: LearnerField::TamilLearner,
        }
    }

    #[tokio::test]
    async fn test_login_success() {
        let backend = FakeAccounts::new(Reply::Accept);

        let outcome = login(&backend, " kavya@example.com ", "secret").await;

        assert!(outcome.is_success());
        assert_eq!(outcome.message(), "Login successful!");
        let AccountOutcome::LoggedIn(user) = outcome else {
            panic!("expected a profile");
        };
        assert_eq!(user.email.as_deref(), Some("kavya@example.com"));
    }

    #[tokio::test]
    async fn test_login_rejection_uses_server_message() {
        let backend = FakeAccounts::new(Reply::Refuse(Some("Invalid credentials")));
        let outcome = login(&backend, "a@b.c", "wrong").await;
        assert_eq!(
            outcome,
            AccountOutcome::Rejected("Invalid credentials".to_string())
        );

        let backend = FakeAccounts::new(Reply::Refuse(None));
        let outcome = login(&backend, "a@b.c", "wrong").await;
        assert_eq!(outcome.message(), "Login failed");
    }

    #[tokio::test]
    async fn test_undecodable_reply_is_server_error() {
        let backend = FakeAccounts::new(Reply::Garbled);
        let outcome = login(&backend, "a@b.c", "pw").await;
        assert_eq!(outcome, AccountOutcome::Unreachable);
        assert_eq!(outcome.to_string(), "Server error");
    }

    #[tokio::test]
    async fn test_empty_credentials_never_reach_backend() {
        let backend = FakeAccounts::new(Reply::Accept);

        assert!(!login(&backend, "  ", "pw").await.is_success());
        assert!(!login(&backend, "a@b.c", "").await.is_success());

        let mut blank = form();
        blank.password.clear();
        assert!(!register(&backend, &blank).await.is_success());

        assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_register_outcomes() {
        let backend = FakeAccounts::new(Reply::Accept);
        let outcome = register(&backend, &form()).await;
        assert_eq!(outcome, AccountOutcome::Registered);
        assert_eq!(outcome.message(), "Registration successful! Please login.");

        let backend = FakeAccounts::new(Reply::Refuse(Some("Email already exists")));
        assert_eq!(
            register(&backend, &form()).await.message(),
            "Email already exists"
        );

        let backend = FakeAccounts::new(Reply::Refuse(None));
        assert_eq!(
            register(&backend, &form()).await.message(),
            "Registration failed"
        );
    }
}
