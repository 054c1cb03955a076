//! Authentication collaborator for `Tasklist`.
//!
//! Defines the [`AuthService`] trait that login and signup go through, a
//! [`StubAuth`] implementation with simulated latency, the session storage
//! that records a signed-in user, form validation, and the background
//! worker that bridges the synchronous TUI loop to the async service.

pub mod session;
pub mod validation;
pub mod worker;

use std::time::Duration;

pub use session::{InMemorySession, SESSION_KEY, SessionStorage};
pub use validation::{FieldErrors, FormField};
pub use worker::{AuthCommand, AuthEvent, spawn_auth};

/// Message shown when login fails for any reason.
pub const LOGIN_FAILED_MESSAGE: &str = "Invalid email or password";

/// Message shown when signup fails for any reason.
pub const SIGNUP_FAILED_MESSAGE: &str = "Failed to create account. Please try again.";

/// Errors an authentication backend can report.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AuthError {
    /// The backend refused the credentials.
    #[error("credentials rejected")]
    Rejected,

    /// The backend could not be reached.
    #[error("auth service unavailable: {0}")]
    Unavailable(String),
}

/// Async authentication backend.
///
/// Each call is a one-shot request: it either resolves `Ok(())` or fails
/// with an [`AuthError`]. There is no retry or cancellation contract.
pub trait AuthService: Send + Sync {
    /// Sign in an existing user.
    fn login(
        &self,
        email: &str,
        password: &str,
    ) -> impl std::future::Future<Output = Result<(), AuthError>> + Send;

    /// Register a new user.
    fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> impl std::future::Future<Output = Result<(), AuthError>> + Send;
}

/// Stand-in backend that accepts every request after a delay.
#[derive(Debug, Clone)]
pub struct StubAuth {
    latency: Duration,
    reject_all: bool,
}

impl StubAuth {
    /// Creates a stub that succeeds after `latency`.
    #[must_use]
    pub const fn new(latency: Duration) -> Self {
        Self {
            latency,
            reject_all: false,
        }
    }

    /// Makes every request fail with [`AuthError::Rejected`].
    #[must_use]
    pub const fn rejecting(mut self, reject_all: bool) -> Self {
        self.reject_all = reject_all;
        self
    }

    async fn respond(&self) -> Result<(), AuthError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        if self.reject_all {
            Err(AuthError::Rejected)
        } else {
            Ok(())
        }
    }
}

impl Default for StubAuth {
    fn default() -> Self {
        Self::new(Duration::from_millis(500))
    }
}

impl AuthService for StubAuth {
    async fn login(&self, email: &str, _password: &str) -> Result<(), AuthError> {
        tracing::debug!(%email, "stub login");
        self.respond().await
    }

    async fn signup(&self, name: &str, email: &str, _password: &str) -> Result<(), AuthError> {
        tracing::debug!(%name, %email, "stub signup");
        self.respond().await
    }
}
