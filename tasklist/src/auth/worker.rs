//! Background worker connecting the TUI loop to the [`AuthService`].
//!
//! The TUI runs a synchronous poll loop, while authentication is async.
//! [`spawn_auth`] starts a tokio task that receives [`AuthCommand`]s and
//! answers each one with exactly one [`AuthEvent`]:
//!
//! ```text
//! TUI (main thread)  ←── AuthEvent ───  auth worker task
//!                     ─── AuthCommand →
//! ```
//!
//! The TUI drains events on every tick, so a form's loading flag is always
//! cleared by either a success or a failure event.

use std::sync::Arc;

use tokio::sync::mpsc;

use super::session::{SESSION_KEY, SessionStorage};
use super::{AuthService, LOGIN_FAILED_MESSAGE, SIGNUP_FAILED_MESSAGE};

/// Requests sent from the TUI to the auth worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthCommand {
    /// Sign in with email and password.
    Login {
        /// Email address.
        email: String,
        /// Password.
        password: String,
    },
    /// Register a new account.
    Signup {
        /// Display name.
        name: String,
        /// Email address.
        email: String,
        /// Password.
        password: String,
    },
    /// Stop the worker.
    Shutdown,
}

/// Results sent from the auth worker back to the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    /// Login succeeded and the session marker was written.
    LoggedIn {
        /// The signed-in email.
        email: String,
    },
    /// Signup succeeded and the session marker was written.
    SignedUp {
        /// The registered email.
        email: String,
    },
    /// Login failed; carries the user-facing message.
    LoginFailed(String),
    /// Signup failed; carries the user-facing message.
    SignupFailed(String),
}

/// Spawn the auth worker on the current tokio runtime.
///
/// Successful requests write the user's email under [`SESSION_KEY`] in
/// `session` before the success event is sent.
pub fn spawn_auth<A, S>(
    service: A,
    session: Arc<S>,
    capacity: usize,
) -> (mpsc::Sender<AuthCommand>, mpsc::Receiver<AuthEvent>)
where
    A: AuthService + 'static,
    S: SessionStorage + ?Sized + 'static,
{
    let (cmd_tx, cmd_rx) = mpsc::channel::<AuthCommand>(capacity);
    let (evt_tx, evt_rx) = mpsc::channel::<AuthEvent>(capacity);

    tokio::spawn(async move {
        command_handler(service, session, cmd_rx, evt_tx).await;
    });

    (cmd_tx, evt_rx)
}

/// Background task: run each command against the service in order.
async fn command_handler<A, S>(
    service: A,
    session: Arc<S>,
    mut cmd_rx: mpsc::Receiver<AuthCommand>,
    evt_tx: mpsc::Sender<AuthEvent>,
) where
    A: AuthService,
    S: SessionStorage + ?Sized,
{
    while let Some(cmd) = cmd_rx.recv().await {
        let event = match cmd {
            AuthCommand::Login { email, password } => {
                match service.login(&email, &password).await {
                    Ok(()) => {
                        tracing::info!(%email, "login succeeded");
                        session.set(SESSION_KEY, email.clone());
                        AuthEvent::LoggedIn { email }
                    }
                    Err(e) => {
                        tracing::warn!(%email, error = %e, "login failed");
                        AuthEvent::LoginFailed(LOGIN_FAILED_MESSAGE.to_string())
                    }
                }
            }
            AuthCommand::Signup {
                name,
                email,
                password,
            } => match service.signup(&name, &email, &password).await {
                Ok(()) => {
                    tracing::info!(%email, "signup succeeded");
                    session.set(SESSION_KEY, email.clone());
                    AuthEvent::SignedUp { email }
                }
                Err(e) => {
                    tracing::warn!(%email, error = %e, "signup failed");
                    AuthEvent::SignupFailed(SIGNUP_FAILED_MESSAGE.to_string())
                }
            },
            AuthCommand::Shutdown => {
                tracing::info!("auth worker shutting down");
                break;
            }
        };

        if evt_tx.send(event).await.is_err() {
            // TUI dropped; exit.
            break;
        }
    }
}
