//! # Authentication State
//!
//! Owns the live session: the bearer token, the logged-in user, and the
//! request lifecycle flags views read while an auth call is in flight.

use shared::User;

/// Actions owned by the auth slice.
#[derive(Debug, Clone)]
pub enum AuthAction {
    /// A login, registration, or profile call started.
    RequestStarted,
    /// Login or registration succeeded; the session is live.
    SessionEstablished { token: String, user: User },
    /// The profile endpoint returned fresh user data.
    ProfileLoaded(User),
    /// An auth call failed with a normalized message.
    RequestFailed(String),
    /// The session ended.
    LoggedOut,
}

/// State of the current session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<User>,
    pub loading: bool,
    pub error: Option<String>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub(super) fn apply(&mut self, action: AuthAction) {
        match action {
            AuthAction::RequestStarted => {
                self.loading = true;
                self.error = None;
            }
            AuthAction::SessionEstablished { token, user } => {
                self.loading = false;
                self.error = None;
                self.token = Some(token);
                self.user = Some(user);
            }
            AuthAction::ProfileLoaded(user) => {
                self.loading = false;
                self.user = Some(user);
            }
            AuthAction::RequestFailed(message) => {
                self.loading = false;
                self.error = Some(message);
            }
            AuthAction::LoggedOut => {
                *self = Self::default();
            }
        }
    }
}
