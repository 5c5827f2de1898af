//! Session snapshot and the protected-route guard state machine.

use crate::user::User;
use serde::{Deserialize, Serialize};

pub const LOGIN_PATH: &str = "/auth/login";
pub const CHANGE_PASSWORD_PATH: &str = "/auth/change-password";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Point-in-time view of the client session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for Session {
    /// A fresh session is unresolved.
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl Session {
    pub fn resolved(user: Option<User>) -> Self {
        Self {
            user,
            loading: false,
        }
    }

    /// Apply the initial identity check. Returns `false` and leaves the
    /// session alone when a sign-in already settled it.
    pub fn settle(&mut self, user: Option<User>) -> bool {
        if !self.loading {
            return false;
        }
        self.user = user;
        self.loading = false;
        true
    }
}

/// Outcome of evaluating the guard for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    /// Identity check still in flight.
    Resolving,
    Unauthenticated,
    MustChangePassword,
    Authorized,
}

impl GuardState {
    /// Evaluate the guard from the session and the live route path.
    pub fn evaluate(session: &Session, current_path: &str) -> Self {
        if session.loading {
            return GuardState::Resolving;
        }
        match &session.user {
            None => GuardState::Unauthenticated,
            Some(user)
                if !user.is_password_changed
                    && normalize_path(current_path) != CHANGE_PASSWORD_PATH =>
            {
                GuardState::MustChangePassword
            }
            Some(_) => GuardState::Authorized,
        }
    }

    /// Where to navigate on entering this state, if anywhere.
    pub fn redirect_path(&self) -> Option<&'static str> {
        match self {
            GuardState::Unauthenticated => Some(LOGIN_PATH),
            GuardState::MustChangePassword => Some(CHANGE_PASSWORD_PATH),
            GuardState::Resolving | GuardState::Authorized => None,
        }
    }

    pub fn renders_children(&self) -> bool {
        matches!(self, GuardState::Authorized)
    }
}

/// Strip the query string, fragment and trailing slashes. The root stays `/`.
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}
