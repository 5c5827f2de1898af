use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use shared_types::{Session, User};

/// Client session store shared through context.
///
/// `loading` starts `true` and flips to `false` exactly once, when the
/// initial identity check completes. Later sign-ins and sign-outs only
/// touch `user`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionState {
    pub user: Signal<Option<User>>,
    pub loading: Signal<bool>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            user: Signal::new(None),
            loading: Signal::new(true),
        }
    }

    pub fn snapshot(&self) -> Session {
        Session {
            user: self.user.read().clone(),
            loading: *self.loading.read(),
        }
    }

    /// Ask the server who is signed in. Any failure resolves to "no user".
    pub async fn resolve(mut self) {
        if !*self.loading.peek() {
            return;
        }
        let user = match server::api::get_current_user().await {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!(error = %e, "identity check failed, treating as signed out");
                None
            }
        };
        let mut session = Session {
            user: self.user.peek().clone(),
            loading: *self.loading.peek(),
        };
        // A sign-in may have landed while the check was in flight.
        if session.settle(user) {
            self.user.set(session.user);
            self.loading.set(false);
        }
    }

    pub fn sign_in(&mut self, user: User) {
        self.user.set(Some(user));
        self.loading.set(false);
    }

    pub fn mark_password_changed(&mut self) {
        if let Some(user) = self.user.write().as_mut() {
            user.is_password_changed = true;
        }
    }

    /// Drop the user locally and clear the server cookie in the background.
    pub fn logout(mut self) {
        self.user.set(None);
        spawn_forever(async move {
            if let Err(e) = server::api::logout().await {
                tracing::warn!(error = %e, "failed to clear session cookie");
            }
        });
    }
}

pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}
