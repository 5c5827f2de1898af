use dioxus::prelude::*;
use shared_types::{Broker, CreateMemberRequest, Member, Segment, User};

#[cfg(feature = "server")]
use crate::error_convert::AppErrorExt;

#[cfg(feature = "server")]
use crate::upstream::{upstream, UpstreamClient};

// ── Helpers for server functions ───────────────────────

/// The caller's API token, or an "Authentication required" error.
#[cfg(feature = "server")]
fn require_token() -> Result<String, ServerFnError> {
    use shared_types::AppError;

    crate::auth::current_token()
        .ok_or_else(|| AppError::unauthorized("Authentication required").into_server_fn_error())
}

#[cfg(feature = "server")]
fn client() -> Result<&'static UpstreamClient, ServerFnError> {
    upstream().map_err(|e| e.into_server_fn_error())
}

// ── Session ────────────────────────────────────────────

/// Resolve the signed-in user from the session cookie.
///
/// Returns `None` when there is no token or the team API rejects it; in the
/// latter case the stale cookie is cleared.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_current_user() -> Result<Option<User>, ServerFnError> {
    use crate::auth::cookies;

    let Some(token) = crate::auth::current_token() else {
        return Ok(None);
    };

    match client()?.current_user(&token).await {
        Ok(user) => Ok(Some(user)),
        Err(e) if e.is_unauthorized() => {
            tracing::info!("session token rejected by team API, clearing cookie");
            cookies::schedule_clear_cookie();
            Ok(None)
        }
        Err(e) => Err(e.into_server_fn_error()),
    }
}

/// Sign in against the team API. Stores the returned token in an HTTP-only cookie.
#[cfg_attr(feature = "server", tracing::instrument(skip(password)))]
#[server]
pub async fn login(email: String, password: String) -> Result<User, ServerFnError> {
    use crate::auth::cookies;
    use shared_types::LoginRequest;

    let request = LoginRequest {
        email: email.trim().to_string(),
        password,
    };
    let response = client()?
        .login(&request)
        .await
        .map_err(|e| e.into_server_fn_error())?;

    cookies::schedule_session_cookie(&response.token);
    Ok(response.user)
}

/// Clear the session cookie. The team API holds no server-side session.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn logout() -> Result<(), ServerFnError> {
    crate::auth::cookies::schedule_clear_cookie();
    Ok(())
}

/// Change the caller's password. Returns the API's confirmation message.
#[cfg_attr(feature = "server", tracing::instrument(skip(current_password, new_password)))]
#[server]
pub async fn change_password(
    current_password: String,
    new_password: String,
) -> Result<String, ServerFnError> {
    use shared_types::ChangePasswordRequest;

    let token = require_token()?;
    let request = ChangePasswordRequest {
        current_password,
        new_password,
    };
    let response = client()?
        .change_password(&token, &request)
        .await
        .map_err(|e| e.into_server_fn_error())?;
    Ok(response.message)
}

// ── Reference data ─────────────────────────────────────

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_brokers() -> Result<Vec<Broker>, ServerFnError> {
    let token = crate::auth::current_token();
    client()?
        .brokers(token.as_deref())
        .await
        .map_err(|e| e.into_server_fn_error())
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_segments() -> Result<Vec<Segment>, ServerFnError> {
    let token = crate::auth::current_token();
    client()?
        .segments(token.as_deref())
        .await
        .map_err(|e| e.into_server_fn_error())
}

// ── Team ───────────────────────────────────────────────

/// Members of the caller's team.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_my_team() -> Result<Vec<Member>, ServerFnError> {
    let token = require_token()?;
    client()?
        .my_team(&token)
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// Create a member in the caller's team and return it as stored.
#[cfg_attr(feature = "server", tracing::instrument(skip(request), fields(email = %request.email)))]
#[server]
pub async fn create_member(request: CreateMemberRequest) -> Result<Member, ServerFnError> {
    let token = require_token()?;
    let member = client()?
        .create_member(&token, &request)
        .await
        .map_err(|e| e.into_server_fn_error())?;
    tracing::info!(member_id = %member.id, "member created");
    Ok(member)
}
