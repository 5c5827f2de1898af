use axum::http::{header, HeaderMap, HeaderValue};
use cookie::Cookie;
use shared_types::SessionConfig;
use std::sync::{Arc, Mutex};

/// Build a Set-Cookie header value carrying the team API token.
/// Returns `None` if the token cannot be represented in a header.
pub fn build_session_cookie(config: &SessionConfig, token: &str) -> Option<HeaderValue> {
    let cookie = Cookie::build((config.cookie_name.as_str(), token))
        .http_only(true)
        .same_site(cookie::SameSite::Lax)
        .path("/")
        .max_age(cookie::time::Duration::hours(config.max_age_hours))
        .secure(config.secure)
        .build();

    HeaderValue::from_str(&cookie.encoded().to_string()).ok()
}

/// Build a Set-Cookie header that expires the session cookie.
pub fn build_clear_cookie(config: &SessionConfig) -> Option<HeaderValue> {
    let cookie = Cookie::build((config.cookie_name.as_str(), ""))
        .http_only(true)
        .same_site(cookie::SameSite::Lax)
        .path("/")
        .max_age(cookie::time::Duration::ZERO)
        .secure(config.secure)
        .build();

    HeaderValue::from_str(&cookie.to_string()).ok()
}

/// Extract the API token from the session cookie (preferred) or a Bearer
/// header (fallback for non-browser clients).
pub fn extract_session_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    if let Some(token) = extract_cookie(headers, cookie_name) {
        return Some(token);
    }

    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}

fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    for header_value in headers.get_all(header::COOKIE) {
        let Ok(cookie_str) = header_value.to_str() else {
            continue;
        };
        for parsed in Cookie::split_parse_encoded(cookie_str.to_string()).flatten() {
            if parsed.name() == name && !parsed.value().is_empty() {
                return Some(parsed.value().to_string());
            }
        }
    }
    None
}

/// Pending cookie action to be picked up by the session middleware.
#[derive(Clone, Debug, PartialEq)]
pub enum PendingCookieAction {
    Set { token: String },
    Clear,
}

/// Shared slot through which server functions hand cookie changes to the
/// middleware. Inserted into request extensions for every request.
#[derive(Clone, Debug, Default)]
pub struct CookieSlot(pub Arc<Mutex<Option<PendingCookieAction>>>);

impl CookieSlot {
    pub fn put(&self, action: PendingCookieAction) {
        if let Ok(mut slot) = self.0.lock() {
            *slot = Some(action);
        }
    }

    pub fn take(&self) -> Option<PendingCookieAction> {
        self.0.lock().ok().and_then(|mut slot| slot.take())
    }
}

fn schedule(action: PendingCookieAction) {
    if let Some(ctx) = dioxus::fullstack::FullstackContext::current() {
        let parts = ctx.parts_mut();
        match parts.extensions.get::<CookieSlot>() {
            Some(slot) => slot.put(action),
            None => tracing::warn!("no CookieSlot on request, session middleware not installed"),
        }
    }
}

/// Schedule the session cookie to be set by the middleware.
pub fn schedule_session_cookie(token: &str) {
    schedule(PendingCookieAction::Set {
        token: token.to_string(),
    });
}

/// Schedule the session cookie to be cleared by the middleware.
pub fn schedule_clear_cookie() {
    schedule(PendingCookieAction::Clear);
}

/// Write the Set-Cookie header for `action` onto a response.
pub fn apply_cookie_action(headers: &mut HeaderMap, config: &SessionConfig, action: PendingCookieAction) {
    let value = match action {
        PendingCookieAction::Set { token } => build_session_cookie(config, &token),
        PendingCookieAction::Clear => build_clear_cookie(config),
    };
    match value {
        Some(v) => {
            headers.append(header::SET_COOKIE, v);
        }
        None => tracing::warn!("session cookie value is not a valid header, skipping"),
    }
}
