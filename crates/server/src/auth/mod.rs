pub mod cookies;
pub mod middleware;

/// The caller's team API token, placed in request extensions by the session
/// middleware.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionToken(pub String);

/// The API token for the current server function call, if any.
///
/// Reads the middleware-provided extension first and falls back to parsing
/// the request headers directly.
pub fn current_token() -> Option<String> {
    let ctx = dioxus::fullstack::FullstackContext::current()?;
    let parts = ctx.parts_mut();

    if let Some(SessionToken(token)) = parts.extensions.get::<SessionToken>() {
        return Some(token.clone());
    }

    let cookie_name = &crate::config::load_config().session.cookie_name;
    cookies::extract_session_token(&parts.headers, cookie_name)
}
