use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use super::cookies::{self, CookieSlot};
use super::SessionToken;

/// Permissive session middleware.
///
/// On each request it lifts the API token out of the session cookie (or a
/// Bearer header) into a `SessionToken` extension and inserts a `CookieSlot`
/// so server functions can schedule cookie changes. After the handler runs,
/// any scheduled action is written to the response.
///
/// Does NOT reject requests without a token; server functions decide.
pub async fn session_middleware(mut req: Request, next: Next) -> Response {
    let session = &crate::config::load_config().session;

    if let Some(token) = cookies::extract_session_token(req.headers(), &session.cookie_name) {
        req.extensions_mut().insert(SessionToken(token));
    }

    let cookie_slot = CookieSlot::default();
    req.extensions_mut().insert(cookie_slot.clone());

    let mut response = next.run(req).await;

    if let Some(action) = cookie_slot.take() {
        cookies::apply_cookie_action(response.headers_mut(), session, action);
    }

    response
}
