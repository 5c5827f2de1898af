use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    middleware,
    routing::get,
    Extension, Router,
};
use pretty_assertions::assert_eq;
use server::auth::cookies::{CookieSlot, PendingCookieAction};
use server::auth::middleware::session_middleware;
use server::auth::SessionToken;

use crate::common;

/// Echoes the lifted token and schedules whatever `?action=` asks for.
async fn echo_token(
    Extension(slot): Extension<CookieSlot>,
    token: Option<Extension<SessionToken>>,
    req: Request<Body>,
) -> String {
    match req.uri().query() {
        Some("action=set") => slot.put(PendingCookieAction::Set {
            token: "fresh-token".into(),
        }),
        Some("action=clear") => slot.put(PendingCookieAction::Clear),
        _ => {}
    }
    token.map(|Extension(SessionToken(t))| t).unwrap_or_default()
}

fn app() -> Router {
    Router::new()
        .route("/echo", get(echo_token))
        .layer(middleware::from_fn(session_middleware))
}

#[tokio::test]
async fn token_is_lifted_from_cookie() {
    let req = Request::builder()
        .uri("/echo")
        .header(header::COOKIE, "theme=dark; teamdesk_session=tok-cookie")
        .body(Body::empty())
        .unwrap();

    let (status, headers, body) = common::send(&app(), req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "tok-cookie");
    assert!(headers.get(header::SET_COOKIE).is_none());
}

#[tokio::test]
async fn bearer_header_is_a_fallback() {
    let req = Request::builder()
        .uri("/echo")
        .header(header::AUTHORIZATION, "Bearer tok-header")
        .body(Body::empty())
        .unwrap();

    let (_, _, body) = common::send(&app(), req).await;
    assert_eq!(body, "tok-header");
}

#[tokio::test]
async fn scheduled_set_writes_http_only_cookie() {
    let req = Request::builder()
        .uri("/echo?action=set")
        .body(Body::empty())
        .unwrap();

    let (_, headers, body) = common::send(&app(), req).await;
    assert_eq!(body, "");
    let cookie = headers
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap();
    assert!(cookie.starts_with("teamdesk_session=fresh-token"));
    assert!(cookie.contains("HttpOnly"));
}

#[tokio::test]
async fn scheduled_clear_expires_cookie() {
    let req = Request::builder()
        .uri("/echo?action=clear")
        .header(header::COOKIE, "teamdesk_session=old")
        .body(Body::empty())
        .unwrap();

    let (_, headers, _) = common::send(&app(), req).await;
    let cookie = headers
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap();
    assert!(cookie.contains("Max-Age=0"));
}
