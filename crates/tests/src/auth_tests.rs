use axum::{
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use shared_types::{
    ChangePasswordRequest, GuardState, LoginRequest, Role, Session, CHANGE_PASSWORD_PATH,
    DASHBOARD_PATH,
};

use crate::common::{self, Recorder};

#[tokio::test]
async fn login_returns_token_and_user() {
    let recorder = Recorder::default();
    let seen = recorder.clone();
    let routes = Router::new().route(
        "/auth/login",
        post(move |headers: HeaderMap, Json(body): Json<Value>| {
            let recorder = seen.clone();
            async move {
                recorder.record(&headers, Some(body));
                Json(json!({ "token": "jwt-abc", "user": common::user_json(false) }))
            }
        }),
    );
    let client = common::mock_team_api(routes).await;

    let response = client
        .login(&LoginRequest {
            email: "asha@example.com".into(),
            password: "first-login".into(),
        })
        .await
        .unwrap();

    assert_eq!(response.token, "jwt-abc");
    assert_eq!(response.user.role, Role::Tl);
    assert!(!response.user.is_password_changed);
    assert_eq!(recorder.authorization(), vec![None]);
    assert_eq!(
        recorder.bodies(),
        vec![json!({ "email": "asha@example.com", "password": "first-login" })]
    );
}

#[tokio::test]
async fn rejected_credentials_surface_api_message() {
    let routes = Router::new().route(
        "/auth/login",
        post(|| async {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "message": "Invalid credentials" })),
            )
        }),
    );
    let client = common::mock_team_api(routes).await;

    let err = client
        .login(&LoginRequest {
            email: "asha@example.com".into(),
            password: "wrong".into(),
        })
        .await
        .unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.message, "Invalid credentials");
}

#[tokio::test]
async fn expired_token_on_me_is_unauthorized() {
    let routes = Router::new().route(
        "/auth/me",
        get(|| async {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "message": "Token expired" })),
            )
        }),
    );
    let client = common::mock_team_api(routes).await;

    let err = client.current_user("stale").await.unwrap_err();
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn first_login_user_is_routed_to_change_password() {
    let routes = Router::new().route(
        "/auth/me",
        get(|| async { Json(json!({ "user": common::user_json(false) })) }),
    );
    let client = common::mock_team_api(routes).await;

    let user = client.current_user("tok").await.unwrap();
    let session = Session::resolved(Some(user));

    let state = GuardState::evaluate(&session, DASHBOARD_PATH);
    assert_eq!(state, GuardState::MustChangePassword);
    assert_eq!(state.redirect_path(), Some(CHANGE_PASSWORD_PATH));
    assert_eq!(
        GuardState::evaluate(&session, CHANGE_PASSWORD_PATH),
        GuardState::Authorized
    );
}

#[tokio::test]
async fn change_password_sends_camel_case_body_with_bearer() {
    let recorder = Recorder::default();
    let seen = recorder.clone();
    let routes = Router::new().route(
        "/auth/change-password",
        post(move |headers: HeaderMap, Json(body): Json<Value>| {
            let recorder = seen.clone();
            async move {
                recorder.record(&headers, Some(body));
                Json(json!({ "message": "Password changed successfully" }))
            }
        }),
    );
    let client = common::mock_team_api(routes).await;

    let response = client
        .change_password(
            "tok-7",
            &ChangePasswordRequest {
                current_password: "old".into(),
                new_password: "n3w-secret".into(),
            },
        )
        .await
        .unwrap();

    assert_eq!(response.message, "Password changed successfully");
    assert_eq!(recorder.authorization(), vec![Some("Bearer tok-7".to_string())]);
    assert_eq!(
        recorder.bodies(),
        vec![json!({ "currentPassword": "old", "newPassword": "n3w-secret" })]
    );
}
