use axum::{
    http::{HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::AppErrorKind;

use crate::common::{self, Recorder};

#[tokio::test]
async fn brokers_and_segments_unwrap_envelopes() {
    let routes = Router::new()
        .route(
            "/brokers",
            get(|| async {
                Json(json!({ "brokers": [
                    common::broker_json("b-1", "Zerodha", "ZRD"),
                    common::broker_json("b-2", "Upstox", "UPS"),
                ]}))
            }),
        )
        .route(
            "/segments",
            get(|| async { Json(json!({ "segments": [common::segment_json("s-fo", "F&O", "FO")] })) }),
        );
    let client = common::mock_team_api(routes).await;

    let brokers = client.brokers(None).await.unwrap();
    let labels: Vec<String> = brokers.iter().map(|b| b.option_label()).collect();
    assert_eq!(labels, vec!["Zerodha (ZRD)", "Upstox (UPS)"]);

    let segments = client.segments(None).await.unwrap();
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].id, "s-fo");
}

#[tokio::test]
async fn missing_envelope_field_decodes_as_empty_list() {
    let routes = Router::new().route("/brokers", get(|| async { Json(json!({})) }));
    let client = common::mock_team_api(routes).await;

    assert!(client.brokers(None).await.unwrap().is_empty());
}

#[tokio::test]
async fn token_is_sent_as_bearer_only_when_present() {
    let recorder = Recorder::default();
    let seen = recorder.clone();
    let routes = Router::new().route(
        "/segments",
        get(move |headers: HeaderMap| {
            let recorder = seen.clone();
            async move {
                recorder.record(&headers, None);
                Json(json!({ "segments": [] }))
            }
        }),
    );
    let client = common::mock_team_api(routes).await;

    client.segments(Some("tok-42")).await.unwrap();
    client.segments(None).await.unwrap();

    assert_eq!(
        recorder.authorization(),
        vec![Some("Bearer tok-42".to_string()), None]
    );
}

#[tokio::test]
async fn error_body_message_is_surfaced() {
    let routes = Router::new().route(
        "/users/my-team",
        get(|| async {
            (
                StatusCode::FORBIDDEN,
                Json(json!({ "message": "Only team leads can view a team" })),
            )
        }),
    );
    let client = common::mock_team_api(routes).await;

    let err = client.my_team("tok").await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Forbidden);
    assert_eq!(err.message, "Only team leads can view a team");
}

#[tokio::test]
async fn non_json_error_uses_status_message() {
    let routes = Router::new().route(
        "/brokers",
        get(|| async { (StatusCode::BAD_GATEWAY, "upstream exploded") }),
    );
    let client = common::mock_team_api(routes).await;

    let err = client.brokers(None).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Upstream);
    assert_eq!(err.message, "Team service responded with status 502");
}

#[tokio::test]
async fn unreachable_api_maps_to_upstream_error() {
    let client = common::client_for(common::closed_base_url().await);

    let err = client.brokers(None).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Upstream);
    assert_eq!(err.message, "Unable to reach the team service");
}

#[tokio::test]
async fn malformed_success_body_is_a_decode_error() {
    let routes = Router::new().route("/users/my-team", get(|| async { "not json" }));
    let client = common::mock_team_api(routes).await;

    let err = client.my_team("tok").await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Upstream);
    assert_eq!(err.message, "Unexpected response from the team service");
}
