use axum::{
    http::{HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use server::error_convert::AppErrorExt;
use shared_types::{
    AddMemberState, DraftField, MemberDraft, TeamRoster, TeamTab, ADD_MEMBER_FALLBACK,
    ADD_MEMBER_SUCCESS,
};

use crate::common::{self, Recorder};

fn filled_state() -> AddMemberState {
    let mut state = AddMemberState::default();
    let draft = &mut state.draft;
    draft.set(DraftField::FirstName, "Kiran");
    draft.set(DraftField::LastName, "Shah");
    draft.set(DraftField::Email, "kiran@example.com");
    draft.set(DraftField::Broker, "b-1");
    draft.toggle_segment("s-eq");
    draft.set(DraftField::Experience, "4");
    draft.set(DraftField::Specialization, "EQUITY_TRADER");
    draft.set(DraftField::City, "Pune");
    state
}

#[tokio::test]
async fn created_member_resets_form_and_is_prepended_once() {
    let recorder = Recorder::default();
    let seen = recorder.clone();
    let routes = Router::new().route(
        "/users/members",
        post(move |headers: HeaderMap, Json(body): Json<Value>| {
            let recorder = seen.clone();
            async move {
                recorder.record(&headers, Some(body));
                (
                    StatusCode::CREATED,
                    Json(json!({ "member": common::member_json("m-new", "Kiran", "b-1") })),
                )
            }
        }),
    );
    let client = common::mock_team_api(routes).await;

    let mut roster = TeamRoster::default();
    roster.apply_fetch::<()>(Ok(vec![]));
    roster.active_tab = TeamTab::Add;

    let mut state = filled_state();
    let request = state.begin_submit().unwrap();
    assert!(state.submitting);
    assert!(state.begin_submit().is_none());

    let result = client
        .create_member("tok-tl", &request)
        .await
        .map_err(|e| e.into_server_fn_error());
    if let Some(member) = state.finish(result) {
        roster.member_added(member);
    }

    assert!(!state.submitting);
    assert_eq!(state.success.as_deref(), Some(ADD_MEMBER_SUCCESS));
    assert_eq!(state.error, None);
    assert_eq!(state.draft, MemberDraft::default());

    assert_eq!(roster.count(), 1);
    assert_eq!(roster.members[0].id, "m-new");
    assert_eq!(roster.active_tab, TeamTab::List);

    assert_eq!(recorder.authorization(), vec![Some("Bearer tok-tl".to_string())]);
    assert_eq!(
        recorder.bodies(),
        vec![json!({
            "firstName": "Kiran",
            "lastName": "Shah",
            "email": "kiran@example.com",
            "broker": "b-1",
            "segments": ["s-eq"],
            "memberDetails": {
                "experience": 4.0,
                "specialization": "EQUITY_TRADER",
                "address": { "city": "Pune" }
            }
        })]
    );
}

#[tokio::test]
async fn api_message_is_shown_and_draft_kept() {
    let routes = Router::new().route(
        "/users/members",
        post(|| async {
            (
                StatusCode::CONFLICT,
                Json(json!({ "message": "Email already exists" })),
            )
        }),
    );
    let client = common::mock_team_api(routes).await;

    let mut state = filled_state();
    let request = state.begin_submit().unwrap();
    let result = client
        .create_member("tok", &request)
        .await
        .map_err(|e| e.into_server_fn_error());

    assert!(state.finish(result).is_none());
    assert!(!state.submitting);
    assert_eq!(state.error.as_deref(), Some("Email already exists"));
    assert_eq!(state.success, None);
    assert_eq!(state.draft.first_name, "Kiran");
}

#[tokio::test]
async fn error_without_server_message_uses_fallback() {
    let mut state = filled_state();
    state.begin_submit().unwrap();

    assert!(state
        .finish::<String>(Err("error reaching server".into()))
        .is_none());
    assert_eq!(state.error.as_deref(), Some(ADD_MEMBER_FALLBACK));
}

#[tokio::test]
async fn created_member_with_unpopulated_refs_is_still_added() {
    let routes = Router::new().route(
        "/users/members",
        post(|| async {
            (
                StatusCode::CREATED,
                Json(json!({ "member": {
                    "_id": "m-raw",
                    "firstName": "Kiran",
                    "lastName": "Shah",
                    "email": "kiran@example.com",
                    "broker": "b-1",
                    "segments": ["s-eq"]
                }})),
            )
        }),
    );
    let client = common::mock_team_api(routes).await;

    let mut roster = TeamRoster::default();
    roster.apply_fetch::<()>(Ok(vec![]));

    let mut state = filled_state();
    let request = state.begin_submit().unwrap();
    let result = client
        .create_member("tok-tl", &request)
        .await
        .map_err(|e| e.into_server_fn_error());
    if let Some(member) = state.finish(result) {
        roster.member_added(member);
    }

    assert_eq!(state.success.as_deref(), Some(ADD_MEMBER_SUCCESS));
    assert_eq!(roster.count(), 1);
    assert_eq!(roster.members[0].broker.id, "b-1");
    assert!(roster.members[0].in_segment("s-eq"));
}
