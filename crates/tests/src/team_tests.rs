use axum::{routing::get, Json, Router};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{active_chips, FilterField, Specialization, TeamRoster};

use crate::common;

fn team_routes() -> Router {
    Router::new()
        .route(
            "/users/my-team",
            get(|| async {
                Json(json!({ "members": [
                    common::member_json("m-1", "Kiran", "b-1"),
                    common::member_json("m-2", "Dev", "b-2"),
                    {
                        "_id": "m-3",
                        "firstName": "Nisha",
                        "lastName": "Pillai",
                        "email": "nisha@example.com",
                        "broker": common::broker_json("b-1", "Zerodha", "ZRD"),
                        "segments": []
                    }
                ]}))
            }),
        )
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
            get(|| async { Json(json!({ "segments": [common::segment_json("s-eq", "Equity", "EQ")] })) }),
        )
}

#[tokio::test]
async fn fetched_team_filters_client_side() {
    let client = common::mock_team_api(team_routes()).await;

    let mut roster = TeamRoster::default();
    roster.apply_fetch(client.my_team("tok").await);
    assert!(!roster.loading);
    assert_eq!(roster.count(), 3);

    roster.filters = roster.filters.with(FilterField::Broker, "b-1");
    let ids: Vec<String> = roster.visible().into_iter().map(|m| m.id).collect();
    assert_eq!(ids, vec!["m-1", "m-3"]);

    roster.filters = roster
        .filters
        .with(FilterField::Specialization, Specialization::EquityTrader.code());
    let ids: Vec<String> = roster.visible().into_iter().map(|m| m.id).collect();
    assert_eq!(ids, vec!["m-1"]);

    // The unfiltered count is unaffected.
    assert_eq!(roster.count(), 3);
}

#[tokio::test]
async fn chips_resolve_names_from_reference_lists() {
    let client = common::mock_team_api(team_routes()).await;
    let brokers = client.brokers(Some("tok")).await.unwrap();
    let segments = client.segments(Some("tok")).await.unwrap();

    let mut roster = TeamRoster::default();
    roster.filters = roster
        .filters
        .with(FilterField::Broker, "b-2")
        .with(FilterField::Segment, "s-eq")
        .with(FilterField::Specialization, "COMMODITY_TRADER");

    let labels: Vec<String> = active_chips(&roster.filters, &brokers, &segments)
        .into_iter()
        .map(|c| c.label)
        .collect();
    assert_eq!(
        labels,
        vec![
            "Broker: Upstox",
            "Segment: Equity",
            "Specialization: COMMODITY TRADER"
        ]
    );
}

#[tokio::test]
async fn failed_refresh_keeps_previous_members() {
    let client = common::mock_team_api(team_routes()).await;
    let mut roster = TeamRoster::default();
    roster.apply_fetch(client.my_team("tok").await);

    let dead = common::client_for(common::closed_base_url().await);
    roster.loading = true;
    roster.apply_fetch(dead.my_team("tok").await);

    assert!(!roster.loading);
    assert_eq!(roster.count(), 3);
}

#[tokio::test]
async fn member_with_null_broker_does_not_empty_the_team() {
    let routes = Router::new().route(
        "/users/my-team",
        get(|| async {
            Json(json!({ "members": [
                common::member_json("m-1", "Kiran", "b-1"),
                {
                    "_id": "m-2",
                    "firstName": "Dev",
                    "lastName": "Rao",
                    "email": "dev@example.com",
                    "broker": null
                }
            ]}))
        }),
    );
    let client = common::mock_team_api(routes).await;

    let mut roster = TeamRoster::default();
    roster.apply_fetch(client.my_team("tok").await);
    assert_eq!(roster.count(), 2);

    roster.filters = roster.filters.with(FilterField::Broker, "b-1");
    let ids: Vec<String> = roster.visible().into_iter().map(|m| m.id).collect();
    assert_eq!(ids, vec!["m-1"]);
}
