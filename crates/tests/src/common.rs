use axum::{
    body::Body,
    http::{header, HeaderMap, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use server::upstream::UpstreamClient;
use shared_types::ApiConfig;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// What the mock team API saw, in arrival order.
#[derive(Clone, Default)]
pub struct Recorder {
    pub authorization: Arc<Mutex<Vec<Option<String>>>>,
    pub bodies: Arc<Mutex<Vec<Value>>>,
}

impl Recorder {
    pub fn record(&self, headers: &HeaderMap, body: Option<Value>) {
        let auth = headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        self.authorization.lock().unwrap().push(auth);
        if let Some(body) = body {
            self.bodies.lock().unwrap().push(body);
        }
    }

    pub fn authorization(&self) -> Vec<Option<String>> {
        self.authorization.lock().unwrap().clone()
    }

    pub fn bodies(&self) -> Vec<Value> {
        self.bodies.lock().unwrap().clone()
    }
}

/// Serve `routes` under `/api` on an ephemeral port and return a client
/// pointed at it.
pub async fn mock_team_api(routes: Router) -> UpstreamClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock listener");
    let addr = listener.local_addr().expect("mock listener has no address");
    let app = Router::new().nest("/api", routes);
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock server failed");
    });

    client_for(format!("http://{addr}/api"))
}

pub fn client_for(base_url: String) -> UpstreamClient {
    UpstreamClient::new(ApiConfig {
        base_url,
        timeout_secs: 5,
    })
    .expect("Failed to build upstream client")
}

/// A base URL nothing is listening on.
pub async fn closed_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind unused listener");
    let addr = listener.local_addr().expect("unused listener has no address");
    drop(listener);
    format!("http://{addr}/api")
}

pub fn broker_json(id: &str, name: &str, code: &str) -> Value {
    json!({ "_id": id, "name": name, "code": code })
}

pub fn segment_json(id: &str, name: &str, code: &str) -> Value {
    json!({ "_id": id, "name": name, "code": code })
}

pub fn member_json(id: &str, first: &str, broker_id: &str) -> Value {
    json!({
        "_id": id,
        "firstName": first,
        "lastName": "Shah",
        "email": format!("{}@example.com", first.to_lowercase()),
        "broker": broker_json(broker_id, "Zerodha", "ZRD"),
        "segments": [segment_json("s-eq", "Equity", "EQ")],
        "memberDetails": {
            "experience": 4,
            "specialization": "EQUITY_TRADER",
            "targetAmount": 250000,
            "phone": "9800000000",
            "address": { "city": "Pune" }
        }
    })
}

pub fn user_json(is_password_changed: bool) -> Value {
    json!({
        "_id": "u-1",
        "firstName": "Asha",
        "lastName": "Rao",
        "email": "asha@example.com",
        "role": "tl",
        "employeeId": "EMP-001",
        "department": "Sales",
        "isPasswordChanged": is_password_changed
    })
}

/// Send a request through `app` and return status, headers and body text.
pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, HeaderMap, String) {
    let response = app
        .clone()
        .oneshot(req)
        .await
        .expect("Failed to send request");

    let status = response.status();
    let headers = response.headers().clone();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");

    (status, headers, String::from_utf8_lossy(&body_bytes).to_string())
}
