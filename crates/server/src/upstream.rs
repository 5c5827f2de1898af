//! HTTP client for the external team API.
//!
//! Every call to the team API goes through [`UpstreamClient`], which owns the
//! base URL, the request timeout and bearer-token injection. Non-success
//! responses become [`AppError`]s carrying the API's `{ message }`.

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::{
    ApiConfig, AppError, Broker, BrokersEnvelope, ChangePasswordRequest, CreateMemberRequest,
    LoginRequest, LoginResponse, Member, MemberEnvelope, MessageResponse, Segment,
    SegmentsEnvelope, TeamEnvelope, User, UserEnvelope,
};
use std::sync::OnceLock;
use std::time::Duration;

use crate::error_convert::{upstream_status_to_app_error, ReqwestErrorExt};

static CLIENT: OnceLock<UpstreamClient> = OnceLock::new();

/// Shared client built from the loaded configuration.
pub fn upstream() -> Result<&'static UpstreamClient, AppError> {
    if let Some(client) = CLIENT.get() {
        return Ok(client);
    }
    let client = UpstreamClient::new(crate::config::load_config().api.clone())?;
    Ok(CLIENT.get_or_init(|| client))
}

#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl UpstreamClient {
    pub fn new(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { http, config })
    }

    fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        let builder = self.http.request(method, self.config.url(path));
        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send a prepared request and decode a JSON success body.
    #[tracing::instrument(skip(self, builder), fields(base_url = %self.config.base_url))]
    async fn send<T: DeserializeOwned>(
        &self,
        path: &str,
        builder: RequestBuilder,
    ) -> Result<T, AppError> {
        let response = builder.send().await.map_err(|e| {
            tracing::error!(error = %e, "team API request failed");
            e.into_app_error()
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = upstream_status_to_app_error(status.as_u16(), &body);
            tracing::warn!(status = status.as_u16(), message = %err.message, "team API returned an error");
            return Err(err);
        }

        response.json::<T>().await.map_err(|e| {
            tracing::error!(error = %e, "failed to decode team API response");
            e.into_app_error()
        })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, token: Option<&str>) -> Result<T, AppError> {
        self.send(path, self.request(Method::GET, path, token)).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> Result<T, AppError> {
        self.send(path, self.request(Method::POST, path, token).json(body))
            .await
    }

    /// `GET /auth/me`. A 401 means the token is no longer valid.
    pub async fn current_user(&self, token: &str) -> Result<User, AppError> {
        let envelope: UserEnvelope = self.get("/auth/me", Some(token)).await?;
        Ok(envelope.user)
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AppError> {
        self.post("/auth/login", request, None).await
    }

    pub async fn change_password(
        &self,
        token: &str,
        request: &ChangePasswordRequest,
    ) -> Result<MessageResponse, AppError> {
        self.post("/auth/change-password", request, Some(token)).await
    }

    pub async fn brokers(&self, token: Option<&str>) -> Result<Vec<Broker>, AppError> {
        let envelope: BrokersEnvelope = self.get("/brokers", token).await?;
        Ok(envelope.brokers)
    }

    pub async fn segments(&self, token: Option<&str>) -> Result<Vec<Segment>, AppError> {
        let envelope: SegmentsEnvelope = self.get("/segments", token).await?;
        Ok(envelope.segments)
    }

    pub async fn my_team(&self, token: &str) -> Result<Vec<Member>, AppError> {
        let envelope: TeamEnvelope = self.get("/users/my-team", Some(token)).await?;
        Ok(envelope.members)
    }

    pub async fn create_member(
        &self,
        token: &str,
        request: &CreateMemberRequest,
    ) -> Result<Member, AppError> {
        let envelope: MemberEnvelope = self.post("/users/members", request, Some(token)).await?;
        Ok(envelope.member)
    }
}
