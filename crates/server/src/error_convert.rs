use dioxus::prelude::ServerFnError;
use shared_types::{AppError, AppErrorKind, ApiErrorBody};

/// Convert an AppError into a ServerFnError by serializing as JSON.
pub fn app_error_to_server_fn_error(err: AppError) -> ServerFnError {
    let json = serde_json::to_string(&err).unwrap_or_else(|_| err.message.clone());
    ServerFnError::new(json)
}

/// Build an AppError from a non-success team API response.
///
/// The `{ message }` body wins when present; otherwise a generic message
/// naming the status is used.
pub fn upstream_status_to_app_error(status: u16, body: &str) -> AppError {
    let kind = AppErrorKind::from_status(status);
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| default_message(&kind, status));
    AppError::new(kind, message)
}

fn default_message(kind: &AppErrorKind, status: u16) -> String {
    match kind {
        AppErrorKind::Unauthorized => "Authentication required".to_string(),
        AppErrorKind::Forbidden => "You do not have access to this resource".to_string(),
        AppErrorKind::NotFound => "Resource not found".to_string(),
        _ => format!("Team service responded with status {status}"),
    }
}

/// Map a reqwest transport or decode failure to an AppError.
pub fn reqwest_to_app_error(err: reqwest::Error) -> AppError {
    if err.is_timeout() {
        AppError::upstream("The team service took too long to respond")
    } else if err.is_decode() {
        AppError::upstream("Unexpected response from the team service")
    } else {
        AppError::upstream("Unable to reach the team service")
    }
}

/// Extension trait providing `.into_app_error()` on reqwest::Error.
pub trait ReqwestErrorExt {
    fn into_app_error(self) -> AppError;
}

impl ReqwestErrorExt for reqwest::Error {
    fn into_app_error(self) -> AppError {
        reqwest_to_app_error(self)
    }
}

/// Extension trait providing `.into_server_fn_error()` on AppError.
pub trait AppErrorExt {
    fn into_server_fn_error(self) -> ServerFnError;
}

impl AppErrorExt for AppError {
    fn into_server_fn_error(self) -> ServerFnError {
        app_error_to_server_fn_error(self)
    }
}
