pub mod change_password;
pub mod dashboard;
pub mod login;
pub mod not_found;

use crate::session::use_session;
use dioxus::prelude::*;
use shared_types::GuardState;

use change_password::ChangePassword;
use dashboard::Dashboard;
use login::Login;
use not_found::NotFound;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/auth/login")]
    Login {},
    #[layout(ProtectedRoute)]
        #[route("/auth/change-password")]
        ChangePassword {},
        #[route("/dashboard")]
        Dashboard {},
    #[end_layout]
    #[redirect("/", || Route::Dashboard {})]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Layout that admits only signed-in users who have changed their initial
/// password. The password check is skipped on the change-password route
/// itself, judged from the live route path.
#[component]
fn ProtectedRoute() -> Element {
    let session = use_session();
    let route: Route = use_route();
    let state = GuardState::evaluate(&session.snapshot(), &route.to_string());

    use_effect(use_reactive((&state,), move |(state,)| {
        if let Some(target) = state.redirect_path().and_then(|p| p.parse::<Route>().ok()) {
            tracing::debug!(?state, %target, "guard redirect");
            navigator().replace(target);
        }
    }));

    rsx! {
        GuardGate { state, Outlet::<Route> {} }
    }
}

/// Renders `children` only once the guard admits the user. While the
/// identity check is in flight a placeholder is shown instead.
#[component]
fn GuardGate(state: GuardState, children: Element) -> Element {
    match state {
        GuardState::Resolving => rsx! {
            div { class: "auth-guard-loading",
                p { "Loading..." }
            }
        },
        _ if state.renders_children() => children,
        _ => rsx! {},
    }
}
