use dioxus::prelude::*;

mod routes;
mod session;
mod timing;

use routes::Route;
use session::SessionState;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        let config = server::config::load_config();
        tracing::info!(api = %config.api.base_url, "starting team dashboard");

        let router = dioxus::server::router(App)
            .layer(axum::middleware::from_fn(
                server::auth::middleware::session_middleware,
            ))
            .layer(tower_http::trace::TraceLayer::new_for_http())
            .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
            .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
                tower_http::request_id::MakeRequestUuid,
            ));
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    #[allow(unused_variables)]
    let session = use_context_provider(SessionState::new);

    // Identity is resolved once per app lifetime, on the hydrated client.
    // Server functions run as direct calls during SSR and would have no
    // browser cookie to forward.
    use_future(move || async move {
        #[cfg(feature = "server")]
        return;

        #[cfg(not(feature = "server"))]
        session.resolve().await;
    });

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        SuspenseBoundary {
            fallback: |_| rsx! {
                div { class: "auth-guard-loading",
                    p { "Loading..." }
                }
            },
            Router::<Route> {}
        }
    }
}
