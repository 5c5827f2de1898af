use crate::routes::Route;
use crate::session::use_session;
use dioxus::prelude::*;
use shared_types::AppError;
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, Input,
    Notice, NoticeVariant,
};

/// Email/password sign-in. Users who still need to change their initial
/// password are sent on by the route guard after landing on the dashboard.
#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let signed_in = session.user.read().is_some();
    use_effect(use_reactive((&signed_in,), move |(signed_in,)| {
        if signed_in {
            navigator().replace(Route::Dashboard {});
        }
    }));

    let handle_login = move |evt: FormEvent| async move {
        evt.prevent_default();
        if loading() {
            return;
        }
        loading.set(true);
        error_msg.set(None);

        match server::api::login(email(), password()).await {
            Ok(user) => {
                tracing::info!(user_id = %user.id, "signed in");
                session.sign_in(user);
            }
            Err(e) => {
                error_msg.set(Some(AppError::friendly_message(&e.to_string())));
            }
        }
        loading.set(false);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Sign In" }
                    CardDescription { "Use your team account credentials" }
                }
                CardContent {
                    if let Some(err) = error_msg() {
                        Notice { variant: NoticeVariant::Error, "{err}" }
                    }
                    form { class: "auth-form", onsubmit: handle_login,
                        Input {
                            label: "Email",
                            name: "email",
                            input_type: "email",
                            required: true,
                            placeholder: "you@example.com",
                            value: email(),
                            on_input: move |e: FormEvent| email.set(e.value()),
                        }
                        Input {
                            label: "Password",
                            name: "password",
                            input_type: "password",
                            required: true,
                            value: password(),
                            on_input: move |e: FormEvent| password.set(e.value()),
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            button_type: "submit",
                            disabled: loading(),
                            if loading() { "Signing in..." } else { "Sign In" }
                        }
                    }
                }
            }
        }
    }
}
