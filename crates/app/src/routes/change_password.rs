use crate::routes::Route;
use crate::session::use_session;
use dioxus::prelude::*;
use shared_types::AppError;
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, Input,
    Notice, NoticeVariant,
};

/// First-login password change. The team API validates the new password.
#[component]
pub fn ChangePassword() -> Element {
    let mut session = use_session();
    let mut current_password = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| async move {
        evt.prevent_default();
        if loading() {
            return;
        }
        loading.set(true);
        error_msg.set(None);

        match server::api::change_password(current_password(), new_password()).await {
            Ok(message) => {
                tracing::info!(%message, "password changed");
                session.mark_password_changed();
                navigator().replace(Route::Dashboard {});
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
                    CardTitle { "Change Password" }
                    CardDescription { "Set a new password before continuing" }
                }
                CardContent {
                    if let Some(err) = error_msg() {
                        Notice { variant: NoticeVariant::Error, "{err}" }
                    }
                    form { class: "auth-form", onsubmit: handle_submit,
                        Input {
                            label: "Current Password",
                            name: "current_password",
                            input_type: "password",
                            required: true,
                            value: current_password(),
                            on_input: move |e: FormEvent| current_password.set(e.value()),
                        }
                        Input {
                            label: "New Password",
                            name: "new_password",
                            input_type: "password",
                            required: true,
                            value: new_password(),
                            on_input: move |e: FormEvent| new_password.set(e.value()),
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            button_type: "submit",
                            disabled: loading(),
                            if loading() { "Saving..." } else { "Change Password" }
                        }
                    }
                }
            }
        }
    }
}
