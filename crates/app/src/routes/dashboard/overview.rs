use dioxus::prelude::*;
use shared_types::User;
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, DetailItem, DetailList,
};

/// Read-only profile of the signed-in user.
#[component]
pub fn Overview(user: User, on_logout: EventHandler<()>) -> Element {
    rsx! {
        Card {
            CardHeader {
                CardTitle { "Dashboard" }
            }
            CardContent {
                DetailList {
                    DetailItem { label: "Employee ID", value: user.employee_id.clone() }
                    DetailItem { label: "Email", value: user.email.clone() }
                    DetailItem { label: "Role", value: user.role.label() }
                    DetailItem { label: "Department", value: user.department.clone() }
                }
                div { class: "overview-actions",
                    Button {
                        variant: ButtonVariant::Destructive,
                        onclick: move |_| on_logout.call(()),
                        "Logout"
                    }
                }
            }
        }
    }
}
