pub mod overview;
pub mod team;

use crate::session::use_session;
use dioxus::prelude::*;
use shared_types::{active_or_default, sections_for_role, Section};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle,
    PageActions, PageHeader, PageSubtitle, PageTitle, TabNav, TabNavItem,
};

use overview::Overview;
use team::TeamManagement;

/// Signed-in landing page: greeting header plus the sections the user's
/// role is allowed to see.
#[component]
pub fn Dashboard() -> Element {
    let session = use_session();
    let mut selected = use_signal(Section::default);

    let Some(user) = session.user.read().clone() else {
        return rsx! {};
    };

    let sections = sections_for_role(Some(&user.role));
    let active = active_or_default(selected(), &sections);

    // The route guard sends the user to the login page once `user` is gone.
    let logout = move || session.logout();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard-page",
            PageHeader {
                div {
                    PageTitle { "Welcome, {user.full_name()}" }
                    PageSubtitle {
                        span { class: "dashboard-role",
                            "Role: "
                            Badge { variant: BadgeVariant::Primary, "{user.role.label()}" }
                        }
                        if !user.employee_id.is_empty() {
                            span { class: "dashboard-employee-id", "ID: {user.employee_id}" }
                        }
                    }
                }
                PageActions {
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| logout(),
                        "Logout"
                    }
                }
            }

            TabNav {
                for section in sections.iter().copied() {
                    TabNavItem {
                        key: "{section.id()}",
                        active: section == active,
                        onclick: move |_| selected.set(section),
                        span { class: "section-icon", "{section.icon()}" }
                        "{section.label()}"
                    }
                }
            }

            div { class: "dashboard-section",
                match active {
                    Section::Overview => rsx! {
                        Overview { user: user.clone(), on_logout: move |_| logout() }
                    },
                    Section::Team => rsx! { TeamManagement {} },
                    Section::Admin => rsx! { AdminPanel {} },
                }
            }
        }
    }
}

#[component]
fn AdminPanel() -> Element {
    rsx! {
        Card {
            CardHeader {
                CardTitle { "Admin Panel" }
            }
            CardContent {
                p { "Admin Panel Content" }
            }
        }
    }
}
