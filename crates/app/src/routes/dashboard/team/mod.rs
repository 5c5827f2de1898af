//! Team management: filterable member list plus the add-member form.
//!
//! The roster (members, filters, active tab) is owned here. Children report
//! filter changes and created members upward through callbacks.

mod add_member;
mod filters;
mod member_list;

use dioxus::prelude::*;
use shared_types::{Broker, FilterCriteria, Member, Segment, TeamRoster, TeamTab};
use shared_ui::{Badge, BadgeVariant, TabNav, TabNavItem};

use add_member::AddMemberForm;
use filters::MemberFilters;
use member_list::MemberList;

#[component]
pub fn TeamManagement() -> Element {
    let mut roster = use_signal(TeamRoster::default);

    let mut team_fetch = use_future(move || async move {
        roster.write().loading = true;
        let result = server::api::list_my_team().await;
        if let Err(e) = &result {
            tracing::warn!(error = %e, "failed to load team members");
        }
        roster.write().apply_fetch(result);
    });

    let active_tab = roster.read().active_tab;
    let count = roster.read().count();
    let filters = roster.read().filters.clone();
    let visible = roster.read().visible();
    let loading = roster.read().loading;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./team.css") }

        div { class: "team-management",
            TabNav {
                TabNavItem {
                    active: active_tab == TeamTab::List,
                    onclick: move |_| roster.write().active_tab = TeamTab::List,
                    "Team Members"
                    Badge { variant: BadgeVariant::Secondary, class: "team-count", "{count}" }
                }
                TabNavItem {
                    active: active_tab == TeamTab::Add,
                    onclick: move |_| roster.write().active_tab = TeamTab::Add,
                    "Add Member"
                }
            }

            match active_tab {
                TeamTab::List => rsx! {
                    MemberFilters {
                        filters,
                        on_change: move |criteria: FilterCriteria| roster.write().filters = criteria,
                    }
                    MemberList {
                        members: visible,
                        loading,
                        on_refresh: move |_| team_fetch.restart(),
                    }
                },
                TeamTab::Add => rsx! {
                    AddMemberForm {
                        on_member_added: move |member: Member| roster.write().member_added(member),
                        on_cancel: move |_| roster.write().active_tab = TeamTab::List,
                    }
                },
            }
        }
    }
}

/// Broker and segment lists for selectors. Each caller fetches its own copy
/// on mount; a failed fetch leaves the list empty.
fn use_reference_lists() -> (Resource<Vec<Broker>>, Resource<Vec<Segment>>) {
    let brokers = use_resource(|| async {
        server::api::list_brokers().await.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to load brokers");
            Vec::new()
        })
    });
    let segments = use_resource(|| async {
        server::api::list_segments().await.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to load segments");
            Vec::new()
        })
    });
    (brokers, segments)
}

fn loaded<T: Clone>(resource: &Resource<Vec<T>>) -> Vec<T> {
    resource.read().as_ref().cloned().unwrap_or_default()
}
