use dioxus::prelude::*;
use shared_types::Member;
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, DataTable, DataTableBody,
    DataTableCell, DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow, SkeletonRows,
};

const COLUMNS: u32 = 6;

/// Tabular view of the (already filtered) team.
#[component]
pub fn MemberList(members: Vec<Member>, loading: bool, on_refresh: EventHandler<()>) -> Element {
    rsx! {
        Card { class: "member-list",
            CardHeader {
                div { class: "member-list-header",
                    CardTitle { "Team Members" }
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: loading,
                        onclick: move |_| on_refresh.call(()),
                        "Refresh"
                    }
                }
            }
            CardContent {
                if loading {
                    SkeletonRows { count: 5 }
                } else {
                    DataTable {
                        DataTableHeader {
                            DataTableColumn { "Name" }
                            DataTableColumn { "Email" }
                            DataTableColumn { "Broker" }
                            DataTableColumn { "Segments" }
                            DataTableColumn { "Specialization" }
                            DataTableColumn { "Phone" }
                        }
                        DataTableBody {
                            if members.is_empty() {
                                DataTableEmpty { colspan: COLUMNS, message: "No team members found" }
                            }
                            for member in members.iter() {
                                MemberRow { key: "{member.id}", member: member.clone() }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MemberRow(member: Member) -> Element {
    let specialization = member
        .specialization()
        .map(|s| s.display_name())
        .unwrap_or("—");
    let phone = member
        .member_details
        .as_ref()
        .map(|d| d.phone.as_str())
        .filter(|p| !p.is_empty())
        .unwrap_or("—");

    rsx! {
        DataTableRow {
            DataTableCell { "{member.full_name()}" }
            DataTableCell { "{member.email}" }
            DataTableCell { "{member.broker.name}" }
            DataTableCell { "{member.segment_names()}" }
            DataTableCell { "{specialization}" }
            DataTableCell { "{phone}" }
        }
    }
}
