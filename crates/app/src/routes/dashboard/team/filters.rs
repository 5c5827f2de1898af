use dioxus::prelude::*;
use shared_types::{active_chips, FilterCriteria, FilterField, ALL_SPECIALIZATIONS};
use shared_ui::{Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, Chip, FormSelect};

use super::{loaded, use_reference_lists};

/// Broker, segment and specialization selectors with removable chips for
/// each active filter. Every change reports the full criteria upward.
#[component]
pub fn MemberFilters(filters: FilterCriteria, on_change: EventHandler<FilterCriteria>) -> Element {
    let (broker_res, segment_res) = use_reference_lists();
    let brokers = loaded(&broker_res);
    let segments = loaded(&segment_res);

    let chips = active_chips(&filters, &brokers, &segments);
    let is_active = filters.is_active();

    let select = |field: FilterField| {
        let current = filters.clone();
        move |evt: FormEvent| on_change.call(current.with(field, &evt.value()))
    };
    let on_broker = select(FilterField::Broker);
    let on_segment = select(FilterField::Segment);
    let on_specialization = select(FilterField::Specialization);

    rsx! {
        Card { class: "member-filters",
            CardHeader {
                div { class: "member-filters-header",
                    CardTitle { "Filter Team Members" }
                    if is_active {
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: move |_| on_change.call(FilterCriteria::default()),
                            "Clear all filters"
                        }
                    }
                }
            }
            CardContent {
                div { class: "member-filters-grid",
                    FormSelect {
                        label: "Filter by Broker",
                        name: "broker",
                        value: filters.value_of(FilterField::Broker),
                        onchange: on_broker,
                        option { value: "", "All Brokers" }
                        for broker in brokers.iter() {
                            option { key: "{broker.id}", value: "{broker.id}", "{broker.option_label()}" }
                        }
                    }
                    FormSelect {
                        label: "Filter by Segment",
                        name: "segment",
                        value: filters.value_of(FilterField::Segment),
                        onchange: on_segment,
                        option { value: "", "All Segments" }
                        for segment in segments.iter() {
                            option { key: "{segment.id}", value: "{segment.id}", "{segment.option_label()}" }
                        }
                    }
                    FormSelect {
                        label: "Filter by Specialization",
                        name: "specialization",
                        value: filters.value_of(FilterField::Specialization),
                        onchange: on_specialization,
                        option { value: "", "All Specializations" }
                        for specialization in ALL_SPECIALIZATIONS.iter() {
                            option {
                                key: "{specialization.code()}",
                                value: "{specialization.code()}",
                                "{specialization.display_name()}"
                            }
                        }
                    }
                }

                if !chips.is_empty() {
                    div { class: "member-filters-active",
                        span { class: "member-filters-active-label", "Active filters:" }
                        for chip in chips {
                            Chip {
                                key: "{chip.label}",
                                label: chip.label.clone(),
                                on_remove: {
                                    let current = filters.clone();
                                    let field = chip.field;
                                    move |_| on_change.call(current.with(field, ""))
                                },
                            }
                        }
                    }
                }
            }
        }
    }
}
