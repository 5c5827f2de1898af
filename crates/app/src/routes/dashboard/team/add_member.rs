use dioxus::prelude::*;
use shared_types::{AddMemberState, DraftField, Member, ALL_SPECIALIZATIONS, SUCCESS_CLEAR_MS};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, CheckboxField, CheckboxGroup,
    Form, FormActions, FormSection, FormSelect, Input, Notice, NoticeVariant,
};

use super::{loaded, use_reference_lists};
use crate::timing::sleep_ms;

/// Form for creating a member in the caller's team.
///
/// On success the created member is reported through `on_member_added`
/// exactly once and the draft is reset.
#[component]
pub fn AddMemberForm(on_member_added: EventHandler<Member>, on_cancel: EventHandler<()>) -> Element {
    let mut state = use_signal(AddMemberState::default);
    let (broker_res, segment_res) = use_reference_lists();
    let brokers = loaded(&broker_res);
    let segments = loaded(&segment_res);

    let handle_submit = move |_evt: FormEvent| async move {
        let Some(request) = state.write().begin_submit() else {
            return;
        };
        let result = server::api::create_member(request).await;
        if let Err(e) = &result {
            tracing::warn!(error = %e, "failed to add member");
        }
        let created = state.write().finish(result);
        if let Some(member) = created {
            tracing::info!(member_id = %member.id, "member added");
            spawn(async move {
                sleep_ms(SUCCESS_CLEAR_MS).await;
                state.write().clear_success();
            });
            on_member_added.call(member);
        }
    };

    let snapshot = state.read().clone();
    let submitting = snapshot.submitting;

    rsx! {
        Card { class: "add-member",
            CardHeader {
                CardTitle { "Add New Team Member" }
            }
            CardContent {
                if let Some(err) = snapshot.error.clone() {
                    Notice { variant: NoticeVariant::Error, "{err}" }
                }
                if let Some(msg) = snapshot.success.clone() {
                    Notice { variant: NoticeVariant::Success, "{msg}" }
                }

                Form { onsubmit: handle_submit,
                    FormSection { title: "Basic Information",
                        div { class: "add-member-grid",
                            DraftInput { state, field: DraftField::FirstName, label: "First Name", required: true }
                            DraftInput { state, field: DraftField::LastName, label: "Last Name", required: true }
                        }
                        DraftInput {
                            state,
                            field: DraftField::Email,
                            label: "Email",
                            input_type: "email",
                            required: true,
                        }
                        FormSelect {
                            label: "Broker",
                            name: "broker",
                            required: true,
                            value: snapshot.draft.broker.clone(),
                            onchange: move |e: FormEvent| state.write().draft.set(DraftField::Broker, e.value()),
                            option { value: "", "Select a broker" }
                            for broker in brokers.iter() {
                                option { key: "{broker.id}", value: "{broker.id}", "{broker.option_label()}" }
                            }
                        }
                        CheckboxGroup { label: "Trading Segments (Select multiple)",
                            for segment in segments.iter() {
                                CheckboxField {
                                    key: "{segment.id}",
                                    label: segment.option_label(),
                                    value: segment.id.clone(),
                                    checked: snapshot.draft.has_segment(&segment.id),
                                    on_toggle: {
                                        let id = segment.id.clone();
                                        move |_| state.write().draft.toggle_segment(&id)
                                    },
                                }
                            }
                        }
                    }

                    FormSection { title: "Professional Details",
                        div { class: "add-member-grid",
                            DraftInput {
                                state,
                                field: DraftField::Experience,
                                label: "Experience (Years)",
                                input_type: "number",
                            }
                            FormSelect {
                                label: "Specialization",
                                name: "specialization",
                                value: snapshot.draft.specialization.clone(),
                                onchange: move |e: FormEvent| state.write().draft.set(DraftField::Specialization, e.value()),
                                option { value: "", "Select specialization" }
                                for specialization in ALL_SPECIALIZATIONS.iter() {
                                    option {
                                        key: "{specialization.code()}",
                                        value: "{specialization.code()}",
                                        "{specialization.display_name()}"
                                    }
                                }
                            }
                            DraftInput {
                                state,
                                field: DraftField::TargetAmount,
                                label: "Target Amount",
                                input_type: "number",
                            }
                            DraftInput { state, field: DraftField::Phone, label: "Phone", input_type: "tel" }
                        }
                    }

                    FormSection { title: "Address",
                        DraftInput { state, field: DraftField::Street, placeholder: "Street Address" }
                        div { class: "add-member-grid add-member-grid-3",
                            DraftInput { state, field: DraftField::City, placeholder: "City" }
                            DraftInput { state, field: DraftField::State, placeholder: "State" }
                            DraftInput { state, field: DraftField::Pincode, placeholder: "Pincode" }
                        }
                    }

                    FormActions {
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| on_cancel.call(()),
                            "Cancel"
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            button_type: "submit",
                            disabled: submitting,
                            if submitting { "Adding..." } else { "Add Member" }
                        }
                    }
                }
            }
        }
    }
}

/// Text input bound to one field of the draft.
#[component]
fn DraftInput(
    state: Signal<AddMemberState>,
    field: DraftField,
    #[props(default)] label: String,
    #[props(default)] placeholder: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = false)] required: bool,
) -> Element {
    let mut state = state;
    let value = state.read().draft.get(field).to_string();

    rsx! {
        Input {
            label,
            placeholder,
            input_type,
            required,
            value,
            on_input: move |e: FormEvent| state.write().draft.set(field, e.value()),
        }
    }
}
