use dioxus::prelude::*;

/// Native checkbox with an inline label, for multi-select option groups.
#[component]
pub fn CheckboxField(
    label: String,
    #[props(default)] value: String,
    checked: bool,
    #[props(default)] on_toggle: EventHandler<()>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        label { class: "checkbox-field",
            input {
                r#type: "checkbox",
                value: value,
                checked: checked,
                onchange: move |_| on_toggle.call(()),
            }
            span { "{label}" }
        }
    }
}

/// Wrapping container for a group of `CheckboxField`s.
#[component]
pub fn CheckboxGroup(#[props(default)] label: String, children: Element) -> Element {
    rsx! {
        div { class: "checkbox-group", role: "group",
            if !label.is_empty() {
                span { class: "checkbox-group-label", "{label}" }
            }
            div { class: "checkbox-group-items", {children} }
        }
    }
}
