use dioxus::prelude::*;

/// A vertical list of label/value rows.
#[component]
pub fn DetailList(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        dl { class: "detail-list", {children} }
    }
}

/// One label/value row inside a `DetailList`. Blank values render as a dash.
#[component]
pub fn DetailItem(label: String, #[props(default)] value: String) -> Element {
    let shown = if value.trim().is_empty() { "—".to_string() } else { value };

    rsx! {
        div { class: "detail-item",
            dt { class: "detail-item-label", "{label}" }
            dd { class: "detail-item-value", "{shown}" }
        }
    }
}
