use dioxus::prelude::*;

/// Horizontal tab bar whose selection is owned by the caller.
#[component]
pub fn TabNav(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        nav { class: "tab-nav", role: "tablist", {children} }
    }
}

#[component]
pub fn TabNavItem(active: bool, onclick: EventHandler<MouseEvent>, children: Element) -> Element {
    rsx! {
        button {
            class: "tab-nav-item",
            r#type: "button",
            role: "tab",
            aria_selected: if active { "true" } else { "false" },
            "data-state": if active { "active" } else { "inactive" },
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}
