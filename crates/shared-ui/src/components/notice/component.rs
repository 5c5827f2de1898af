use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum NoticeVariant {
    #[default]
    Info,
    Success,
    Error,
}

impl NoticeVariant {
    fn class(&self) -> &'static str {
        match self {
            NoticeVariant::Info => "info",
            NoticeVariant::Success => "success",
            NoticeVariant::Error => "error",
        }
    }

    /// Errors interrupt screen readers, everything else is polite.
    fn role(&self) -> &'static str {
        match self {
            NoticeVariant::Error => "alert",
            _ => "status",
        }
    }
}

/// Inline banner for form-level success and error messages.
#[component]
pub fn Notice(#[props(default)] variant: NoticeVariant, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "notice",
            "data-style": variant.class(),
            role: variant.role(),
            {children}
        }
    }
}
