use dioxus::prelude::*;

/// A titled card of the inspector page, with optional controls on the right.
#[component]
pub fn Panel(
    title: String,
    #[props(optional)] badge: Option<String>,
    #[props(optional)] controls: Option<Element>,
    children: Element,
) -> Element {
    rsx! {
        section {
            class: "bg-white rounded-lg shadow-sm border border-gray-200",
            header {
                class: "px-6 py-4 border-b border-gray-200 flex items-center justify-between gap-3",
                h2 { class: "text-lg font-semibold text-gray-900",
                    "{title}"
                    if let Some(badge) = badge {
                        span { class: "ml-2 text-sm font-normal text-gray-500", "{badge}" }
                    }
                }
                if let Some(controls) = controls {
                    div { class: "flex items-center gap-2", {controls} }
                }
            }
            div { class: "p-6", {children} }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Muted,
    Error,
}

/// One-line status in place of panel content: loading, empty or failed.
#[component]
pub fn StatusLine(message: String, #[props(default = Tone::Muted)] tone: Tone, title: Option<String>) -> Element {
    let class = match tone {
        Tone::Muted => "text-center py-8 text-gray-500",
        Tone::Error => "text-red-500 p-4 bg-red-50 border border-red-200 rounded",
    };
    rsx! {
        div { class,
            if let Some(title) = title {
                h3 { class: "font-semibold mb-2", "{title}" }
            }
            "{message}"
        }
    }
}
