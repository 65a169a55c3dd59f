use leptos::prelude::*;

/// Colour family of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeTone {
    Info,
    #[default]
    Neutral,
    Failure,
    Success,
    Accent,
}

impl BadgeTone {
    fn class(self) -> &'static str {
        match self {
            BadgeTone::Info => "badge--info",
            BadgeTone::Neutral => "badge--neutral",
            BadgeTone::Failure => "badge--error",
            BadgeTone::Success => "badge--success",
            BadgeTone::Accent => "badge--primary",
        }
    }
}

/// Badge component with different tones
#[component]
pub fn Badge(
    /// Badge tone, neutral by default
    #[prop(optional)]
    tone: BadgeTone,
    /// Badge content
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", tone.class(), additional_class())>
            {children()}
        </span>
    }
}
