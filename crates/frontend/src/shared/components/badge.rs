use leptos::prelude::*;

use super::Tone;

/// Pill-shaped inline label.
#[component]
pub fn Badge(
    /// Colour tone, rendered as a `badge--*` modifier class.
    tone: Tone,
    /// Badge content
    children: Children,
) -> impl IntoView {
    view! {
        <span class=format!("badge badge--{}", tone.as_class())>{children()}</span>
    }
}
