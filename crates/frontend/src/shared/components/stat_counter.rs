use leptos::prelude::*;

use super::Tone;
use crate::shared::icons::icon;

/// Single statistic tile: icon, label, pre-formatted value, optional caption.
///
/// Values arrive as ready display strings. The records shown here are
/// immutable for the lifetime of the view, so the props are plain data
/// rather than signals.
#[component]
pub fn StatCounter(
    /// Label displayed next to the icon
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    /// Pre-formatted value string
    #[prop(into)]
    value: String,
    /// Colour tone of the tile
    tone: Tone,
    /// Optional caption below the value
    #[prop(optional, into)]
    caption: Option<String>,
    /// Render the value in the large variant
    #[prop(optional)]
    large: bool,
) -> impl IntoView {
    let tile_class = if large {
        format!("stat-counter stat-counter--large stat-counter--{}", tone.as_class())
    } else {
        format!("stat-counter stat-counter--{}", tone.as_class())
    };

    view! {
        <div class=tile_class>
            <div class="stat-counter__header">
                {icon(&icon_name)}
                <span class="stat-counter__label">{label}</span>
            </div>
            <div class="stat-counter__value">{value}</div>
            {caption.map(|c| view! { <div class="stat-counter__caption">{c}</div> })}
        </div>
    }
}
