//! Color Picker Component

use leptos::prelude::*;

const SWATCHES: &[&str] = &[
    "#3B82F6", "#10B981", "#F59E0B", "#EF4444", "#8B5CF6", "#0EA5E9", "#111827", "#FFFFFF",
];

/// Swatch row plus a native color input
#[component]
pub fn ColorPicker(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="field color-picker">
            <span class="field-label">{label}</span>
            <div class="swatches">
                {SWATCHES.iter().map(|swatch| {
                    let swatch = *swatch;
                    view! {
                        <button
                            type="button"
                            class=move || if value.get().eq_ignore_ascii_case(swatch) { "swatch active" } else { "swatch" }
                            style=format!("background: {};", swatch)
                            title=swatch
                            on:click=move |_| on_change.run(swatch.to_string())
                        ></button>
                    }
                }).collect_view()}
                <input
                    type="color"
                    prop:value=move || value.get().to_lowercase()
                    on:input=move |ev| on_change.run(event_target_value(&ev).to_uppercase())
                />
            </div>
        </div>
    }
}
