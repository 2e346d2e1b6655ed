//! Icon Picker Component
//!
//! Grid of the service icons the mobile app knows how to render.

use leptos::prelude::*;

/// Icon name options with a preview glyph
pub const SERVICE_ICONS: &[(&str, &str)] = &[
    ("wrench", "🔧"),
    ("droplet", "💧"),
    ("bolt", "⚡"),
    ("broom", "🧹"),
    ("snowflake", "❄️"),
    ("hammer", "🔨"),
    ("paint-roller", "🎨"),
    ("truck", "🚚"),
    ("bug", "🐛"),
    ("leaf", "🌿"),
    ("car", "🚗"),
    ("home", "🏠"),
];

/// Preview glyph for an icon name
pub fn icon_glyph(name: &str) -> &'static str {
    SERVICE_ICONS
        .iter()
        .find(|(icon, _)| *icon == name)
        .map(|(_, glyph)| *glyph)
        .unwrap_or("❔")
}

/// Round badge showing an icon in its configured colors
#[component]
pub fn IconBadge(
    #[prop(into)] icon: Signal<String>,
    #[prop(into)] color: Signal<String>,
    #[prop(into)] text_color: Signal<String>,
) -> impl IntoView {
    view! {
        <span
            class="icon-badge"
            title=move || icon.get()
            style=move || format!("background: {}; color: {};", color.get(), text_color.get())
        >
            {move || icon_glyph(&icon.get())}
        </span>
    }
}

#[component]
pub fn IconPicker(
    #[prop(into)] current: Signal<String>,
    #[prop(into)] on_select: Callback<String>,
) -> impl IntoView {
    let (open, set_open) = signal(false);

    view! {
        <div class="icon-picker">
            <button
                type="button"
                class="icon-picker-toggle"
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                {move || icon_glyph(&current.get())}
                " "
                {move || current.get()}
            </button>
            <Show when=move || open.get()>
                <div class="icon-grid">
                    {SERVICE_ICONS.iter().map(|(name, glyph)| {
                        let name = *name;
                        view! {
                            <button
                                type="button"
                                class=move || if current.get() == name { "icon-option active" } else { "icon-option" }
                                title=name
                                on:click=move |_| {
                                    on_select.run(name.to_string());
                                    set_open.set(false);
                                }
                            >
                                {*glyph}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_glyph_lookup() {
        assert_eq!(icon_glyph("droplet"), "💧");
        assert_eq!(icon_glyph("unknown"), "❔");
    }
}
