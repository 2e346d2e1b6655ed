//! Title Bar Component
//!
//! App title, session indicator, and theme toggle.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::storage::Theme;

#[component]
pub fn TitleBar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="titlebar">
            <div class="titlebar-brand">
                <span class="titlebar-title">"Manong Admin"</span>
            </div>

            <div class="titlebar-controls">
                <span class=move || if ctx.has_token() { "session-dot online" } else { "session-dot offline" }>
                    {move || if ctx.has_token() { "Signed in" } else { "Signed out" }}
                </span>
                <button
                    class="titlebar-btn theme"
                    title=move || if ctx.theme() == Theme::Dark { "Switch to light mode" } else { "Switch to dark mode" }
                    on:click=move |_| ctx.toggle_theme()
                >
                    {move || if ctx.theme() == Theme::Dark { "☀️" } else { "🌙" }}
                </button>
            </div>
        </div>
    }
}
