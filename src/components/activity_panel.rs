//! Activity Panel Component
//!
//! Collapsible view over the logger's recent records.

use leptos::prelude::*;
use log::Level;
use rolling_logger::LogLine;

const SHOWN_LINES: usize = 50;

#[component]
pub fn ActivityPanel() -> impl IntoView {
    let (open, set_open) = signal(false);
    let lines = RwSignal::new(Vec::<LogLine>::new());

    let refresh = move || lines.set(rolling_logger::recent(SHOWN_LINES));

    view! {
        <aside class="activity-panel">
            <button
                type="button"
                class="activity-toggle"
                on:click=move |_| {
                    if !open.get_untracked() {
                        refresh();
                    }
                    set_open.update(|o| *o = !*o);
                }
            >
                {move || if open.get() { "Hide activity" } else { "Show activity" }}
            </button>
            <Show when=move || open.get()>
                <button type="button" class="btn small" on:click=move |_| refresh()>"Refresh"</button>
                <ul class="activity-lines">
                    {move || lines.get().into_iter().rev().map(|line| {
                        let class = match line.level {
                            Level::Error => "log-line error",
                            Level::Warn => "log-line warn",
                            _ => "log-line",
                        };
                        view! { <li class=class>{line.text}</li> }
                    }).collect_view()}
                </ul>
            </Show>
        </aside>
    }
}
