//! Status Selector Component
//!
//! Reusable publication status buttons.

use leptos::prelude::*;

use catalog_draft::ServiceStatus;

/// Status selector buttons for items and sub-items
#[component]
pub fn StatusSelector(
    #[prop(into)] current: Signal<ServiceStatus>,
    #[prop(into)] on_change: Callback<ServiceStatus>,
) -> impl IntoView {
    view! {
        <div class="status-selector">
            {ServiceStatus::ALL.iter().map(|status| {
                let status = *status;
                let is_selected = move || current.get() == status;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() {
                            format!("status-btn small {} active", status.as_str())
                        } else {
                            format!("status-btn small {}", status.as_str())
                        }
                        on:click=move |_| on_change.run(status)
                    >
                        {status.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
