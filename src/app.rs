//! Manong Admin Frontend App
//!
//! App shell: title bar, services page, activity panel, and status dialog.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ActivityPanel, ServicesPage, StatusDialog, TitleBar};
use crate::context::AppContext;
use crate::store::AdminState;

#[component]
pub fn App() -> impl IntoView {
    // Provide context to all children
    let ctx = AppContext::from_storage();
    provide_context(ctx);
    provide_context(Store::new(AdminState::default()));

    // Apply theme to the document root
    Effect::new(move |_| {
        let theme = ctx.theme();
        if let Some(root) = document().document_element() {
            let _ = root.set_attribute("data-theme", theme.as_str());
        }
    });

    view! {
        <div class="app-layout">
            <TitleBar />

            <main class="main-content">
                <ServicesPage />
            </main>

            <ActivityPanel />
            <StatusDialog />
        </div>
    }
}
