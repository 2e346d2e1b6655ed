//! Services Page
//!
//! Service catalog editor: loads the catalog into a draft, lets the admin edit
//! it locally, and saves the whole draft in one batch.

use leptos::prelude::*;
use leptos::task::spawn_local;

use catalog_draft::{sync, DraftAction, EntityId};

use crate::components::confirm_button::ConfirmButton;
use crate::components::service_item_card::ServiceItemCard;
use crate::context::use_app_context;
use crate::store::{
    draft_editable, draft_is_stale, store_abandon_request, store_begin_request, store_dispatch,
    store_mark_stale, store_notify, store_resync, use_admin_store, AdminStateStoreFields, Notice, Phase,
};

#[component]
pub fn ServicesPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_admin_store();

    let busy = move || store.phase().get() != Phase::Idle;
    let editable = draft_editable(store);
    let stale = draft_is_stale(store);
    let is_dirty = move || store.draft().read().is_dirty();
    // Edits that a reload would throw away
    let has_unsaved = move || store.draft().read().can_commit();
    let show_save = move || is_dirty() && !stale.get();

    let load = move || {
        ctx.refresh_token();
        let api = ctx.api();
        store_begin_request(&store, Phase::Loading);
        spawn_local(async move {
            match sync::fetch_snapshot(&api).await {
                Ok(items) => store_resync(&store, items),
                Err(e) => {
                    store_abandon_request(&store);
                    store_notify(&store, Notice::error("Could not load services", &e));
                }
            }
        });
    };

    // Load catalog on mount
    Effect::new(move |_| load());

    let save = move |_| {
        if !store.draft().read_untracked().can_commit() {
            return;
        }
        let request = store.draft().read_untracked().save_request();
        let api = ctx.api();
        store_begin_request(&store, Phase::Saving);
        spawn_local(async move {
            match sync::commit(&api, &request).await {
                Ok(items) => {
                    store_resync(&store, items);
                    store_notify(&store, Notice::success("Saved", "Service catalog saved."));
                }
                Err(e) if e.applied() => {
                    store_mark_stale(&store);
                    store_notify(&store, Notice::error("Saved, reload needed", &e));
                }
                Err(e) => {
                    store_abandon_request(&store);
                    store_notify(&store, Notice::error("Save failed", &e));
                }
            }
        });
    };

    let restore_defaults = Callback::new(move |_: ()| {
        let api = ctx.api();
        store_begin_request(&store, Phase::Restoring);
        spawn_local(async move {
            match sync::restore_defaults(&api).await {
                Ok(items) => {
                    store_resync(&store, items);
                    store_notify(&store, Notice::success("Defaults restored", "Default service catalog restored."));
                }
                Err(e) if e.applied() => {
                    store_mark_stale(&store);
                    store_notify(&store, Notice::error("Defaults restored, reload needed", &e));
                }
                Err(e) => {
                    store_abandon_request(&store);
                    store_notify(&store, Notice::error("Restore failed", &e));
                }
            }
        });
    });

    let save_label = move || {
        if store.phase().get() == Phase::Saving {
            return "Saving...".to_string();
        }
        let summary = store.draft().read().summary();
        match summary.total() {
            0 => "Save".to_string(),
            1 => "Save 1 change".to_string(),
            n => format!("Save {} changes", n),
        }
    };

    let item_ids = move || store.draft().read().items().iter().map(|item| item.id).collect::<Vec<_>>();

    view! {
        <section class="services-page">
            <header class="page-header">
                <h1>"Service Catalog"</h1>
                <div class="page-actions">
                    <Show
                        when=has_unsaved
                        fallback=move || view! {
                            <button type="button" class="btn" disabled=busy on:click=move |_| load()>
                                "Reload"
                            </button>
                        }
                    >
                        <ConfirmButton
                            label="Reload"
                            prompt="Discard unsaved changes?"
                            button_class="btn"
                            disabled=Signal::derive(busy)
                            on_confirm=Callback::new(move |_: ()| load())
                        />
                    </Show>
                    <button
                        type="button"
                        class="btn"
                        disabled=move || busy() || !editable.get()
                        on:click=move |_| store_dispatch(&store, DraftAction::AddServiceItem)
                    >
                        "+ Add service"
                    </button>
                    <Show when=show_save>
                        <button
                            type="button"
                            class="btn secondary"
                            disabled=busy
                            on:click=move |_| store_dispatch(&store, DraftAction::Reset)
                        >
                            "Discard changes"
                        </button>
                        <button type="button" class="btn primary" disabled=busy on:click=save>
                            {save_label}
                        </button>
                    </Show>
                    <ConfirmButton
                        label="Restore defaults"
                        prompt="Replace the whole catalog?"
                        button_class="btn danger"
                        disabled=Signal::derive(move || busy() || stale.get())
                        on_confirm=restore_defaults
                    />
                </div>
            </header>

            <Show when=move || stale.get()>
                <p class="stale-warning">
                    "Your changes were saved but the catalog could not be reloaded. Reload before editing again."
                </p>
            </Show>

            <Show when=move || !ctx.has_token()>
                <p class="auth-warning">"No session token found. Log in again to load the catalog."</p>
            </Show>

            <Show
                when=move || store.phase().get() != Phase::Loading
                fallback=|| view! { <p class="loading">"Loading services..."</p> }
            >
                <Show
                    when=move || !store.draft().read().items().is_empty()
                    fallback=|| view! { <p class="empty">"No services yet."</p> }
                >
                    <div class="service-list">
                        <For
                            each=item_ids
                            key=|id| *id
                            children=move |id: EntityId| view! { <ServiceItemCard id=id /> }
                        />
                    </div>
                </Show>
            </Show>
        </section>
    }
}
