//! Service Item Card Component
//!
//! Editable card for one service item and its sub-services.

use leptos::prelude::*;

use catalog_draft::{DraftAction, EntityId, ItemEdit, ServiceItem, ServiceStatus};

use crate::components::color_picker::ColorPicker;
use crate::components::icon_picker::{IconBadge, IconPicker};
use crate::components::status_selector::StatusSelector;
use crate::components::sub_service_row::SubServiceRow;
use crate::components::text_field::{AmountField, TextField};
use crate::store::{draft_editable, store_dispatch, use_admin_store, AdminStateStoreFields, AdminStore};

fn item_field<T: Default + Send + Sync + 'static>(
    store: AdminStore,
    id: EntityId,
    read: fn(&ServiceItem) -> T,
) -> Signal<T> {
    Signal::derive(move || store.draft().read().item(id).map(read).unwrap_or_default())
}

/// A card in the services list, addressed by item id
#[component]
pub fn ServiceItemCard(id: EntityId) -> impl IntoView {
    let store = use_admin_store();

    let edit = move |edit: ItemEdit| store_dispatch(&store, DraftAction::EditItem { id, edit });
    let deleted = item_field(store, id, |i| i.mark_as_delete);
    let editable = draft_editable(store);
    let title = item_field(store, id, |i| i.title.clone());
    let is_new = !id.is_persisted();

    let sub_ids = move || {
        store
            .draft()
            .read()
            .item(id)
            .map(|item| item.sub_service_items.iter().map(|s| s.id).collect::<Vec<_>>())
            .unwrap_or_default()
    };

    let card_class = move || {
        let mut class = String::from("service-card");
        if deleted.get() {
            class.push_str(" marked-delete");
        }
        if is_new {
            class.push_str(" unsaved");
        }
        class
    };

    view! {
        <article class=card_class>
            <header class="card-header">
                <IconBadge
                    icon=item_field(store, id, |i| i.icon_name.clone())
                    color=item_field(store, id, |i| i.icon_color.clone())
                    text_color=item_field(store, id, |i| i.icon_text_color.clone())
                />
                <h2 class="card-title">
                    {move || {
                        let title = title.get();
                        if title.trim().is_empty() { "Untitled service".to_string() } else { title }
                    }}
                </h2>
                {is_new.then(|| view! { <span class="badge">"New"</span> })}
                <button
                    type="button"
                    class=move || if deleted.get() { "btn undo" } else { "btn danger" }
                    disabled=move || !editable.get()
                    on:click=move |_| store_dispatch(&store, DraftAction::ToggleMarkDelete { id })
                >
                    {move || if deleted.get() { "Undo delete" } else { "Delete" }}
                </button>
            </header>

            <fieldset class="card-body" disabled=move || deleted.get() || !editable.get()>
                <TextField
                    label="Title"
                    value=title
                    on_input=Callback::new(move |v| edit(ItemEdit::SetTitle(v)))
                />
                <TextField
                    label="Description"
                    multiline=true
                    value=item_field(store, id, |i| i.description.clone())
                    on_input=Callback::new(move |v| edit(ItemEdit::SetDescription(v)))
                />
                <div class="amount-row">
                    <AmountField
                        label="Min price"
                        value=item_field(store, id, |i| i.price_min)
                        on_commit=Callback::new(move |v| edit(ItemEdit::SetPriceMin(v)))
                    />
                    <AmountField
                        label="Max price"
                        value=item_field(store, id, |i| i.price_max)
                        on_commit=Callback::new(move |v| edit(ItemEdit::SetPriceMax(v)))
                    />
                    <AmountField
                        label="Rate per km"
                        value=item_field(store, id, |i| i.rate_per_km)
                        on_commit=Callback::new(move |v| edit(ItemEdit::SetRatePerKm(v)))
                    />
                </div>
                <StatusSelector
                    current=item_field(store, id, |i| i.status)
                    on_change=Callback::new(move |v: ServiceStatus| edit(ItemEdit::SetStatus(v)))
                />
                <div class="appearance-row">
                    <IconPicker
                        current=item_field(store, id, |i| i.icon_name.clone())
                        on_select=Callback::new(move |v| edit(ItemEdit::SetIconName(v)))
                    />
                    <ColorPicker
                        label="Icon color"
                        value=item_field(store, id, |i| i.icon_color.clone())
                        on_change=Callback::new(move |v| edit(ItemEdit::SetIconColor(v)))
                    />
                    <ColorPicker
                        label="Icon text color"
                        value=item_field(store, id, |i| i.icon_text_color.clone())
                        on_change=Callback::new(move |v| edit(ItemEdit::SetIconTextColor(v)))
                    />
                </div>
            </fieldset>

            <section class="sub-services">
                <h3>"Sub-services"</h3>
                <For
                    each=sub_ids
                    key=|sub_id| *sub_id
                    children=move |sub_id: EntityId| view! { <SubServiceRow parent=id id=sub_id /> }
                />
                <button
                    type="button"
                    class="btn small"
                    disabled=move || !editable.get()
                    on:click=move |_| store_dispatch(&store, DraftAction::AddSubServiceItem { parent: id })
                >
                    "+ Add sub-service"
                </button>
            </section>
        </article>
    }
}
