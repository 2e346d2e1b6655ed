//! Sub-Service Row Component
//!
//! One editable sub-service line inside a service card.

use leptos::prelude::*;

use catalog_draft::{DraftAction, EntityId, ServiceStatus, SubItemEdit, SubServiceItem};

use crate::components::icon_picker::IconPicker;
use crate::components::status_selector::StatusSelector;
use crate::components::text_field::{AmountField, TextField};
use crate::store::{draft_editable, store_dispatch, use_admin_store, AdminStateStoreFields, AdminStore};

fn sub_field<T: Default + Send + Sync + 'static>(
    store: AdminStore,
    parent: EntityId,
    id: EntityId,
    read: fn(&SubServiceItem) -> T,
) -> Signal<T> {
    Signal::derive(move || store.draft().read().sub_item(parent, id).map(read).unwrap_or_default())
}

#[component]
pub fn SubServiceRow(parent: EntityId, id: EntityId) -> impl IntoView {
    let store = use_admin_store();

    let edit = move |edit: SubItemEdit| store_dispatch(&store, DraftAction::EditSubItem { parent, id, edit });
    let deleted = sub_field(store, parent, id, |s| s.mark_as_delete);
    let editable = draft_editable(store);
    let is_new = !id.is_persisted();

    let row_class = move || {
        let mut class = String::from("sub-service-row");
        if deleted.get() {
            class.push_str(" marked-delete");
        }
        if is_new {
            class.push_str(" unsaved");
        }
        class
    };

    view! {
        <div class=row_class>
            <fieldset class="sub-service-fields" disabled=move || deleted.get() || !editable.get()>
                <IconPicker
                    current=sub_field(store, parent, id, |s| s.icon_name.clone())
                    on_select=Callback::new(move |v| edit(SubItemEdit::SetIconName(v)))
                />
                <TextField
                    label="Title"
                    value=sub_field(store, parent, id, |s| s.title.clone())
                    on_input=Callback::new(move |v| edit(SubItemEdit::SetTitle(v)))
                />
                <TextField
                    label="Description"
                    value=sub_field(store, parent, id, |s| s.description.clone())
                    on_input=Callback::new(move |v| edit(SubItemEdit::SetDescription(v)))
                />
                <AmountField
                    label="Cost"
                    value=sub_field(store, parent, id, |s| s.cost)
                    on_commit=Callback::new(move |v| edit(SubItemEdit::SetCost(v)))
                />
                <AmountField
                    label="Fee"
                    value=sub_field(store, parent, id, |s| s.fee)
                    on_commit=Callback::new(move |v| edit(SubItemEdit::SetFee(v)))
                />
                <AmountField
                    label="Gross"
                    value=sub_field(store, parent, id, |s| s.gross)
                    on_commit=Callback::new(move |v| edit(SubItemEdit::SetGross(v)))
                />
                <StatusSelector
                    current=sub_field(store, parent, id, |s| s.status)
                    on_change=Callback::new(move |v: ServiceStatus| edit(SubItemEdit::SetStatus(v)))
                />
            </fieldset>
            <button
                type="button"
                class=move || if deleted.get() { "btn small undo" } else { "btn small danger" }
                disabled=move || !editable.get()
                on:click=move |_| store_dispatch(&store, DraftAction::ToggleSubMarkDelete { parent, id })
            >
                {move || if deleted.get() { "Undo" } else { "Remove" }}
            </button>
        </div>
    }
}
