//! Catalog Draft Store
//!
//! Working copy of the service catalog kept next to the last snapshot fetched
//! from the server. Edits only touch the working copy until it is saved or
//! reset.

use crate::action::{DraftAction, ItemEdit, SubItemEdit};
use crate::model::{EntityId, ServiceItem, SubServiceItem};
use crate::wire::SaveCatalogRequest;

/// Editable catalog plus the snapshot it diverged from
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogDraft {
    original: Vec<ServiceItem>,
    items: Vec<ServiceItem>,
    /// Next id for an unsaved entity; always negative and only ever decreases
    next_synthetic: i64,
    lock: DraftLock,
}

/// Whether the draft currently accepts edits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DraftLock {
    #[default]
    Open,
    /// A request is in flight; its result will replace the draft
    Pending,
    /// The server accepted a write but the refetch failed. Only a resync
    /// unlocks the draft again.
    Stale,
}

impl Default for CatalogDraft {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// Pending change counts, items and sub-items combined
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DraftSummary {
    pub added: usize,
    pub edited: usize,
    pub deleted: usize,
}

impl DraftSummary {
    pub fn total(&self) -> usize {
        self.added + self.edited + self.deleted
    }
}

impl CatalogDraft {
    /// Start a draft equal to `snapshot`
    pub fn new(snapshot: Vec<ServiceItem>) -> Self {
        Self {
            items: snapshot.clone(),
            original: snapshot,
            next_synthetic: -1,
            lock: DraftLock::Open,
        }
    }

    pub fn lock(&self) -> DraftLock {
        self.lock
    }

    pub fn is_editable(&self) -> bool {
        self.lock == DraftLock::Open
    }

    /// Dirty and free to be saved
    pub fn can_commit(&self) -> bool {
        self.is_editable() && self.is_dirty()
    }

    /// Freeze edits while a request runs. A stale draft stays stale.
    pub fn begin_request(&mut self) {
        if self.lock == DraftLock::Open {
            self.lock = DraftLock::Pending;
        }
    }

    /// The request failed without touching the server
    pub fn abandon_request(&mut self) {
        if self.lock == DraftLock::Pending {
            self.lock = DraftLock::Open;
        }
    }

    /// The server holds newer state than this draft
    pub fn mark_stale(&mut self) {
        self.lock = DraftLock::Stale;
    }

    pub fn items(&self) -> &[ServiceItem] {
        &self.items
    }

    pub fn original(&self) -> &[ServiceItem] {
        &self.original
    }

    pub fn item(&self, id: EntityId) -> Option<&ServiceItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn sub_item(&self, parent: EntityId, id: EntityId) -> Option<&SubServiceItem> {
        self.item(parent).and_then(|item| item.sub_item(id))
    }

    fn item_mut(&mut self, id: EntityId) -> Option<&mut ServiceItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    fn sub_item_mut(&mut self, parent: EntityId, id: EntityId) -> Option<&mut SubServiceItem> {
        self.item_mut(parent).and_then(|item| item.sub_item_mut(id))
    }

    fn allocate_id(&mut self) -> EntityId {
        let id = EntityId(self.next_synthetic);
        self.next_synthetic -= 1;
        id
    }

    /// True once the working copy differs from the snapshot
    pub fn is_dirty(&self) -> bool {
        self.items != self.original
    }

    /// Apply one action. Returns whether the draft changed.
    ///
    /// Actions are dropped unless the draft is [`DraftLock::Open`].
    pub fn dispatch(&mut self, action: DraftAction) -> bool {
        if !self.is_editable() {
            log::warn!("[DRAFT] {:?} ignored, draft is {:?}", action, self.lock);
            return false;
        }
        log::debug!("[DRAFT] {:?}", action);
        match action {
            DraftAction::AddServiceItem => {
                self.add_service_item();
                true
            }
            DraftAction::AddSubServiceItem { parent } => self.add_sub_service_item(parent).is_some(),
            DraftAction::EditItem { id, edit } => self.edit_item(id, edit),
            DraftAction::EditSubItem { parent, id, edit } => self.edit_sub_item(parent, id, edit),
            DraftAction::ToggleMarkDelete { id } => self.toggle_mark_delete(id),
            DraftAction::ToggleSubMarkDelete { parent, id } => self.toggle_sub_mark_delete(parent, id),
            DraftAction::Reset => {
                let changed = self.is_dirty();
                self.reset();
                changed
            }
        }
    }

    /// Append a blank service item and return its id
    pub fn add_service_item(&mut self) -> EntityId {
        let id = self.allocate_id();
        self.items.push(ServiceItem::new(id));
        id
    }

    /// Append a blank sub-item under `parent`. `None` if the parent is missing.
    pub fn add_sub_service_item(&mut self, parent: EntityId) -> Option<EntityId> {
        if self.item(parent).is_none() {
            log::debug!("[DRAFT] no service item {} to add a sub-item to", parent);
            return None;
        }
        let id = self.allocate_id();
        let item = self.item_mut(parent)?;
        item.sub_service_items.push(SubServiceItem::new(id, parent));
        Some(id)
    }

    pub fn edit_item(&mut self, id: EntityId, edit: ItemEdit) -> bool {
        match self.item_mut(id) {
            Some(item) => {
                edit.apply(item);
                true
            }
            None => false,
        }
    }

    pub fn edit_sub_item(&mut self, parent: EntityId, id: EntityId, edit: SubItemEdit) -> bool {
        match self.sub_item_mut(parent, id) {
            Some(sub) => {
                edit.apply(sub);
                true
            }
            None => false,
        }
    }

    /// Flip the tombstone on an item. Its sub-items are left alone.
    pub fn toggle_mark_delete(&mut self, id: EntityId) -> bool {
        match self.item_mut(id) {
            Some(item) => {
                item.mark_as_delete = !item.mark_as_delete;
                true
            }
            None => false,
        }
    }

    pub fn toggle_sub_mark_delete(&mut self, parent: EntityId, id: EntityId) -> bool {
        match self.sub_item_mut(parent, id) {
            Some(sub) => {
                sub.mark_as_delete = !sub.mark_as_delete;
                true
            }
            None => false,
        }
    }

    /// Throw away every edit
    pub fn reset(&mut self) {
        self.items = self.original.clone();
    }

    /// Replace both snapshot and working copy with fresh server state
    pub fn resync(&mut self, snapshot: Vec<ServiceItem>) {
        self.items = snapshot.clone();
        self.original = snapshot;
        self.lock = DraftLock::Open;
    }

    /// Payload for the batch save, tombstones included
    pub fn save_request(&self) -> SaveCatalogRequest {
        SaveCatalogRequest::from_items(&self.items)
    }

    pub fn summary(&self) -> DraftSummary {
        let mut summary = DraftSummary::default();
        for item in &self.items {
            let before = self.original.iter().find(|o| o.id == item.id);
            tally(&mut summary, item.mark_as_delete, before.is_some(), || {
                before.is_some_and(|b| !same_item_fields(b, item))
            });
            for sub in &item.sub_service_items {
                let sub_before = before.and_then(|b| b.sub_item(sub.id));
                tally(&mut summary, sub.mark_as_delete || item.mark_as_delete, sub_before.is_some(), || {
                    sub_before.is_some_and(|b| b != sub)
                });
            }
        }
        summary
    }
}

fn tally(summary: &mut DraftSummary, deleted: bool, existed: bool, edited: impl FnOnce() -> bool) {
    match (existed, deleted) {
        (true, true) => summary.deleted += 1,
        (false, false) => summary.added += 1,
        (true, false) if edited() => summary.edited += 1,
        _ => {}
    }
}

/// Compare everything except the sub-item list
fn same_item_fields(a: &ServiceItem, b: &ServiceItem) -> bool {
    a.title == b.title
        && a.description == b.description
        && a.price_min == b.price_min
        && a.price_max == b.price_max
        && a.rate_per_km == b.rate_per_km
        && a.icon_name == b.icon_name
        && a.icon_color == b.icon_color
        && a.icon_text_color == b.icon_text_color
        && a.status == b.status
        && a.mark_as_delete == b.mark_as_delete
}
