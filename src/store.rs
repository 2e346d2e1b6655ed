//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use catalog_draft::{CatalogDraft, DraftAction, DraftLock, ServiceItem};

/// What the services page is waiting on
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Saving,
    Restoring,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Message shown in the status dialog
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn success(title: &str, message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, title: title.to_string(), message: message.into() }
    }

    pub fn error(title: &str, err: &impl std::fmt::Display) -> Self {
        Self { kind: NoticeKind::Error, title: title.to_string(), message: err.to_string() }
    }
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AdminState {
    /// Service catalog working copy and snapshot
    pub draft: CatalogDraft,
    /// Pending network operation, if any
    pub phase: Phase,
    /// Dialog currently shown
    pub notice: Option<Notice>,
}

/// Type alias for the store
pub type AdminStore = Store<AdminState>;

/// Get the admin store from context
pub fn use_admin_store() -> AdminStore {
    expect_context::<AdminStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Dispatch an edit against the draft; dropped while the draft is locked
pub fn store_dispatch(store: &AdminStore, action: DraftAction) {
    store.draft().write().dispatch(action);
}

/// Tracks whether the draft accepts edits
pub fn draft_editable(store: AdminStore) -> Signal<bool> {
    Signal::derive(move || store.draft().read().is_editable())
}

pub fn draft_is_stale(store: AdminStore) -> Signal<bool> {
    Signal::derive(move || store.draft().read().lock() == DraftLock::Stale)
}

/// Lock the draft and enter `phase` for a request
pub fn store_begin_request(store: &AdminStore, phase: Phase) {
    store.draft().write().begin_request();
    store.phase().set(phase);
}

/// Unlock after a request that left the server untouched
pub fn store_abandon_request(store: &AdminStore) {
    store.draft().write().abandon_request();
    store.phase().set(Phase::Idle);
}

/// The server took a write but the refetch failed
pub fn store_mark_stale(store: &AdminStore) {
    store.draft().write().mark_stale();
    store.phase().set(Phase::Idle);
}

/// Install a fresh server snapshot on both sides of the draft
pub fn store_resync(store: &AdminStore, items: Vec<ServiceItem>) {
    store.draft().write().resync(items);
    store.phase().set(Phase::Idle);
}

pub fn store_notify(store: &AdminStore, notice: Notice) {
    store.notice().set(Some(notice));
}

pub fn store_dismiss(store: &AdminStore) {
    store.notice().set(None);
}
