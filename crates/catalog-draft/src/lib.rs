//! Service Catalog Draft Editor
//!
//! Layered like the rest of the admin app:
//! - model: catalog entities as the API returns them
//! - action / draft: the editable working copy and its typed edits
//! - wire / api / http: request bodies and the backend seam
//! - sync: load, commit, and restore-defaults flows

mod action;
mod api;
mod draft;
mod http;
mod model;
pub mod sync;
mod wire;

#[cfg(test)]
mod tests;

pub use action::{parse_amount, DraftAction, ItemEdit, SubItemEdit};
pub use api::{ApiError, ApiResult, CatalogApi, LIST_PATH, RESET_DEFAULTS_PATH, SAVE_PATH};
pub use draft::{CatalogDraft, DraftLock, DraftSummary};
pub use http::HttpCatalogApi;
pub use model::{
    EntityId, ServiceItem, ServiceStatus, SubServiceItem, DEFAULT_ICON, DEFAULT_ICON_COLOR,
    DEFAULT_ICON_TEXT_COLOR,
};
pub use wire::{amount, ApiEnvelope, SaveCatalogRequest, WireServiceItem, WireSubServiceItem};
