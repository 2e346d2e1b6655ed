//! Catalog Sync
//!
//! Load, commit, and restore-defaults flows. Every flow ends with a fresh
//! snapshot from the server; callers install it with
//! [`crate::CatalogDraft::resync`]. Nothing here retries.

use crate::api::{ApiError, ApiResult, CatalogApi};
use crate::model::ServiceItem;
use crate::wire::SaveCatalogRequest;

/// Failure of a write followed by a refetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncError {
    /// The write failed; server state is unchanged
    NotApplied(ApiError),
    /// The write went through but the refetch failed. The draft no longer
    /// matches the server and must not be sent again.
    Unconfirmed(ApiError),
}

impl SyncError {
    pub fn applied(&self) -> bool {
        matches!(self, SyncError::Unconfirmed(_))
    }

    pub fn cause(&self) -> &ApiError {
        match self {
            SyncError::NotApplied(e) | SyncError::Unconfirmed(e) => e,
        }
    }
}

impl std::fmt::Display for SyncError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SyncError::NotApplied(e) => write!(f, "{}", e),
            SyncError::Unconfirmed(e) => write!(f, "Changes were saved, but reloading failed: {}", e),
        }
    }
}

impl std::error::Error for SyncError {}

pub type SyncResult<T> = Result<T, SyncError>;

pub async fn fetch_snapshot<A: CatalogApi + ?Sized>(api: &A) -> ApiResult<Vec<ServiceItem>> {
    match api.list_service_items().await {
        Ok(items) => {
            log::info!("[CATALOG] Loaded {} service items", items.len());
            Ok(items)
        }
        Err(e) => {
            log::error!("[CATALOG] Load failed: {}", e);
            Err(e)
        }
    }
}

/// Refetch after a write the server already accepted
async fn confirm<A: CatalogApi + ?Sized>(api: &A) -> SyncResult<Vec<ServiceItem>> {
    fetch_snapshot(api).await.map_err(|e| {
        log::warn!("[CATALOG] Write applied but refetch failed; draft is stale");
        SyncError::Unconfirmed(e)
    })
}

/// Post the whole draft, then refetch
pub async fn commit<A: CatalogApi + ?Sized>(api: &A, request: &SaveCatalogRequest) -> SyncResult<Vec<ServiceItem>> {
    log::info!("[CATALOG] Saving {} service items", request.service_items.len());
    if let Err(e) = api.save_service_items(request).await {
        log::error!("[CATALOG] Save failed: {}", e);
        return Err(SyncError::NotApplied(e));
    }
    confirm(api).await
}

/// Replace the catalog with server defaults, then refetch
pub async fn restore_defaults<A: CatalogApi + ?Sized>(api: &A) -> SyncResult<Vec<ServiceItem>> {
    log::warn!("[CATALOG] Restoring default catalog");
    if let Err(e) = api.reset_defaults().await {
        log::error!("[CATALOG] Restore defaults failed: {}", e);
        return Err(SyncError::NotApplied(e));
    }
    confirm(api).await
}
