//! Draft Editor Scenario Tests
//!
//! End-to-end edit, save, and reset flows against an in-memory backend.

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use async_trait::async_trait;

    use crate::sync::{self, SyncError};
    use crate::{
        ApiError, ApiResult, CatalogApi, CatalogDraft, DraftAction, DraftLock, EntityId, ItemEdit,
        SaveCatalogRequest, ServiceItem, ServiceStatus, SubItemEdit,
    };

    /// Backend that applies saves the way the real server does:
    /// tombstones are dropped and unsaved ids get real ones.
    struct MemoryCatalog {
        items: RefCell<Vec<ServiceItem>>,
        saves: RefCell<Vec<SaveCatalogRequest>>,
        next_id: Cell<i64>,
        fail_saves: bool,
        fail_lists: Cell<bool>,
    }

    impl MemoryCatalog {
        fn new(items: Vec<ServiceItem>) -> Self {
            Self {
                items: RefCell::new(items),
                saves: RefCell::new(Vec::new()),
                next_id: Cell::new(100),
                fail_saves: false,
                fail_lists: Cell::new(false),
            }
        }

        fn failing(items: Vec<ServiceItem>) -> Self {
            Self { fail_saves: true, ..Self::new(items) }
        }

        fn assign(&self, id: EntityId) -> EntityId {
            if id.is_persisted() {
                return id;
            }
            let next = self.next_id.get();
            self.next_id.set(next + 1);
            EntityId(next)
        }
    }

    #[async_trait(?Send)]
    impl CatalogApi for MemoryCatalog {
        async fn list_service_items(&self) -> ApiResult<Vec<ServiceItem>> {
            if self.fail_lists.get() {
                return Err(ApiError::Network("connection reset".to_string()));
            }
            Ok(self.items.borrow().clone())
        }

        async fn save_service_items(&self, request: &SaveCatalogRequest) -> ApiResult<()> {
            self.saves.borrow_mut().push(request.clone());
            if self.fail_saves {
                return Err(ApiError::Rejected { status: 500, message: "database offline".to_string() });
            }
            // Stringified numbers decode back through the lenient model
            let value = serde_json::to_value(&request.service_items).unwrap();
            let decoded: Vec<ServiceItem> = serde_json::from_value(value).unwrap();
            let mut stored = Vec::new();
            for mut item in decoded.into_iter().filter(|i| !i.mark_as_delete) {
                item.id = self.assign(item.id);
                let parent = item.id;
                item.sub_service_items.retain(|s| !s.mark_as_delete);
                for sub in item.sub_service_items.iter_mut() {
                    sub.id = self.assign(sub.id);
                    sub.service_item_id = parent;
                }
                stored.push(item);
            }
            *self.items.borrow_mut() = stored;
            Ok(())
        }

        async fn reset_defaults(&self) -> ApiResult<()> {
            let mut general = ServiceItem::new(EntityId(1));
            general.title = "General Repair".to_string();
            *self.items.borrow_mut() = vec![general];
            Ok(())
        }
    }

    fn plumbing() -> ServiceItem {
        let mut item = ServiceItem::new(EntityId(1));
        item.title = "Plumbing".to_string();
        item.price_min = 150.0;
        item.price_max = 900.0;
        item
    }

    fn server_catalog() -> Vec<ServiceItem> {
        let mut first = plumbing();
        let mut sub = crate::SubServiceItem::new(EntityId(11), EntityId(1));
        sub.title = "Leak repair".to_string();
        first.sub_service_items.push(sub);
        let mut second = ServiceItem::new(EntityId(3));
        second.title = "Aircon Cleaning".to_string();
        vec![first, second]
    }

    #[test]
    fn test_reset_after_any_edits_restores_snapshot() {
        let snapshot = server_catalog();
        let mut draft = CatalogDraft::new(snapshot.clone());

        let added = draft.add_service_item();
        draft.add_sub_service_item(added);
        draft.add_sub_service_item(EntityId(3));
        draft.edit_item(EntityId(1), ItemEdit::SetTitle("Plumbing & Drainage".to_string()));
        draft.edit_sub_item(EntityId(1), EntityId(11), SubItemEdit::SetGross(99.0));
        draft.toggle_mark_delete(EntityId(3));
        draft.toggle_sub_mark_delete(EntityId(1), EntityId(11));
        assert!(draft.is_dirty());

        draft.dispatch(DraftAction::Reset);
        assert_eq!(draft.items(), snapshot.as_slice());
        assert!(!draft.is_dirty());
    }

    #[test]
    fn test_toggle_mark_delete_twice_is_identity() {
        let mut draft = CatalogDraft::new(server_catalog());
        let before = draft.item(EntityId(3)).unwrap().mark_as_delete;
        draft.toggle_mark_delete(EntityId(3));
        assert_ne!(draft.item(EntityId(3)).unwrap().mark_as_delete, before);
        draft.toggle_mark_delete(EntityId(3));
        assert_eq!(draft.item(EntityId(3)).unwrap().mark_as_delete, before);
        assert!(!draft.is_dirty());
    }

    #[test]
    fn test_add_sub_item_to_missing_parent_is_noop() {
        let mut draft = CatalogDraft::new(server_catalog());
        let before = draft.clone();
        assert_eq!(draft.add_sub_service_item(EntityId(42)), None);
        assert_eq!(draft, before);
    }

    #[test]
    fn test_new_item_id_does_not_collide_with_existing() {
        let mut draft = CatalogDraft::new(vec![plumbing()]);
        let new_id = draft.add_service_item();
        assert_ne!(new_id, EntityId(1));
        assert!(!new_id.is_persisted());
        let second = draft.add_service_item();
        assert!(draft.items().iter().filter(|i| i.id == second).count() == 1);
    }

    #[test]
    fn test_edit_icon_color_on_missing_item_is_silent() {
        let mut draft = CatalogDraft::new(server_catalog());
        let before = draft.items().to_vec();
        let changed = draft.dispatch(DraftAction::EditItem {
            id: EntityId(7),
            edit: ItemEdit::SetIconColor("#FF0000".to_string()),
        });
        assert!(!changed);
        assert_eq!(draft.items(), before.as_slice());
        assert!(!draft.is_dirty());
    }

    #[tokio::test]
    async fn test_commit_then_resync_matches_server() {
        let api = MemoryCatalog::new(server_catalog());
        let mut draft = CatalogDraft::new(sync::fetch_snapshot(&api).await.unwrap());

        let added = draft.add_service_item();
        draft.edit_item(added, ItemEdit::SetTitle("Carpentry".to_string()));
        draft.edit_item(added, ItemEdit::SetRatePerKm(18.5));
        draft.add_sub_service_item(added);
        draft.toggle_mark_delete(EntityId(3));

        let fresh = sync::commit(&api, &draft.save_request()).await.unwrap();
        draft.resync(fresh);

        assert_eq!(draft.items(), draft.original());
        assert!(!draft.is_dirty());
        let titles: Vec<_> = draft.items().iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Plumbing", "Carpentry"]);
        let carpentry = &draft.items()[1];
        assert!(carpentry.id.is_persisted());
        assert_eq!(carpentry.rate_per_km, 18.5);
        assert_eq!(carpentry.sub_service_items[0].service_item_id, carpentry.id);
    }

    #[tokio::test]
    async fn test_commit_sends_tombstones_and_strings() {
        let api = MemoryCatalog::new(server_catalog());
        let mut draft = CatalogDraft::new(server_catalog());
        draft.toggle_sub_mark_delete(EntityId(1), EntityId(11));

        sync::commit(&api, &draft.save_request()).await.unwrap();

        let saves = api.saves.borrow();
        assert_eq!(saves.len(), 1);
        let sent = &saves[0].service_items;
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].price_max, "900");
        assert!(sent[0].sub_service_items[0].mark_as_delete);
        assert!(!sent[1].mark_as_delete);
    }

    #[tokio::test]
    async fn test_failed_commit_leaves_draft_alone() {
        let api = MemoryCatalog::failing(server_catalog());
        let mut draft = CatalogDraft::new(server_catalog());
        draft.edit_item(EntityId(3), ItemEdit::SetStatus(ServiceStatus::ComingSoon));
        let before = draft.clone();

        let err = sync::commit(&api, &draft.save_request()).await.unwrap_err();
        assert_eq!(
            err,
            SyncError::NotApplied(ApiError::Rejected { status: 500, message: "database offline".to_string() })
        );
        assert!(!err.applied());
        assert_eq!(draft, before);
        assert!(draft.is_dirty());
        // server state untouched
        assert_eq!(api.items.borrow().len(), 2);
    }

    #[tokio::test]
    async fn test_restore_defaults_refetches() {
        let api = MemoryCatalog::new(server_catalog());
        let mut draft = CatalogDraft::new(server_catalog());
        draft.add_service_item();

        let fresh = sync::restore_defaults(&api).await.unwrap();
        draft.resync(fresh);
        assert_eq!(draft.items().len(), 1);
        assert_eq!(draft.items()[0].title, "General Repair");
        assert!(!draft.is_dirty());
    }

    #[tokio::test]
    async fn test_saved_but_refetch_failed_is_not_sent_twice() {
        let api = MemoryCatalog::new(server_catalog());
        let mut draft = CatalogDraft::new(server_catalog());
        let added = draft.add_service_item();
        draft.edit_item(added, ItemEdit::SetTitle("Roofing".to_string()));

        api.fail_lists.set(true);
        draft.begin_request();
        let err = sync::commit(&api, &draft.save_request()).await.unwrap_err();
        assert_eq!(err, SyncError::Unconfirmed(ApiError::Network("connection reset".to_string())));
        assert!(err.applied());
        draft.mark_stale();

        // The new item still carries its synthetic id, so a resend would create it again
        assert_eq!(draft.item(added).map(|i| i.id), Some(EntityId(-1)));
        assert_eq!(draft.lock(), DraftLock::Stale);
        assert!(!draft.can_commit());
        assert!(!draft.dispatch(DraftAction::Reset));

        api.fail_lists.set(false);
        draft.resync(sync::fetch_snapshot(&api).await.unwrap());
        assert!(draft.is_editable());
        assert!(!draft.is_dirty());
        assert_eq!(api.saves.borrow().len(), 1);
        let roofing: Vec<_> = draft.items().iter().filter(|i| i.title == "Roofing").collect();
        assert_eq!(roofing.len(), 1);
        assert!(roofing[0].id.is_persisted());
    }
}
