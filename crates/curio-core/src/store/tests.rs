//! Store Tests
//!
//! Exercises MemoryStore against the behavior the hosted table provides.

#[cfg(test)]
mod tests {
    use crate::domain::{validate, Draft, ValidFields};
    use crate::store::{ItemStore, MemoryStore, StoreError};

    fn fields(name: &str, description: &str) -> ValidFields {
        validate(&Draft {
            name: name.to_string(),
            description: description.to_string(),
        })
        .expect("fields should validate")
    }

    #[tokio::test]
    async fn test_create_assigns_identity() {
        let store = MemoryStore::new();

        let created = store
            .create(&fields("Widget", "A small widget"))
            .await
            .expect("Failed to create");

        assert!(created.id > 0);
        assert_eq!(created.name, "Widget");
        assert_eq!(created.description, "A small widget");
        assert!(created.owner_id.is_none());
    }

    #[tokio::test]
    async fn test_create_then_get_round_trip() {
        let store = MemoryStore::new();

        let created = store.create(&fields("Widget", "A small widget")).await.unwrap();
        let fetched = store.get_by_id(created.id).await.expect("Get failed");

        assert_eq!(fetched.name, created.name);
        assert_eq!(fetched.description, created.description);
        assert_eq!(fetched.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_get_is_idempotent() {
        let store = MemoryStore::new();

        let created = store.create(&fields("Widget", "A small widget")).await.unwrap();
        let first = store.get_by_id(created.id).await.unwrap();
        let second = store.get_by_id(created.id).await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let store = MemoryStore::new();

        let result = store.get_by_id(999).await;

        assert_eq!(result, Err(StoreError::NotFound));
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let store = MemoryStore::new();

        store.create(&fields("First", "d")).await.unwrap();
        store.create(&fields("Second", "d")).await.unwrap();
        let third = store.create(&fields("Third", "d")).await.unwrap();

        let page = store.list(1, 12).await.expect("List failed");

        assert_eq!(page.total_count, 3);
        assert_eq!(page.items[0].id, third.id);
        assert_eq!(page.items.last().unwrap().name, "First");
    }

    #[tokio::test]
    async fn test_list_paginates() {
        let store = MemoryStore::new();
        for n in 0..5 {
            store.create(&fields(&format!("Item {}", n), "d")).await.unwrap();
        }

        let first = store.list(1, 2).await.unwrap();
        let last = store.list(3, 2).await.unwrap();

        assert_eq!(first.items.len(), 2);
        assert_eq!(first.total_count, 5);
        assert_eq!(last.items.len(), 1);
    }

    #[tokio::test]
    async fn test_list_empty_store() {
        let store = MemoryStore::new();

        let page = store.list(1, 12).await.unwrap();

        assert!(page.items.is_empty());
        assert_eq!(page.total_count, 0);
    }

    #[tokio::test]
    async fn test_list_past_the_end_is_empty() {
        let store = MemoryStore::new();
        store.create(&fields("Only", "d")).await.unwrap();

        let page = store.list(9, 12).await.unwrap();

        assert!(page.items.is_empty());
        assert_eq!(page.total_count, 1);
    }

    #[tokio::test]
    async fn test_list_rejects_page_zero() {
        let store = MemoryStore::new();

        assert!(store.list(0, 12).await.is_err());
        assert!(store.list(1, 0).await.is_err());
    }

    #[tokio::test]
    async fn test_update_overwrites_editable_fields_only() {
        let store = MemoryStore::new();
        let created = store.create(&fields("Original", "Before")).await.unwrap();

        let updated = store
            .update(created.id, &fields("Renamed", "After"))
            .await
            .expect("Update failed");

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.name, "Renamed");
        assert_eq!(updated.description, "After");
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let store = MemoryStore::new();

        let result = store.update(999, &fields("Ghost", "d")).await;

        assert_eq!(result, Err(StoreError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_removes_item() {
        let store = MemoryStore::new();
        let created = store.create(&fields("Doomed", "d")).await.unwrap();

        store.delete(created.id).await.expect("Delete failed");

        assert_eq!(store.get_by_id(created.id).await, Err(StoreError::NotFound));
        assert_eq!(store.list(1, 12).await.unwrap().total_count, 0);
    }
}
