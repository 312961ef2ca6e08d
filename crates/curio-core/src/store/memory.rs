//! In-Memory Store
//!
//! Backend used by tests and local demos. Mirrors the hosted table's
//! behavior: assigns ids and creation times, lists newest first.

use std::cell::RefCell;

use async_trait::async_trait;
use chrono::Utc;

use super::{ItemPage, ItemStore, StoreError, StoreResult};
use crate::domain::{Item, ValidFields};

/// In-memory `items` table
#[derive(Default)]
pub struct MemoryStore {
    inner: RefCell<Inner>,
}

#[derive(Default)]
struct Inner {
    items: Vec<Item>,
    next_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait(?Send)]
impl ItemStore for MemoryStore {
    async fn list(&self, page: u32, page_size: u32) -> StoreResult<ItemPage> {
        if page < 1 || page_size < 1 {
            return Err(StoreError::Rejected(format!(
                "invalid range: page {} with page size {}",
                page, page_size
            )));
        }
        let inner = self.inner.borrow();
        let mut ordered = inner.items.clone();
        // Newest first; ids break ties within one timestamp
        ordered.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        let start = (page as usize - 1) * page_size as usize;
        let items = ordered
            .into_iter()
            .skip(start)
            .take(page_size as usize)
            .collect();
        Ok(ItemPage {
            items,
            total_count: inner.items.len() as u64,
        })
    }

    async fn get_by_id(&self, id: i64) -> StoreResult<Item> {
        self.inner
            .borrow()
            .items
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn create(&self, fields: &ValidFields) -> StoreResult<Item> {
        let mut inner = self.inner.borrow_mut();
        inner.next_id += 1;
        let item = Item {
            id: inner.next_id,
            created_at: Utc::now(),
            name: fields.name().to_string(),
            description: fields.description().to_string(),
            owner_id: None,
        };
        inner.items.push(item.clone());
        Ok(item)
    }

    async fn update(&self, id: i64, fields: &ValidFields) -> StoreResult<Item> {
        let mut inner = self.inner.borrow_mut();
        let item = inner
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(StoreError::NotFound)?;
        item.name = fields.name().to_string();
        item.description = fields.description().to_string();
        Ok(item.clone())
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        self.inner.borrow_mut().items.retain(|item| item.id != id);
        Ok(())
    }
}
