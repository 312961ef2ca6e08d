//! Store Layer
//!
//! Abstract client for the hosted `items` table plus its implementations.
//! The store is an external collaborator: these types are the whole surface
//! the rest of the app may touch.

mod memory;
mod rest;

#[cfg(test)]
mod tests;

pub use memory::MemoryStore;
pub use rest::{RestStore, StoreConfig};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{Item, ValidFields};

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures reported by the remote store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StoreError {
    /// The requested id does not exist
    NotFound,
    /// The store could not be reached
    Unavailable(String),
    /// The store rejected the request
    Rejected(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::NotFound => write!(f, "item not found"),
            StoreError::Unavailable(msg) => write!(f, "store unreachable: {}", msg),
            StoreError::Rejected(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

/// One page of the listing
#[derive(Debug, Clone, PartialEq)]
pub struct ItemPage {
    /// Items on this page, newest first
    pub items: Vec<Item>,
    /// Total number of items across all pages
    pub total_count: u64,
}

/// Client for the hosted `items` table
///
/// All operations are async; implementations can be REST, in-memory, etc.
/// Futures are not `Send` because the primary target is single-threaded
/// wasm.
#[async_trait(?Send)]
pub trait ItemStore {
    /// Fetch one page, ordered by creation time descending
    async fn list(&self, page: u32, page_size: u32) -> StoreResult<ItemPage>;

    /// Fetch a single item by id
    async fn get_by_id(&self, id: i64) -> StoreResult<Item>;

    /// Insert a new item; the store assigns id and creation time
    async fn create(&self, fields: &ValidFields) -> StoreResult<Item>;

    /// Overwrite an item's editable fields, returning the fresh record
    async fn update(&self, id: i64, fields: &ValidFields) -> StoreResult<Item>;

    /// Delete an item by id
    async fn delete(&self, id: i64) -> StoreResult<()>;
}
