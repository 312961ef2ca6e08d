//! Item List View-Model
//!
//! Pagination state machine for the `/items` listing.

use std::rc::Rc;

use crate::domain::Item;
use crate::store::ItemStore;

/// Items shown per listing page
pub const PAGE_SIZE: u32 = 12;

/// Listing state
#[derive(Debug, Clone, PartialEq)]
pub enum ListState {
    /// Nothing requested yet
    Idle,
    /// A page request is in flight
    Loading { page: u32 },
    /// A page is on screen; an empty store shows as zero pages, not a
    /// failure
    Loaded {
        items: Vec<Item>,
        page: u32,
        total_pages: u32,
    },
    /// The request failed; no automatic retry
    Failed { page: u32, message: String },
}

impl ListState {
    /// Page this state refers to, if any
    pub fn page(&self) -> Option<u32> {
        match self {
            ListState::Idle => None,
            ListState::Loading { page }
            | ListState::Loaded { page, .. }
            | ListState::Failed { page, .. } => Some(*page),
        }
    }
}

/// Number of pages needed for `total_count` items
pub fn total_pages(total_count: u64) -> u32 {
    total_count.div_ceil(PAGE_SIZE as u64) as u32
}

/// Drives the listing against an injected store
#[derive(Clone)]
pub struct ListModel {
    store: Rc<dyn ItemStore>,
}

impl ListModel {
    pub fn new(store: Rc<dyn ItemStore>) -> Self {
        Self { store }
    }

    /// Fetch one page; resolves a `Loading` state into `Loaded` or `Failed`
    pub async fn load(&self, page: u32) -> ListState {
        let page = page.max(1);
        match self.store.list(page, PAGE_SIZE).await {
            Ok(fetched) => ListState::Loaded {
                total_pages: total_pages(fetched.total_count),
                items: fetched.items,
                page,
            },
            Err(err) => ListState::Failed {
                page,
                message: err.to_string(),
            },
        }
    }

    /// Validate a page-change request
    ///
    /// Accepted only from `Loaded` and only for pages that exist; anything
    /// else is a no-op, including requests while a load is in flight.
    pub fn page_change(state: &ListState, target: u32) -> Option<u32> {
        match state {
            ListState::Loaded { total_pages, .. }
                if target >= 1 && target <= *total_pages =>
            {
                Some(target)
            }
            _ => None,
        }
    }

    /// Apply a finished load only if it answers the request still in flight
    ///
    /// A response for a page the user has already navigated away from is
    /// dropped instead of applied.
    pub fn apply(state: &ListState, result: ListState) -> Option<ListState> {
        match (state, result.page()) {
            (ListState::Loading { page }, Some(result_page)) if *page == result_page => {
                Some(result)
            }
            _ => None,
        }
    }
}
