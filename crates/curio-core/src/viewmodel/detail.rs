//! Item Detail View-Model
//!
//! State machine for the detail page: read view, edit mode with a working
//! draft, and two-step delete.

use std::rc::Rc;

use crate::domain::{validate, Draft, FieldErrors, Item};
use crate::store::{ItemStore, StoreError};

/// Detail page state
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    /// Initial fetch in flight
    Loading,
    /// Item on screen; `error` carries the most recent failed action
    Viewing { item: Item, error: Option<String> },
    /// The store has no such id
    NotFound,
    /// Initial fetch failed for some other reason
    LoadFailed { message: String },
    /// Edit mode with the working draft
    Editing {
        item: Item,
        draft: Draft,
        errors: FieldErrors,
        store_error: Option<String>,
    },
    /// Update request in flight
    Saving { item: Item, draft: Draft },
    /// Waiting for the user to confirm deletion
    ConfirmingDelete { item: Item },
    /// Delete request in flight
    Deleting { item: Item },
    /// The item is gone; callers should navigate away
    Deleted,
}

/// Drives the detail page against an injected store
#[derive(Clone)]
pub struct DetailModel {
    store: Rc<dyn ItemStore>,
}

impl DetailModel {
    pub fn new(store: Rc<dyn ItemStore>) -> Self {
        Self { store }
    }

    /// Initial fetch for the routed id
    pub async fn load(&self, id: i64) -> DetailState {
        match self.store.get_by_id(id).await {
            Ok(item) => DetailState::Viewing { item, error: None },
            Err(StoreError::NotFound) => DetailState::NotFound,
            Err(err) => DetailState::LoadFailed {
                message: err.to_string(),
            },
        }
    }

    /// Enter edit mode, seeding the draft from the current item
    pub fn begin_edit(state: &DetailState) -> Option<DetailState> {
        match state {
            DetailState::Viewing { item, .. } => Some(DetailState::Editing {
                draft: Draft::from_item(item),
                item: item.clone(),
                errors: FieldErrors::default(),
                store_error: None,
            }),
            _ => None,
        }
    }

    /// Leave edit mode, discarding the draft; no store call involved
    pub fn cancel_edit(state: &DetailState) -> Option<DetailState> {
        match state {
            DetailState::Editing { item, .. } => Some(DetailState::Viewing {
                item: item.clone(),
                error: None,
            }),
            _ => None,
        }
    }

    /// Update the draft's name while editing
    pub fn edit_name(state: &mut DetailState, value: String) {
        if let DetailState::Editing { draft, .. } = state {
            draft.name = value;
        }
    }

    /// Update the draft's description while editing
    pub fn edit_description(state: &mut DetailState, value: String) {
        if let DetailState::Editing { draft, .. } = state {
            draft.description = value;
        }
    }

    /// Validate the draft and, if it passes, move to `Saving`
    ///
    /// On validation failure the state stays `Editing` with the field
    /// errors set and no store call is made.
    pub fn begin_save(state: &DetailState) -> Option<DetailState> {
        match state {
            DetailState::Editing { item, draft, .. } => Some(match validate(draft) {
                Ok(_) => DetailState::Saving {
                    item: item.clone(),
                    draft: draft.clone(),
                },
                Err(errors) => DetailState::Editing {
                    item: item.clone(),
                    draft: draft.clone(),
                    errors,
                    store_error: None,
                },
            }),
            _ => None,
        }
    }

    /// Push the draft to the store; call from `Saving`
    ///
    /// On success the returned record replaces the held item. On store
    /// failure the draft is kept so nothing the user typed is lost.
    pub async fn save(&self, item: Item, draft: Draft) -> DetailState {
        let fields = match validate(&draft) {
            Ok(fields) => fields,
            Err(errors) => {
                return DetailState::Editing {
                    item,
                    draft,
                    errors,
                    store_error: None,
                }
            }
        };
        match self.store.update(item.id, &fields).await {
            Ok(fresh) => DetailState::Viewing {
                item: fresh,
                error: None,
            },
            Err(err) => DetailState::Editing {
                item,
                draft,
                errors: FieldErrors::default(),
                store_error: Some(err.to_string()),
            },
        }
    }

    /// Ask for delete confirmation
    pub fn request_delete(state: &DetailState) -> Option<DetailState> {
        match state {
            DetailState::Viewing { item, .. } => Some(DetailState::ConfirmingDelete {
                item: item.clone(),
            }),
            _ => None,
        }
    }

    /// Back out of the confirmation step
    pub fn cancel_delete(state: &DetailState) -> Option<DetailState> {
        match state {
            DetailState::ConfirmingDelete { item } => Some(DetailState::Viewing {
                item: item.clone(),
                error: None,
            }),
            _ => None,
        }
    }

    /// Confirmation given; move to `Deleting`
    pub fn begin_delete(state: &DetailState) -> Option<DetailState> {
        match state {
            DetailState::ConfirmingDelete { item } => Some(DetailState::Deleting {
                item: item.clone(),
            }),
            _ => None,
        }
    }

    /// Delete the item; call from `Deleting`
    ///
    /// On failure the item stays on screen with the error shown.
    pub async fn delete(&self, item: Item) -> DetailState {
        match self.store.delete(item.id).await {
            Ok(()) => DetailState::Deleted,
            Err(err) => DetailState::Viewing {
                item,
                error: Some(err.to_string()),
            },
        }
    }
}
