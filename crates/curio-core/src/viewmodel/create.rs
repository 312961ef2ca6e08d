//! Item Create View-Model
//!
//! Validate-then-submit state machine for the create form.

use std::rc::Rc;

use crate::domain::{validate, Draft, FieldErrors, Item};
use crate::store::ItemStore;

/// Create form state
#[derive(Debug, Clone, PartialEq)]
pub enum CreateState {
    /// Form open; errors are from the last attempt, if any
    Drafting {
        draft: Draft,
        errors: FieldErrors,
        store_error: Option<String>,
    },
    /// Create request in flight
    Submitting { draft: Draft },
    /// The store accepted the item; callers should navigate to the listing
    Created { item: Item },
}

impl CreateState {
    /// Fresh, empty form
    pub fn new() -> Self {
        CreateState::Drafting {
            draft: Draft::default(),
            errors: FieldErrors::default(),
            store_error: None,
        }
    }
}

impl Default for CreateState {
    fn default() -> Self {
        Self::new()
    }
}

/// Drives the create form against an injected store
#[derive(Clone)]
pub struct CreateModel {
    store: Rc<dyn ItemStore>,
}

impl CreateModel {
    pub fn new(store: Rc<dyn ItemStore>) -> Self {
        Self { store }
    }

    /// Update the draft's name
    pub fn edit_name(state: &mut CreateState, value: String) {
        if let CreateState::Drafting { draft, .. } = state {
            draft.name = value;
        }
    }

    /// Update the draft's description
    pub fn edit_description(state: &mut CreateState, value: String) {
        if let CreateState::Drafting { draft, .. } = state {
            draft.description = value;
        }
    }

    /// Validate the draft and, if it passes, move to `Submitting`
    ///
    /// Invalid input stays `Drafting` with field errors and never reaches
    /// the store. Returns `None` while a submission is already in flight.
    pub fn begin_submit(state: &CreateState) -> Option<CreateState> {
        match state {
            CreateState::Drafting { draft, .. } => Some(match validate(draft) {
                Ok(_) => CreateState::Submitting {
                    draft: draft.clone(),
                },
                Err(errors) => CreateState::Drafting {
                    draft: draft.clone(),
                    errors,
                    store_error: None,
                },
            }),
            _ => None,
        }
    }

    /// Push the draft to the store; call from `Submitting`
    ///
    /// On store failure the draft is kept intact for resubmission.
    pub async fn submit(&self, draft: Draft) -> CreateState {
        let fields = match validate(&draft) {
            Ok(fields) => fields,
            Err(errors) => {
                return CreateState::Drafting {
                    draft,
                    errors,
                    store_error: None,
                }
            }
        };
        match self.store.create(&fields).await {
            Ok(item) => CreateState::Created { item },
            Err(err) => CreateState::Drafting {
                draft,
                errors: FieldErrors::default(),
                store_error: Some(err.to_string()),
            },
        }
    }
}
