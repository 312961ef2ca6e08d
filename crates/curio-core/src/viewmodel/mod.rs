//! View-Model Layer
//!
//! UI-framework-free state machines behind each page. Pure guard functions
//! validate transitions and return `None` for events that are not legal in
//! the current state (which is also how a second request is rejected while
//! one is in flight); async steps run the store call and return the
//! resulting state.

mod create;
mod detail;
mod list;


pub use create::{CreateModel, CreateState};
pub use detail::{DetailModel, DetailState};
pub use list::{total_pages, ListModel, ListState, PAGE_SIZE};
