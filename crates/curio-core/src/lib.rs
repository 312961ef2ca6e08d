//! Curio Core
//!
//! Layered architecture:
//! - domain: the Item entity, drafts, and validation rules
//! - store: abstract client for the hosted `items` table plus implementations
//! - viewmodel: the state machines behind each page
//!
//! Framework-free; compiles for wasm32 and the native host. All tests run
//! natively.

pub mod domain;
pub mod store;
pub mod viewmodel;
