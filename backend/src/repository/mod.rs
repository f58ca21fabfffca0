//! Repository Layer
//!
//! Data access abstractions and the in-memory list store.

mod list_store;
mod traits;


pub use list_store::ListStore;
pub use traits::Repository;
