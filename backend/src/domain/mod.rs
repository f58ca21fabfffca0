//! Domain Layer
//!
//! Entities and the pure rules that classify, suggest and order them.
//! Nothing here performs I/O or logging.

mod catalog;
mod classifier;
pub mod collation;
mod editor;
mod entity;
mod entry;
mod plan;
mod suggestion;

pub use catalog::{Catalog, CatalogData, CategoryDef, StoreLayout, DEFAULT_FALLBACK};
pub use classifier::classify;
pub use editor::QuantityEditor;
pub use entity::{DomainError, DomainResult, Entity};
pub use entry::{EntryId, Quantity, ShoppingEntry};
pub use plan::{plan, PlanGroup, StorePlan};
pub use suggestion::{suggest, suggest_all, suggest_grouped, SuggestionGroup};
