//! Repository Layer - Core Traits
//!
//! Defines the abstract interface for data access.
//! The shopping list keeps its entries in memory; a persistent backend
//! would implement the same trait.

use crate::domain::{DomainResult, Entity};

/// Core repository trait for CRUD operations
///
/// Generic over any Entity type. Operations are synchronous and run to
/// completion.
pub trait Repository<T: Entity> {
    /// Store a new entity and return it with its assigned ID
    fn create(&mut self, entity: &T) -> DomainResult<T>;

    /// Find entity by ID
    fn find_by_id(&self, id: T::Id) -> DomainResult<Option<T>>;

    /// List all entities
    fn list(&self) -> DomainResult<Vec<T>>;

    /// Update an existing entity
    fn update(&mut self, entity: &T) -> DomainResult<T>;

    /// Delete entity by ID
    fn delete(&mut self, id: T::Id) -> DomainResult<()>;
}
