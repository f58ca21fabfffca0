//! Store Plan
//!
//! Groups shopping entries by category and orders the groups the way a
//! given store is laid out, so the list can be walked aisle by aisle.

use serde::{Deserialize, Serialize};

use super::catalog::Catalog;
use super::collation::{self, CollationKey};
use super::entity::{DomainError, DomainResult};
use super::entry::ShoppingEntry;

/// One category section of the plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanGroup {
    pub category: String,
    /// Aisle or section label in the selected store
    pub placement: String,
    pub items: Vec<ShoppingEntry>,
}

/// Entries grouped and ordered for one store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorePlan {
    pub store: String,
    pub groups: Vec<PlanGroup>,
}

impl StorePlan {
    /// Total number of entries across all groups
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Build the walk plan for `store`.
///
/// Categories are ordered by placement label, entries within a category by
/// product name. Categories without entries do not appear.
pub fn plan(entries: &[ShoppingEntry], catalog: &Catalog, store: &str) -> DomainResult<StorePlan> {
    let layout = catalog.store(store)?;

    // Group in first-seen order so equal names keep insertion order
    let mut groups: Vec<PlanGroup> = Vec::new();
    for entry in entries {
        match groups.iter_mut().find(|g| g.category == entry.category) {
            Some(group) => group.items.push(entry.clone()),
            None => {
                let placement = layout.placement(&entry.category).ok_or_else(|| {
                    DomainError::invalid_catalog(format!(
                        "store {} has no placement for category {}",
                        store, entry.category
                    ))
                })?;
                groups.push(PlanGroup {
                    category: entry.category.clone(),
                    placement: placement.to_string(),
                    items: vec![entry.clone()],
                });
            }
        }
    }

    groups.sort_by_cached_key(|g| (CollationKey::new(&g.placement), CollationKey::new(&g.category)));
    for group in &mut groups {
        group.items.sort_by(|a, b| collation::compare(&a.product, &b.product));
    }

    Ok(StorePlan {
        store: store.to_string(),
        groups,
    })
}
