//! Shopping Entry Entity
//!
//! A product the user wants to buy, its quantity and the category the
//! classifier assigned when it was added.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::entity::{DomainError, Entity};

/// Stable identifier assigned by the list store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub u32);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Non-negative item count
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(u32);

impl Quantity {
    /// Validate a raw quantity, rejecting negatives and values above `u32::MAX`
    pub fn new(value: i64) -> Result<Self, DomainError> {
        u32::try_from(value)
            .map(Quantity)
            .map_err(|_| DomainError::InvalidQuantity(value.to_string()))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for Quantity {
    fn from(value: u32) -> Self {
        Quantity(value)
    }
}

impl FromStr for Quantity {
    type Err = DomainError;

    /// Parse user input such as "3" or " 12 ". Empty or non-numeric text is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: i64 = trimmed
            .parse()
            .map_err(|_| DomainError::InvalidQuantity(trimmed.to_string()))?;
        Quantity::new(value)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single line on the shopping list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingEntry {
    /// Unique identifier
    pub id: EntryId,
    /// Product name as typed or picked from suggestions
    pub product: String,
    pub quantity: Quantity,
    /// Category derived from the catalog at insertion time
    pub category: String,
    /// Creation time (unix millis)
    pub added_at: i64,
}

impl ShoppingEntry {
    pub fn new(id: EntryId, product: String, quantity: Quantity, category: String) -> Self {
        Self {
            id,
            product,
            quantity,
            category,
            added_at: chrono::Utc::now().timestamp_millis(),
        }
    }

    /// True when product, quantity and category all match
    pub fn matches(&self, product: &str, quantity: Quantity, category: &str) -> bool {
        self.product == product && self.quantity == quantity && self.category == category
    }
}

impl Entity for ShoppingEntry {
    type Id = EntryId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
