//! Quantity Editor
//!
//! The edit dialog as a two-state machine. Closed is both the initial and
//! the terminal state of every interaction.

use serde::{Deserialize, Serialize};

use super::entity::{DomainError, DomainResult};
use super::entry::{EntryId, Quantity, ShoppingEntry};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum QuantityEditor {
    #[default]
    Closed,
    Editing {
        id: EntryId,
        product: String,
        /// Raw text from the quantity input, validated only on save
        pending: String,
    },
}

impl QuantityEditor {
    pub fn new() -> Self {
        Self::Closed
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Editing { .. })
    }

    /// Start editing `entry`, replacing any session already open
    pub fn open(&mut self, entry: &ShoppingEntry) {
        *self = Self::Editing {
            id: entry.id,
            product: entry.product.clone(),
            pending: entry.quantity.to_string(),
        };
    }

    pub fn set_pending(&mut self, text: impl Into<String>) -> DomainResult<()> {
        match self {
            Self::Editing { pending, .. } => {
                *pending = text.into();
                Ok(())
            }
            Self::Closed => Err(DomainError::EditorClosed),
        }
    }

    /// Validate the pending quantity and hand it to `apply`.
    ///
    /// An invalid quantity leaves the editor open with its text intact.
    /// Once `apply` has been called the editor is closed, whatever it returns.
    pub fn save<F>(&mut self, apply: F) -> DomainResult<Quantity>
    where
        F: FnOnce(EntryId, Quantity) -> DomainResult<()>,
    {
        let (id, quantity) = match self {
            Self::Editing { id, pending, .. } => (*id, pending.parse::<Quantity>()?),
            Self::Closed => return Err(DomainError::EditorClosed),
        };

        *self = Self::Closed;
        apply(id, quantity)?;
        Ok(quantity)
    }

    /// Discard the pending quantity
    pub fn cancel(&mut self) {
        *self = Self::Closed;
    }
}
