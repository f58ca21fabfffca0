//! Commands Layer
//!
//! Async handlers that bridge the UI shell to the core. Each maps one user
//! event onto a core operation and turns domain errors into display strings.

mod catalog_cmd;
mod editor_cmd;
mod list_cmd;

pub use catalog_cmd::*;
pub use editor_cmd::*;
pub use list_cmd::*;

use crate::domain::DomainError;

/// Log a rejected command and convert the error for display
pub(crate) fn to_message(err: DomainError) -> String {
    log::warn!("Command rejected: {}", err);
    err.to_string()
}
