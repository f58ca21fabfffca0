//! Quantity Editor Commands
//!
//! Open, edit, save or cancel the quantity dialog for one entry.

use crate::domain::{DomainError, EntryId, QuantityEditor, ShoppingEntry};
use crate::AppState;
use super::to_message;

/// Open the editor for the entry with `id`
pub async fn open_editor(state: &AppState, id: u32) -> Result<QuantityEditor, String> {
    let list = state.list.lock().await;
    let entry = list
        .position_of(EntryId(id))
        .and_then(|index| list.get(index))
        .ok_or_else(|| to_message(DomainError::NotFound(format!("entry {}", EntryId(id)))))?;

    let mut editor = state.editor.lock().await;
    editor.open(entry);
    Ok(editor.clone())
}

pub async fn set_editor_quantity(state: &AppState, text: String) -> Result<QuantityEditor, String> {
    let mut editor = state.editor.lock().await;
    editor.set_pending(text).map_err(to_message)?;
    Ok(editor.clone())
}

/// Commit the pending quantity. An invalid quantity keeps the dialog open.
pub async fn save_editor(state: &AppState) -> Result<ShoppingEntry, String> {
    let mut list = state.list.lock().await;
    let mut editor = state.editor.lock().await;

    let mut saved = None;
    editor
        .save(|id, quantity| {
            saved = Some(list.update_quantity_by_id(id, quantity)?.clone());
            Ok(())
        })
        .map_err(to_message)?;

    saved.ok_or_else(|| to_message(DomainError::EditorClosed))
}

pub async fn cancel_editor(state: &AppState) -> Result<(), String> {
    state.editor.lock().await.cancel();
    Ok(())
}

pub async fn editor_state(state: &AppState) -> Result<QuantityEditor, String> {
    Ok(state.editor.lock().await.clone())
}
