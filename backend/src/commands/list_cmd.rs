//! Shopping List Commands
//!
//! Add, edit and remove entries. Quantities arrive as raw input text and
//! are validated here before the list is touched.

use crate::domain::{EntryId, Quantity, ShoppingEntry};
use crate::AppState;
use super::to_message;

fn parse_quantity(input: &str) -> Result<Quantity, String> {
    input.parse::<Quantity>().map_err(to_message)
}

/// Add a product. A blank product name is ignored and returns `None`.
pub async fn add_item(
    state: &AppState,
    product: String,
    quantity: String,
) -> Result<Option<ShoppingEntry>, String> {
    if product.trim().is_empty() {
        return Ok(None);
    }
    let quantity = parse_quantity(&quantity)?;

    let mut list = state.list.lock().await;
    let entry = list.add(&product, quantity);
    if let Some(entry) = &entry {
        log::info!("Added {} x{} to {}", entry.product, entry.quantity, entry.category);
    }
    Ok(entry)
}

/// Entries in insertion order
pub async fn list_items(state: &AppState) -> Result<Vec<ShoppingEntry>, String> {
    Ok(state.list.lock().await.entries().to_vec())
}

pub async fn update_quantity(
    state: &AppState,
    index: usize,
    quantity: String,
) -> Result<ShoppingEntry, String> {
    let quantity = parse_quantity(&quantity)?;
    let mut list = state.list.lock().await;
    list.update_quantity(index, quantity).cloned().map_err(to_message)
}

pub async fn remove_item(state: &AppState, index: usize) -> Result<ShoppingEntry, String> {
    let mut list = state.list.lock().await;
    let removed = list.remove(index).map_err(to_message)?;
    log::info!("Removed {} ({})", removed.product, removed.id);
    Ok(removed)
}

pub async fn update_quantity_by_id(
    state: &AppState,
    id: u32,
    quantity: String,
) -> Result<ShoppingEntry, String> {
    let quantity = parse_quantity(&quantity)?;
    let mut list = state.list.lock().await;
    list.update_quantity_by_id(EntryId(id), quantity)
        .cloned()
        .map_err(to_message)
}

pub async fn remove_item_by_id(state: &AppState, id: u32) -> Result<ShoppingEntry, String> {
    let mut list = state.list.lock().await;
    let removed = list.remove_by_id(EntryId(id)).map_err(to_message)?;
    log::info!("Removed {} ({})", removed.product, removed.id);
    Ok(removed)
}

pub async fn clear_items(state: &AppState) -> Result<(), String> {
    let mut list = state.list.lock().await;
    log::info!("Clearing {} entries", list.len());
    list.clear();
    Ok(())
}
