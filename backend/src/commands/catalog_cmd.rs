//! Catalog and Store Commands
//!
//! Store selection, autocomplete and the store-walk plan.

use crate::domain::{self, StorePlan, SuggestionGroup};
use crate::AppState;
use super::to_message;

/// Store names for the store picker
pub async fn list_stores(state: &AppState) -> Result<Vec<String>, String> {
    Ok(state.catalog.store_names())
}

pub async fn selected_store(state: &AppState) -> Result<String, String> {
    Ok(state.selected_store.lock().await.clone())
}

/// Switch the store the plan is ordered for
pub async fn select_store(state: &AppState, name: String) -> Result<String, String> {
    state.catalog.store(&name).map_err(to_message)?;

    let mut selected = state.selected_store.lock().await;
    log::info!("Store changed: {} -> {}", *selected, name);
    *selected = name;
    Ok(selected.clone())
}

/// Products starting with `prefix` (any case)
pub async fn suggest(state: &AppState, prefix: String) -> Result<Vec<String>, String> {
    Ok(domain::suggest(&state.catalog, &prefix))
}

/// Every product, for when the input is focused with no text
pub async fn suggest_all(state: &AppState) -> Result<Vec<String>, String> {
    Ok(domain::suggest_all(&state.catalog))
}

/// Suggestions split by category for the dropdown
pub async fn suggest_grouped(state: &AppState, prefix: String) -> Result<Vec<SuggestionGroup>, String> {
    Ok(domain::suggest_grouped(&state.catalog, &prefix))
}

pub async fn classify(state: &AppState, product: String) -> Result<String, String> {
    Ok(domain::classify(&state.catalog, &product).to_string())
}

/// Grouped, aisle-ordered plan for `store`, or for the selected store
pub async fn get_plan(state: &AppState, store: Option<String>) -> Result<StorePlan, String> {
    let list = state.list.lock().await;
    let store = match store {
        Some(store) => store,
        None => state.selected_store.lock().await.clone(),
    };

    let plan = domain::plan(list.entries(), &state.catalog, &store).map_err(to_message)?;
    log::debug!("Plan for {}: {} groups, {} entries", store, plan.groups.len(), plan.len());
    Ok(plan)
}
