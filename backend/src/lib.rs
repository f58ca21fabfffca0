//! Shopping List Backend
//!
//! Layered architecture:
//! - domain: Catalog, classification, suggestions and store-walk planning
//! - repository: The in-memory list store
//! - commands: Async handlers the UI shell calls, one per user event

use std::sync::Arc;
use tokio::sync::Mutex;

pub mod commands;
pub mod config;
pub mod domain;
pub mod repository;

pub use config::AppConfig;

use domain::{Catalog, DomainError, DomainResult, QuantityEditor};
use repository::ListStore;

/// Application state shared across commands.
///
/// Lock order when more than one guard is needed: `list`, then `selected_store`,
/// then `editor`.
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub list: Mutex<ListStore>,
    pub selected_store: Mutex<String>,
    pub editor: Mutex<QuantityEditor>,
}

impl AppState {
    /// State with an empty list and the catalog's first store selected
    pub fn new(catalog: Catalog) -> DomainResult<Self> {
        let store = catalog
            .default_store()
            .ok_or_else(|| DomainError::invalid_catalog("no stores defined"))?
            .to_string();
        Self::with_store(catalog, &store)
    }

    pub fn with_store(catalog: Catalog, store: &str) -> DomainResult<Self> {
        catalog.store(store)?;
        let catalog = Arc::new(catalog);

        Ok(Self {
            list: Mutex::new(ListStore::new(catalog.clone())),
            selected_store: Mutex::new(store.to_string()),
            editor: Mutex::new(QuantityEditor::new()),
            catalog,
        })
    }

    /// Startup: logging first, then catalog and default store
    pub fn init(config: &AppConfig) -> DomainResult<Self> {
        if let Some(dir) = &config.log_dir {
            rolling_logger::init_logger(dir.clone(), &config.app_name).map_err(DomainError::config)?;
        }

        let catalog = config.load_catalog()?;
        let state = match &config.default_store {
            Some(store) => Self::with_store(catalog, store)?,
            None => Self::new(catalog)?,
        };

        log::info!(
            "Catalog loaded: {} categories, {} stores, {} products",
            state.catalog.categories().len(),
            state.catalog.store_names().len(),
            state.catalog.sorted_products().len()
        );
        Ok(state)
    }
}
