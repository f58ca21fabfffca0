//! Suggestion Engine
//!
//! Prefix autocomplete over the catalog's sorted product list.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::catalog::Catalog;

/// Suggestions for one category, as shown in the dropdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionGroup {
    pub category: String,
    pub products: Vec<String>,
}

/// Products whose name starts with `prefix`, ignoring case, in sorted order.
/// An empty prefix returns every product.
pub fn suggest(catalog: &Catalog, prefix: &str) -> Vec<String> {
    let needle = prefix.to_lowercase();
    catalog
        .sorted_products()
        .iter()
        .filter(|p| p.to_lowercase().starts_with(&needle))
        .cloned()
        .collect()
}

/// The full sorted product list ("show all" on focus)
pub fn suggest_all(catalog: &Catalog) -> Vec<String> {
    catalog.sorted_products().to_vec()
}

/// Matches for `prefix` split by category in catalog order. Categories
/// without a match are left out.
pub fn suggest_grouped(catalog: &Catalog, prefix: &str) -> Vec<SuggestionGroup> {
    let matches = suggest(catalog, prefix);
    let rank: HashMap<&str, usize> = matches
        .iter()
        .enumerate()
        .map(|(i, m)| (m.as_str(), i))
        .collect();

    catalog
        .categories()
        .iter()
        .filter_map(|category| {
            let mut ranked: Vec<usize> = category
                .products
                .iter()
                .filter_map(|p| rank.get(p.as_str()).copied())
                .collect();
            if ranked.is_empty() {
                return None;
            }
            ranked.sort_unstable();
            ranked.dedup();
            Some(SuggestionGroup {
                category: category.name.clone(),
                products: ranked.into_iter().map(|i| matches[i].clone()).collect(),
            })
        })
        .collect()
}
