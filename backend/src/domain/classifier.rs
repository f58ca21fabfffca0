//! Product Classifier
//!
//! Assigns a category to a free-text product name by exact catalog lookup.

use super::catalog::Catalog;

/// Return the category of `product`, or the fallback category when no
/// category lists it. Matching is case-sensitive; the first category in
/// catalog order wins when a product is listed more than once.
pub fn classify<'a>(catalog: &'a Catalog, product: &str) -> &'a str {
    catalog
        .categories()
        .iter()
        .find(|c| c.products.iter().any(|p| p == product))
        .map(|c| c.name.as_str())
        .unwrap_or_else(|| catalog.fallback())
}
