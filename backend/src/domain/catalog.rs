//! Catalog
//!
//! Static reference data: which products belong to which category, and
//! where each category sits in each store. Built once at startup and shared
//! read-only by the classifier, the suggestion engine and the planner.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap, HashSet};
use std::path::Path;

use super::collation;
use super::entity::{DomainError, DomainResult};

pub const DEFAULT_FALLBACK: &str = "Inne";

fn default_fallback() -> String {
    DEFAULT_FALLBACK.to_string()
}

/// A category and its known products, in declared order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDef {
    pub name: String,
    #[serde(default)]
    pub products: Vec<String>,
}

/// Placement label of every category in one store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreLayout {
    pub name: String,
    pub placements: HashMap<String, String>,
}

impl StoreLayout {
    pub fn placement(&self, category: &str) -> Option<&str> {
        self.placements.get(category).map(String::as_str)
    }
}

/// Serialized catalog form (JSON file or built-in table)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogData {
    #[serde(default = "default_fallback")]
    pub fallback: String,
    pub categories: Vec<CategoryDef>,
    pub stores: Vec<StoreLayout>,
}

/// Validated, immutable catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    fallback: String,
    categories: Vec<CategoryDef>,
    stores: Vec<StoreLayout>,
    sorted_products: Vec<String>,
}

impl Catalog {
    /// Validate catalog data and precompute the sorted product list
    pub fn new(data: CatalogData) -> DomainResult<Self> {
        validate(&data)?;
        Ok(Self::assemble(data))
    }

    pub fn from_json(json: &str) -> DomainResult<Self> {
        let data: CatalogData = serde_json::from_str(json)?;
        Self::new(data)
    }

    /// Load a catalog from a JSON file
    pub fn load(path: &Path) -> DomainResult<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| DomainError::config(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    /// The default grocery catalog with three store layouts
    pub fn builtin() -> Self {
        Self::assemble(builtin_data())
    }

    fn assemble(data: CatalogData) -> Self {
        let mut sorted_products: Vec<String> = data
            .categories
            .iter()
            .flat_map(|c| c.products.iter().cloned())
            .collect();
        sorted_products.sort_by(|a, b| collation::compare(a, b));
        sorted_products.dedup();

        Self {
            fallback: data.fallback,
            categories: data.categories,
            stores: data.stores,
            sorted_products,
        }
    }

    /// Category that unmatched products are routed to
    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    pub fn categories(&self) -> &[CategoryDef] {
        &self.categories
    }

    /// Store names in declared order
    pub fn store_names(&self) -> Vec<String> {
        self.stores.iter().map(|s| s.name.clone()).collect()
    }

    pub fn store(&self, store: &str) -> DomainResult<&StoreLayout> {
        self.stores
            .iter()
            .find(|s| s.name == store)
            .ok_or_else(|| DomainError::UnknownStore(store.to_string()))
    }

    /// First store in declared order
    pub fn default_store(&self) -> Option<&str> {
        self.stores.first().map(|s| s.name.as_str())
    }

    /// Every known product, flattened and sorted once at construction
    pub fn sorted_products(&self) -> &[String] {
        &self.sorted_products
    }

    pub fn to_data(&self) -> CatalogData {
        CatalogData {
            fallback: self.fallback.clone(),
            categories: self.categories.clone(),
            stores: self.stores.clone(),
        }
    }
}

fn validate(data: &CatalogData) -> DomainResult<()> {
    if data.fallback.trim().is_empty() {
        return Err(DomainError::invalid_catalog("fallback category name is empty"));
    }
    if data.stores.is_empty() {
        return Err(DomainError::invalid_catalog("no stores defined"));
    }

    let mut categories = BTreeSet::new();
    for category in &data.categories {
        if !categories.insert(category.name.as_str()) {
            return Err(DomainError::invalid_catalog(format!(
                "category {} declared twice",
                category.name
            )));
        }
    }
    categories.insert(data.fallback.as_str());

    let mut store_names = HashSet::new();
    for store in &data.stores {
        if !store_names.insert(store.name.as_str()) {
            return Err(DomainError::invalid_catalog(format!(
                "store {} declared twice",
                store.name
            )));
        }

        let placed: BTreeSet<&str> = store.placements.keys().map(String::as_str).collect();
        if let Some(missing) = categories.difference(&placed).next() {
            return Err(DomainError::invalid_catalog(format!(
                "store {} has no placement for category {}",
                store.name, missing
            )));
        }
        if let Some(extra) = placed.difference(&categories).next() {
            return Err(DomainError::invalid_catalog(format!(
                "store {} places unknown category {}",
                store.name, extra
            )));
        }
    }

    Ok(())
}

fn category(name: &str, products: &[&str]) -> CategoryDef {
    CategoryDef {
        name: name.to_string(),
        products: products.iter().map(|p| p.to_string()).collect(),
    }
}

fn layout(name: &str, placements: &[(&str, &str)]) -> StoreLayout {
    StoreLayout {
        name: name.to_string(),
        placements: placements
            .iter()
            .map(|(c, p)| (c.to_string(), p.to_string()))
            .collect(),
    }
}

fn builtin_data() -> CatalogData {
    CatalogData {
        fallback: default_fallback(),
        categories: vec![
            category("Owoce i Warzywa", &["Jabłka", "Banany", "Marchew", "Pomidory", "Sałata"]),
            category("Nabiał", &["Mleko", "Jajka", "Ser", "Jogurt", "Masło"]),
            category("Piekarnia", &["Chleb", "Bajgle", "Ciastka", "Ciasto", "Muffinki"]),
            category("Konserwy", &["Fasola", "Kukurydza", "Zupa", "Tuńczyk"]),
            category("Mrożonki", &["Pizza", "Lody", "Warzywa", "Kurczak", "Frytki"]),
            category(
                "Mięso",
                &["Pierś z Kurczaka", "Mięso Mielone", "Kotlety Schabowe", "Łosoś", "Stek"],
            ),
            category("Inne", &["Makaron", "Ryż", "Płatki Śniadaniowe", "Przekąski", "Sos"]),
        ],
        stores: vec![
            layout(
                "Sklep A",
                &[
                    ("Owoce i Warzywa", "Aleja 1"),
                    ("Nabiał", "Aleja 2"),
                    ("Piekarnia", "Aleja 3"),
                    ("Konserwy", "Aleja 4"),
                    ("Mrożonki", "Aleja 5"),
                    ("Mięso", "Aleja 6"),
                    ("Inne", "Aleja 7"),
                ],
            ),
            layout(
                "Sklep B",
                &[
                    ("Owoce i Warzywa", "Sekcja A"),
                    ("Inne", "Sekcja B"),
                    ("Piekarnia", "Sekcja C"),
                    ("Konserwy", "Sekcja D"),
                    ("Mrożonki", "Sekcja E"),
                    ("Mięso", "Sekcja F"),
                    ("Nabiał", "Sekcja G"),
                ],
            ),
            layout(
                "Sklep C",
                &[
                    ("Owoce i Warzywa", "Dział 1"),
                    ("Nabiał", "Dział 2"),
                    ("Piekarnia", "Dział 3"),
                    ("Konserwy", "Dział 4"),
                    ("Mrożonki", "Dział 5"),
                    ("Mięso", "Dział 6"),
                    ("Inne", "Dział 7"),
                ],
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        assert!(Catalog::new(builtin_data()).is_ok());
        let catalog = Catalog::builtin();
        assert_eq!(catalog.store_names(), vec!["Sklep A", "Sklep B", "Sklep C"]);
        assert_eq!(catalog.default_store(), Some("Sklep A"));
        assert_eq!(catalog.fallback(), "Inne");
        assert_eq!(catalog.sorted_products().len(), 34);
    }

    #[test]
    fn test_sorted_products_order() {
        let catalog = Catalog::builtin();
        let products = catalog.sorted_products();
        assert_eq!(products.first().map(String::as_str), Some("Bajgle"));
        assert_eq!(products.last().map(String::as_str), Some("Zupa"));
        let lody = products.iter().position(|p| p == "Lody").unwrap();
        let losos = products.iter().position(|p| p == "Łosoś").unwrap();
        let makaron = products.iter().position(|p| p == "Makaron").unwrap();
        assert!(lody < losos && losos < makaron);
    }

    #[test]
    fn test_unknown_store() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.store("Sklep Z").unwrap_err(),
            DomainError::UnknownStore("Sklep Z".to_string())
        );
        assert_eq!(catalog.store("Sklep B").unwrap().placement("Inne"), Some("Sekcja B"));
    }

    #[test]
    fn test_missing_fallback_placement_rejected() {
        let data = CatalogData {
            fallback: "Other".to_string(),
            categories: vec![category("Dairy", &["Milk"])],
            stores: vec![layout("Store A", &[("Dairy", "Aisle 2")])],
        };
        let err = Catalog::new(data).unwrap_err();
        assert!(matches!(err, DomainError::InvalidCatalog(ref msg) if msg.contains("Other")));
    }

    #[test]
    fn test_unplaced_or_unknown_category_rejected() {
        let missing = CatalogData {
            fallback: "Other".to_string(),
            categories: vec![category("Dairy", &["Milk"]), category("Produce", &["Apples"])],
            stores: vec![layout("Store A", &[("Dairy", "Aisle 2"), ("Other", "Aisle 9")])],
        };
        assert!(Catalog::new(missing).is_err());

        let extra = CatalogData {
            fallback: "Other".to_string(),
            categories: vec![category("Dairy", &["Milk"])],
            stores: vec![layout(
                "Store A",
                &[("Dairy", "Aisle 2"), ("Other", "Aisle 9"), ("Toys", "Aisle 3")],
            )],
        };
        assert!(Catalog::new(extra).is_err());
    }

    #[test]
    fn test_no_stores_rejected() {
        let data = CatalogData {
            fallback: "Other".to_string(),
            categories: vec![],
            stores: vec![],
        };
        assert!(Catalog::new(data).is_err());
    }

    #[test]
    fn test_from_json_defaults_fallback() {
        let json = r#"{
            "categories": [{ "name": "Nabiał", "products": ["Mleko"] }],
            "stores": [{ "name": "Sklep A", "placements": { "Nabiał": "Aleja 2", "Inne": "Aleja 7" } }]
        }"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.fallback(), "Inne");
        assert_eq!(catalog.sorted_products(), ["Mleko".to_string()]);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, serde_json::to_string(&builtin_data()).unwrap()).unwrap();

        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.to_data(), builtin_data());

        let missing = Catalog::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(missing, DomainError::Config(_)));
    }
}
