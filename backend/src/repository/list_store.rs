//! List Store
//!
//! In-memory collection of shopping entries. Every entry is classified on
//! insertion, so the planner never sees an entry without a category.

use std::sync::Arc;

use crate::domain::{
    classify, Catalog, DomainError, DomainResult, EntryId, Quantity, ShoppingEntry,
};
use super::traits::Repository;

pub struct ListStore {
    catalog: Arc<Catalog>,
    entries: Vec<ShoppingEntry>,
    next_id: u32,
}

impl ListStore {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            entries: Vec::new(),
            next_id: 1,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn allocate_id(&mut self) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        id
    }

    fn check_index(&self, index: usize) -> DomainResult<()> {
        if index < self.entries.len() {
            Ok(())
        } else {
            Err(DomainError::OutOfRange {
                index,
                len: self.entries.len(),
            })
        }
    }

    /// Append `product` with its catalog category.
    ///
    /// A blank product name is ignored and yields `None`.
    pub fn add(&mut self, product: &str, quantity: Quantity) -> Option<ShoppingEntry> {
        if product.trim().is_empty() {
            return None;
        }

        let category = classify(&self.catalog, product).to_string();
        let id = self.allocate_id();
        let entry = ShoppingEntry::new(id, product.to_string(), quantity, category);
        self.entries.push(entry.clone());
        Some(entry)
    }

    pub fn update_quantity(&mut self, index: usize, quantity: Quantity) -> DomainResult<&ShoppingEntry> {
        self.check_index(index)?;
        let entry = &mut self.entries[index];
        entry.quantity = quantity;
        Ok(entry)
    }

    /// Remove the entry at `index`; later entries shift down by one
    pub fn remove(&mut self, index: usize) -> DomainResult<ShoppingEntry> {
        self.check_index(index)?;
        Ok(self.entries.remove(index))
    }

    pub fn update_quantity_by_id(&mut self, id: EntryId, quantity: Quantity) -> DomainResult<&ShoppingEntry> {
        let index = self.require_position(id)?;
        self.update_quantity(index, quantity)
    }

    pub fn remove_by_id(&mut self, id: EntryId) -> DomainResult<ShoppingEntry> {
        let index = self.require_position(id)?;
        self.remove(index)
    }

    /// Current position of the entry with `id`
    pub fn position_of(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    fn require_position(&self, id: EntryId) -> DomainResult<usize> {
        self.position_of(id)
            .ok_or_else(|| DomainError::NotFound(format!("entry {}", id)))
    }

    /// First position holding exactly this product, quantity and category
    pub fn locate(&self, product: &str, quantity: Quantity, category: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.matches(product, quantity, category))
    }

    pub fn get(&self, index: usize) -> Option<&ShoppingEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[ShoppingEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry. IDs keep counting up.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Repository<ShoppingEntry> for ListStore {
    /// Only the product and quantity of `entity` are used; the store assigns
    /// the ID and category. A blank product is rejected here.
    fn create(&mut self, entity: &ShoppingEntry) -> DomainResult<ShoppingEntry> {
        self.add(&entity.product, entity.quantity)
            .ok_or_else(|| DomainError::InvalidInput("blank product name".to_string()))
    }

    fn find_by_id(&self, id: EntryId) -> DomainResult<Option<ShoppingEntry>> {
        Ok(self.entries.iter().find(|e| e.id == id).cloned())
    }

    fn list(&self) -> DomainResult<Vec<ShoppingEntry>> {
        Ok(self.entries.clone())
    }

    /// Only the quantity can change after creation
    fn update(&mut self, entity: &ShoppingEntry) -> DomainResult<ShoppingEntry> {
        self.update_quantity_by_id(entity.id, entity.quantity).cloned()
    }

    fn delete(&mut self, id: EntryId) -> DomainResult<()> {
        self.remove_by_id(id).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ListStore {
        ListStore::new(Arc::new(Catalog::builtin()))
    }

    fn q(n: u32) -> Quantity {
        Quantity::from(n)
    }

    #[test]
    fn test_add_classifies() {
        let mut store = store();
        let milk = store.add("Mleko", q(2)).unwrap();
        let jerky = store.add("Unicorn Jerky", q(1)).unwrap();

        assert_eq!(milk.category, "Nabiał");
        assert_eq!(jerky.category, "Inne");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_blank_product_is_ignored() {
        let mut store = store();
        assert!(store.add("", q(1)).is_none());
        assert!(store.add("   \t", q(1)).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_ids_are_unique_and_never_reused() {
        let mut store = store();
        let a = store.add("Chleb", q(1)).unwrap();
        let b = store.add("Chleb", q(1)).unwrap();
        assert_ne!(a.id, b.id);

        store.remove_by_id(b.id).unwrap();
        let c = store.add("Chleb", q(1)).unwrap();
        assert!(c.id > b.id);
    }

    #[test]
    fn test_update_quantity_in_place() {
        let mut store = store();
        store.add("Ser", q(1)).unwrap();
        let updated = store.update_quantity(0, q(4)).unwrap();
        assert_eq!(updated.quantity, q(4));
        assert_eq!(updated.product, "Ser");
        assert_eq!(updated.category, "Nabiał");
    }

    #[test]
    fn test_out_of_range_leaves_list_unchanged() {
        let mut store = store();
        for product in ["Mleko", "Ser", "Chleb"] {
            store.add(product, q(1)).unwrap();
        }
        let before = store.entries().to_vec();

        assert_eq!(
            store.remove(5).unwrap_err(),
            DomainError::OutOfRange { index: 5, len: 3 }
        );
        assert!(matches!(
            store.update_quantity(3, q(9)),
            Err(DomainError::OutOfRange { index: 3, len: 3 })
        ));
        assert_eq!(store.entries(), before.as_slice());
    }

    #[test]
    fn test_remove_shifts_positions() {
        let mut store = store();
        let first = store.add("Mleko", q(1)).unwrap();
        let second = store.add("Ser", q(1)).unwrap();
        let third = store.add("Chleb", q(1)).unwrap();

        assert_eq!(store.remove(0).unwrap().id, first.id);
        assert_eq!(store.position_of(second.id), Some(0));
        assert_eq!(store.position_of(third.id), Some(1));
        assert_eq!(store.position_of(first.id), None);
    }

    #[test]
    fn test_locate_returns_first_match() {
        let mut store = store();
        store.add("Jajka", q(10)).unwrap();
        store.add("Jajka", q(10)).unwrap();
        assert_eq!(store.locate("Jajka", q(10), "Nabiał"), Some(0));
        assert_eq!(store.locate("Jajka", q(6), "Nabiał"), None);
    }

    #[test]
    fn test_id_addressing_distinguishes_identical_entries() {
        let mut store = store();
        store.add("Jajka", q(10)).unwrap();
        let twin = store.add("Jajka", q(10)).unwrap();

        store.update_quantity_by_id(twin.id, q(6)).unwrap();
        assert_eq!(store.get(0).unwrap().quantity, q(10));
        assert_eq!(store.get(1).unwrap().quantity, q(6));
    }

    #[test]
    fn test_unknown_id_not_found() {
        let mut store = store();
        assert!(matches!(
            store.remove_by_id(EntryId(42)),
            Err(DomainError::NotFound(_))
        ));
        assert!(matches!(
            store.update_quantity_by_id(EntryId(42), q(1)),
            Err(DomainError::NotFound(_))
        ));
    }

    #[test]
    fn test_size_tracks_adds_and_removes() {
        let mut store = store();
        let products = ["Mleko", "Ser", "Chleb", "Pizza", "Stek", "Ryż"];
        for (n, product) in products.iter().enumerate() {
            store.add(product, q(n as u32)).unwrap();
        }
        let mut removed = 0;
        while store.len() > 2 {
            store.remove(store.len() / 2).unwrap();
            removed += 1;
        }
        assert_eq!(store.len(), products.len() - removed);

        store.clear();
        assert!(store.is_empty());
    }
}
