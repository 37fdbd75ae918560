use chrono::NaiveDate;

use stockroom_core::{DomainError, DomainResult, Entity, Identifier, eq_ignore_case};

use crate::collection::BoundedCollection;
use crate::item::InventoryItem;

/// Default maximum number of catalogued items.
pub const DEFAULT_ITEM_CAPACITY: usize = 100;

/// Owns every inventory item, in the order they were added.
#[derive(Debug, Clone)]
pub struct InventoryCatalog {
    items: BoundedCollection<InventoryItem>,
}

impl InventoryCatalog {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_ITEM_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: BoundedCollection::new("inventory catalog", capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add an item.
    ///
    /// Rejected with `CapacityExceeded` when full, then with `DuplicateItemId`
    /// when an item with the same identifier (ignoring case) is present.
    pub fn add_item(&mut self, item: InventoryItem) -> DomainResult<()> {
        self.items.ensure_room()?;
        if self.items.contains(item.id().as_str()) {
            return Err(DomainError::DuplicateItemId(item.id().to_string()));
        }
        self.items.push(item)
    }

    pub fn find_item_by_id(&self, id: &str) -> Option<&InventoryItem> {
        self.items.find(id)
    }

    pub fn find_item_by_id_mut(&mut self, id: &str) -> Option<&mut InventoryItem> {
        self.items.find_mut(id)
    }

    /// Every item whose name equals `name` ignoring case, in insertion order.
    pub fn find_items_by_name(&self, name: &str) -> Vec<&InventoryItem> {
        self.items
            .iter()
            .filter(|item| eq_ignore_case(item.name(), name))
            .collect()
    }

    pub fn items(&self) -> impl Iterator<Item = &InventoryItem> {
        self.items.iter()
    }

    /// Items whose warranty ended before `today`, in insertion order.
    pub fn expired_warranties(&self, today: NaiveDate) -> Vec<&InventoryItem> {
        self.items
            .iter()
            .filter(|item| item.is_warranty_expired(today))
            .collect()
    }

    /// Items currently free to be assigned.
    pub fn available_items(&self) -> Vec<&InventoryItem> {
        self.items.iter().filter(|item| item.is_available()).collect()
    }

    pub fn total_maintenance_fees(&self) -> f64 {
        // `sum()` over an empty f64 iterator yields -0.0.
        self.items
            .iter()
            .map(InventoryItem::maintenance_fee)
            .fold(0.0, |acc, fee| acc + fee)
    }
}

impl Default for InventoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn equipment(id: &str, name: &str, warranty_end: NaiveDate) -> InventoryItem {
        InventoryItem::equipment(id, name, "Acme", date(2020, 1, 1), 100.0, warranty_end).unwrap()
    }

    fn ids(items: &[&InventoryItem]) -> Vec<String> {
        items.iter().map(|i| i.id().as_str().to_string()).collect()
    }

    #[test]
    fn add_item_respects_capacity() {
        let mut catalog = InventoryCatalog::with_capacity(1);
        catalog.add_item(equipment("E1", "Laptop", date(2030, 1, 1))).unwrap();

        let err = catalog
            .add_item(equipment("E2", "Laptop", date(2030, 1, 1)))
            .unwrap_err();

        assert!(matches!(err, DomainError::CapacityExceeded { capacity: 1, .. }));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn duplicate_item_ids_are_rejected_ignoring_case() {
        let mut catalog = InventoryCatalog::new();
        catalog.add_item(equipment("E1", "Laptop", date(2030, 1, 1))).unwrap();

        let err = catalog
            .add_item(equipment("e1", "Projector", date(2030, 1, 1)))
            .unwrap_err();

        assert_eq!(err, DomainError::DuplicateItemId("e1".to_string()));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.find_item_by_id("E1").unwrap().name(), "Laptop");
    }

    #[test]
    fn default_capacity_is_one_hundred() {
        assert_eq!(InventoryCatalog::default().capacity(), 100);
    }

    #[test]
    fn find_by_id_ignores_case() {
        let mut catalog = InventoryCatalog::new();
        catalog.add_item(equipment("Lap-7", "Laptop", date(2030, 1, 1))).unwrap();

        assert!(catalog.find_item_by_id("LAP-7").is_some());
        assert!(catalog.find_item_by_id("lap-8").is_none());
    }

    #[test]
    fn find_by_name_returns_all_matches_in_order() {
        let mut catalog = InventoryCatalog::new();
        catalog.add_item(equipment("E1", "Laptop", date(2030, 1, 1))).unwrap();
        catalog.add_item(equipment("E2", "Projector", date(2030, 1, 1))).unwrap();
        catalog.add_item(equipment("E3", "LAPTOP", date(2030, 1, 1))).unwrap();

        assert_eq!(ids(&catalog.find_items_by_name("laptop")), vec!["E1", "E3"]);
        assert!(catalog.find_items_by_name("Tablet").is_empty());
    }

    #[test]
    fn expired_warranties_use_the_supplied_date() {
        let mut catalog = InventoryCatalog::new();
        catalog.add_item(equipment("E1", "Old", date(2024, 6, 30))).unwrap();
        catalog.add_item(equipment("E2", "Edge", date(2024, 7, 1))).unwrap();
        catalog.add_item(equipment("E3", "New", date(2026, 1, 1))).unwrap();

        let expired = catalog.expired_warranties(date(2024, 7, 1));
        assert_eq!(ids(&expired), vec!["E1"]);
    }

    #[test]
    fn available_items_skip_assigned_ones() {
        let mut catalog = InventoryCatalog::new();
        catalog.add_item(equipment("E1", "Laptop", date(2030, 1, 1))).unwrap();
        catalog.add_item(equipment("E2", "Laptop", date(2030, 1, 1))).unwrap();
        catalog.find_item_by_id_mut("E1").unwrap().set_available(false);

        assert_eq!(ids(&catalog.available_items()), vec!["E2"]);
    }

    #[test]
    fn empty_catalog_total_is_positive_zero() {
        let total = InventoryCatalog::new().total_maintenance_fees();
        assert_eq!(total, 0.0);
        assert!(total.is_sign_positive());
        assert_eq!(serde_json::to_string(&total).unwrap(), "0.0");
    }

    #[test]
    fn total_fees_sum_every_item() {
        let mut catalog = InventoryCatalog::new();
        catalog.add_item(equipment("E1", "Laptop", date(2030, 1, 1))).unwrap();
        catalog
            .add_item(
                InventoryItem::furniture("F1", "Desk", "Oak", date(2020, 1, 1), 500.0, date(2030, 1, 1))
                    .unwrap(),
            )
            .unwrap();

        assert!((catalog.total_maintenance_fees() - 15.0).abs() < 1e-9);
    }
}
