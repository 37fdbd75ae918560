//! Read-only report traversals over the catalog and the staff directory.

use chrono::NaiveDate;
use serde::Serialize;

use stockroom_core::{Entity, Identifier};

use crate::catalog::InventoryCatalog;
use crate::directory::StaffDirectory;
use crate::item::{InventoryItem, ItemCategory};

/// Flattened view of one item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemRow {
    pub id: String,
    pub name: String,
    pub category: ItemCategory,
    pub price: f64,
    pub purchase_date: NaiveDate,
    pub warranty_end: NaiveDate,
    pub available: bool,
    pub maintenance_fee: f64,
    pub description: String,
}

impl From<&InventoryItem> for ItemRow {
    fn from(item: &InventoryItem) -> Self {
        Self {
            id: item.id().as_str().to_string(),
            name: item.name().to_string(),
            category: item.category(),
            price: item.price().amount(),
            purchase_date: item.purchase_date(),
            warranty_end: item.warranty_end(),
            available: item.is_available(),
            maintenance_fee: item.maintenance_fee(),
            description: item.describe(),
        }
    }
}

/// One staff member and their holdings, in assignment order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignmentRow {
    pub staff_id: String,
    pub name: String,
    pub holdings: Vec<ItemRow>,
}

impl core::fmt::Display for AssignmentRow {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Staff ID: {}, Name: {}, Assigned Items: {}",
            self.staff_id,
            self.name,
            self.holdings.len()
        )?;
        for item in &self.holdings {
            write!(f, "\n  -> {}", item.description)?;
        }
        Ok(())
    }
}

pub fn inventory_list(catalog: &InventoryCatalog) -> Vec<ItemRow> {
    catalog.items().map(ItemRow::from).collect()
}

/// Items whose warranty ended strictly before `today`.
pub fn expired_warranties(catalog: &InventoryCatalog, today: NaiveDate) -> Vec<ItemRow> {
    catalog
        .expired_warranties(today)
        .into_iter()
        .map(ItemRow::from)
        .collect()
}

/// Every staff member with their resolved holdings.
///
/// Held identifiers missing from `catalog` are skipped.
pub fn assignment_summary(
    directory: &StaffDirectory,
    catalog: &InventoryCatalog,
) -> Vec<AssignmentRow> {
    directory
        .staff()
        .map(|member| AssignmentRow {
            staff_id: member.id().as_str().to_string(),
            name: member.name().to_string(),
            holdings: member
                .assigned_items()
                .iter()
                .filter_map(|id| catalog.find_item_by_id(id.as_str()))
                .map(ItemRow::from)
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::StaffId;

    use crate::staff::StaffMember;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn seeded() -> (InventoryCatalog, StaffDirectory) {
        let mut catalog = InventoryCatalog::new();
        catalog
            .add_item(
                InventoryItem::equipment("E1", "Laptop", "Dell", date(2022, 1, 1), 1000.0, date(2023, 1, 1))
                    .unwrap(),
            )
            .unwrap();
        catalog
            .add_item(
                InventoryItem::furniture("F1", "Desk", "Oak", date(2022, 1, 1), 400.0, date(2030, 1, 1))
                    .unwrap(),
            )
            .unwrap();

        let mut directory = StaffDirectory::new();
        directory
            .register_staff(StaffMember::new(StaffId::new("S1").unwrap(), "Alice"))
            .unwrap();
        directory
            .register_staff(StaffMember::new(StaffId::new("S2").unwrap(), "Bob"))
            .unwrap();

        let item = catalog.find_item_by_id_mut("F1").unwrap();
        directory
            .find_staff_by_id_mut("S1")
            .unwrap()
            .assign_item(item)
            .unwrap();

        (catalog, directory)
    }

    #[test]
    fn inventory_list_preserves_order_and_state() {
        let (catalog, _) = seeded();
        let rows = inventory_list(&catalog);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, "E1");
        assert!(rows[0].available);
        assert_eq!(rows[1].id, "F1");
        assert!(!rows[1].available);
        assert!((rows[1].maintenance_fee - 8.0).abs() < 1e-9);
    }

    #[test]
    fn expired_report_filters_by_date() {
        let (catalog, _) = seeded();
        let rows = expired_warranties(&catalog, date(2024, 1, 1));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "E1");
    }

    #[test]
    fn summary_resolves_holdings() {
        let (catalog, directory) = seeded();
        let summary = assignment_summary(&directory, &catalog);

        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].staff_id, "S1");
        assert_eq!(summary[0].holdings.len(), 1);
        assert_eq!(summary[0].holdings[0].id, "F1");
        assert!(summary[1].holdings.is_empty());

        let text = summary[0].to_string();
        assert!(text.starts_with("Staff ID: S1, Name: Alice, Assigned Items: 1\n  -> [Furniture] ID: F1"));
    }

    #[test]
    fn rows_serialize_with_snake_case_category() {
        let (catalog, _) = seeded();
        let json = serde_json::to_value(&inventory_list(&catalog)[1]).unwrap();
        assert_eq!(json["category"], "furniture");
        assert_eq!(json["warranty_end"], "2030-01-01");
    }
}
