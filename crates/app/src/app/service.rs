//! Inventory session: one catalog plus one staff directory, explicitly owned.

use chrono::{Local, NaiveDate};

use stockroom_core::{Entity, Identifier, StaffId};
use stockroom_inventory::{
    InventoryCatalog, InventoryItem, ItemKind, NewItem, StaffDirectory, StaffMember, report,
    report::{AssignmentRow, ItemRow},
};

use crate::app::errors::ServiceError;
use crate::config::AppConfig;

#[derive(Debug, Clone)]
pub struct InventoryService {
    catalog: InventoryCatalog,
    directory: StaffDirectory,
    today: Option<NaiveDate>,
}

impl InventoryService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            catalog: InventoryCatalog::with_capacity(config.max_items),
            directory: StaffDirectory::with_capacity(config.max_staff),
            today: config.today,
        }
    }

    pub fn catalog(&self) -> &InventoryCatalog {
        &self.catalog
    }

    pub fn directory(&self) -> &StaffDirectory {
        &self.directory
    }

    pub fn add_item(&mut self, details: NewItem, kind: ItemKind) -> Result<ItemRow, ServiceError> {
        let item = InventoryItem::new(details, kind)
            .inspect_err(|e| tracing::warn!(error = %e, "item rejected"))?;
        let row = ItemRow::from(&item);

        self.catalog
            .add_item(item)
            .inspect_err(|e| tracing::warn!(item_id = %row.id, error = %e, "item not added"))?;

        tracing::info!(item_id = %row.id, category = ?row.category, "item added");
        Ok(row)
    }

    pub fn register_staff(&mut self, staff_id: &str, name: &str) -> Result<(), ServiceError> {
        let id = StaffId::new(staff_id)?;
        let name = name.trim();
        if name.is_empty() {
            return Err(ServiceError::InvalidRequest("staff name cannot be blank".to_string()));
        }

        self.directory
            .register_staff(StaffMember::new(id, name))
            .inspect_err(|e| tracing::warn!(staff_id, error = %e, "staff not registered"))?;

        tracing::info!(staff_id, "staff registered");
        Ok(())
    }

    /// Assign an item to a staff member, both looked up by identifier.
    pub fn assign(&mut self, staff_id: &str, item_id: &str) -> Result<(), ServiceError> {
        let Self {
            catalog, directory, ..
        } = self;
        let member = directory
            .find_staff_by_id_mut(staff_id)
            .ok_or_else(|| ServiceError::StaffNotFound(staff_id.to_string()))?;
        let item = catalog
            .find_item_by_id_mut(item_id)
            .ok_or_else(|| ServiceError::ItemNotFound(item_id.to_string()))?;

        member
            .assign_item(item)
            .inspect_err(|e| tracing::warn!(staff_id, item_id, error = %e, "assignment rejected"))?;

        tracing::info!(staff_id, item_id, holdings = member.holding_count(), "item assigned");
        Ok(())
    }

    /// Return an item from a staff member.
    ///
    /// Unlike `StaffMember::return_item`, returning an item the staff member
    /// does not hold is reported as `NotHeld`.
    pub fn return_item(&mut self, staff_id: &str, item_id: &str) -> Result<(), ServiceError> {
        let Self {
            catalog, directory, ..
        } = self;
        let member = directory
            .find_staff_by_id_mut(staff_id)
            .ok_or_else(|| ServiceError::StaffNotFound(staff_id.to_string()))?;
        let item = catalog
            .find_item_by_id_mut(item_id)
            .ok_or_else(|| ServiceError::ItemNotFound(item_id.to_string()))?;

        if !member.holds(item.id()) {
            tracing::warn!(staff_id, item_id, "return rejected: item not held");
            return Err(ServiceError::NotHeld {
                staff_id: staff_id.to_string(),
                item_id: item_id.to_string(),
            });
        }

        member.return_item(item);
        tracing::info!(staff_id, item_id, holdings = member.holding_count(), "item returned");
        Ok(())
    }

    pub fn find_item(&self, item_id: &str) -> Option<ItemRow> {
        self.catalog.find_item_by_id(item_id).map(ItemRow::from)
    }

    pub fn find_items_by_name(&self, name: &str) -> Vec<ItemRow> {
        self.catalog
            .find_items_by_name(name)
            .into_iter()
            .map(ItemRow::from)
            .collect()
    }

    /// Items currently held by one staff member, in assignment order.
    pub fn holdings(&self, staff_id: &str) -> Result<Vec<ItemRow>, ServiceError> {
        let member = self
            .directory
            .find_staff_by_id(staff_id)
            .ok_or_else(|| ServiceError::StaffNotFound(staff_id.to_string()))?;

        Ok(member
            .assigned_items()
            .iter()
            .filter_map(|id| self.catalog.find_item_by_id(id.as_str()))
            .map(ItemRow::from)
            .collect())
    }

    pub fn inventory_list(&self) -> Vec<ItemRow> {
        report::inventory_list(&self.catalog)
    }

    pub fn expired_warranties(&self) -> Vec<ItemRow> {
        report::expired_warranties(&self.catalog, self.today())
    }

    pub fn assignment_summary(&self) -> Vec<AssignmentRow> {
        report::assignment_summary(&self.directory, &self.catalog)
    }

    pub fn total_maintenance_fees(&self) -> f64 {
        self.catalog.total_maintenance_fees()
    }

    /// The date warranty reports compare against.
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}

impl Default for InventoryService {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}
