use thiserror::Error;

use stockroom_core::{DomainError, Entity, Identifier, ItemId, StaffId};

use crate::item::InventoryItem;

/// Maximum number of items a staff member may hold at once.
pub const MAX_HOLDINGS: usize = 5;

/// Why an assignment was rejected. Nothing is mutated in either case.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssignError {
    #[error("staff member {staff_id} already holds the maximum of {limit} items")]
    LimitExceeded { staff_id: StaffId, limit: usize },

    #[error("item {0} is not available for assignment")]
    ItemUnavailable(ItemId),
}

impl From<AssignError> for DomainError {
    fn from(value: AssignError) -> Self {
        match value {
            AssignError::LimitExceeded { staff_id, limit } => DomainError::AssignmentLimitExceeded {
                staff_id: staff_id.to_string(),
                limit,
            },
            AssignError::ItemUnavailable(item_id) => {
                DomainError::ItemUnavailable(item_id.to_string())
            }
        }
    }
}

/// A staff member and the items they currently hold, in assignment order.
///
/// Holdings are tracked by item identifier; the item itself stays owned by
/// the catalog. Every held item has `is_available() == false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffMember {
    id: StaffId,
    name: String,
    holdings: Vec<ItemId>,
}

impl StaffMember {
    pub fn new(id: StaffId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            holdings: Vec::with_capacity(MAX_HOLDINGS),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Snapshot of the current holdings, in assignment order.
    pub fn assigned_items(&self) -> Vec<ItemId> {
        self.holdings.clone()
    }

    pub fn holding_count(&self) -> usize {
        self.holdings.len()
    }

    /// Header line only (id, name, count). Holdings are rendered by
    /// `report::AssignmentRow`, which resolves them through the catalog.
    pub fn describe(&self) -> String {
        self.to_string()
    }

    pub fn holds(&self, item_id: &ItemId) -> bool {
        self.holdings.contains(item_id)
    }

    /// Assign `item` to this staff member.
    ///
    /// Checks, in order: the holding limit, then the item's availability.
    pub fn assign_item(&mut self, item: &mut InventoryItem) -> Result<(), AssignError> {
        if self.holdings.len() >= MAX_HOLDINGS {
            return Err(AssignError::LimitExceeded {
                staff_id: self.id.clone(),
                limit: MAX_HOLDINGS,
            });
        }
        if !item.is_available() {
            return Err(AssignError::ItemUnavailable(item.id().clone()));
        }

        self.holdings.push(item.id().clone());
        item.set_available(false);
        Ok(())
    }

    /// Return `item` from this staff member.
    ///
    /// A no-op (returning `false`) when the item is not among the holdings.
    /// Remaining holdings keep their relative order.
    pub fn return_item(&mut self, item: &mut InventoryItem) -> bool {
        let Some(pos) = self.holdings.iter().position(|held| held == item.id()) else {
            return false;
        };
        item.set_available(true);
        self.holdings.remove(pos);
        true
    }
}

impl Entity for StaffMember {
    type Id = StaffId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl core::fmt::Display for StaffMember {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Staff ID: {}, Name: {}, Assigned Items: {}",
            self.id.as_str(),
            self.name,
            self.holdings.len()
        )
    }
}
