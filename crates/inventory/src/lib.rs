//! Inventory domain module.
//!
//! Items, their per-category maintenance fees, and their assignment to staff
//! members. Pure deterministic domain logic: no IO and no logging.

pub mod catalog;
pub mod collection;
pub mod directory;
pub mod item;
pub mod price;
pub mod report;
pub mod staff;

pub use catalog::{DEFAULT_ITEM_CAPACITY, InventoryCatalog};
pub use collection::BoundedCollection;
pub use directory::{DEFAULT_STAFF_CAPACITY, StaffDirectory};
pub use item::{InventoryItem, ItemCategory, ItemKind, NewItem};
pub use price::Price;
pub use report::{AssignmentRow, ItemRow};
pub use staff::{AssignError, MAX_HOLDINGS, StaffMember};
