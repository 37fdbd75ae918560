use stockroom_core::{DomainError, DomainResult, Entity, Identifier, ItemId};

use crate::collection::BoundedCollection;
use crate::staff::StaffMember;

/// Default maximum number of registered staff members.
pub const DEFAULT_STAFF_CAPACITY: usize = 50;

/// Owns every registered staff member, in registration order.
#[derive(Debug, Clone)]
pub struct StaffDirectory {
    staff: BoundedCollection<StaffMember>,
}

impl StaffDirectory {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_STAFF_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            staff: BoundedCollection::new("staff directory", capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.staff.capacity()
    }

    pub fn len(&self) -> usize {
        self.staff.len()
    }

    pub fn is_empty(&self) -> bool {
        self.staff.is_empty()
    }

    /// Register a staff member.
    ///
    /// Rejected with `CapacityExceeded` when full, then with `DuplicateStaffId`
    /// when the identifier (ignoring case) is already registered.
    pub fn register_staff(&mut self, member: StaffMember) -> DomainResult<()> {
        self.staff.ensure_room()?;
        if self.staff.contains(member.id().as_str()) {
            return Err(DomainError::DuplicateStaffId(member.id().to_string()));
        }
        self.staff.push(member)
    }

    pub fn find_staff_by_id(&self, id: &str) -> Option<&StaffMember> {
        self.staff.find(id)
    }

    pub fn find_staff_by_id_mut(&mut self, id: &str) -> Option<&mut StaffMember> {
        self.staff.find_mut(id)
    }

    /// The staff member currently holding `item_id`, if any.
    pub fn holder_of(&self, item_id: &ItemId) -> Option<&StaffMember> {
        self.staff.iter().find(|member| member.holds(item_id))
    }

    pub fn staff(&self) -> impl Iterator<Item = &StaffMember> {
        self.staff.iter()
    }
}

impl Default for StaffDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use stockroom_core::StaffId;

    use crate::item::InventoryItem;

    fn member(id: &str, name: &str) -> StaffMember {
        StaffMember::new(StaffId::new(id).unwrap(), name)
    }

    #[test]
    fn duplicate_staff_ids_are_rejected_ignoring_case() {
        let mut directory = StaffDirectory::new();
        directory.register_staff(member("S1", "Alice")).unwrap();

        let err = directory.register_staff(member("s1", "Bob")).unwrap_err();

        assert_eq!(err, DomainError::DuplicateStaffId("s1".to_string()));
        assert_eq!(directory.len(), 1);
        assert_eq!(directory.find_staff_by_id("S1").unwrap().name(), "Alice");
    }

    #[test]
    fn capacity_is_checked_before_duplicates() {
        let mut directory = StaffDirectory::with_capacity(1);
        directory.register_staff(member("S1", "Alice")).unwrap();

        let err = directory.register_staff(member("S1", "Alice")).unwrap_err();

        assert!(matches!(err, DomainError::CapacityExceeded { capacity: 1, .. }));
    }

    #[test]
    fn default_capacity_is_fifty() {
        assert_eq!(StaffDirectory::default().capacity(), 50);
    }

    #[test]
    fn holder_of_finds_the_assignee() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let mut item = InventoryItem::equipment("E1", "Laptop", "Dell", day, 10.0, day).unwrap();
        let mut directory = StaffDirectory::new();
        directory.register_staff(member("S1", "Alice")).unwrap();
        directory.register_staff(member("S2", "Bob")).unwrap();

        assert!(directory.holder_of(item.id()).is_none());

        directory
            .find_staff_by_id_mut("s2")
            .unwrap()
            .assign_item(&mut item)
            .unwrap();

        assert_eq!(directory.holder_of(item.id()).unwrap().name(), "Bob");
    }
}
