//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is a recoverable, deterministic business failure. Lookup
/// misses are not errors; they surface as `None` or an empty sequence.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Item construction was rejected (e.g. negative price, blank name).
    #[error("invalid item: {0}")]
    InvalidItem(String),

    /// An identifier was invalid (e.g. blank).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A bounded collection is already at its configured maximum.
    #[error("{collection} is full (capacity {capacity})")]
    CapacityExceeded {
        collection: &'static str,
        capacity: usize,
    },

    /// A staff member with the same identifier is already registered.
    #[error("staff id already registered: {0}")]
    DuplicateStaffId(String),

    /// An item with the same identifier is already in the catalog.
    #[error("item id already in catalog: {0}")]
    DuplicateItemId(String),

    /// The staff member already holds the maximum number of items.
    #[error("staff member {staff_id} already holds the maximum of {limit} items")]
    AssignmentLimitExceeded { staff_id: String, limit: usize },

    /// The item is currently held by someone else.
    #[error("item {0} is not available for assignment")]
    ItemUnavailable(String),
}

impl DomainError {
    pub fn invalid_item(msg: impl Into<String>) -> Self {
        Self::InvalidItem(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn capacity_exceeded(collection: &'static str, capacity: usize) -> Self {
        Self::CapacityExceeded {
            collection,
            capacity,
        }
    }

    /// Stable machine-readable code, used by outer layers when rendering errors.
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::InvalidItem(_) => "invalid_item",
            DomainError::InvalidId(_) => "invalid_id",
            DomainError::CapacityExceeded { .. } => "capacity_exceeded",
            DomainError::DuplicateStaffId(_) => "duplicate_staff_id",
            DomainError::DuplicateItemId(_) => "duplicate_item_id",
            DomainError::AssignmentLimitExceeded { .. } => "assignment_limit_exceeded",
            DomainError::ItemUnavailable(_) => "item_unavailable",
        }
    }
}
