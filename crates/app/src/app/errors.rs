use thiserror::Error;

use stockroom_core::DomainError;
use stockroom_inventory::AssignError;

/// Failure of an application-level operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Assignment(#[from] AssignError),

    #[error("staff member not found: {0}")]
    StaffNotFound(String),

    #[error("item not found: {0}")]
    ItemNotFound(String),

    #[error("staff member {staff_id} does not hold item {item_id}")]
    NotHeld { staff_id: String, item_id: String },

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl ServiceError {
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::Domain(e) => e.code(),
            ServiceError::Assignment(AssignError::LimitExceeded { .. }) => {
                "assignment_limit_exceeded"
            }
            ServiceError::Assignment(AssignError::ItemUnavailable(_)) => "item_unavailable",
            ServiceError::StaffNotFound(_) => "staff_not_found",
            ServiceError::ItemNotFound(_) => "item_not_found",
            ServiceError::NotHeld { .. } => "not_held",
            ServiceError::InvalidRequest(_) => "invalid_request",
        }
    }
}
