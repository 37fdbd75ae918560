use serde::{Deserialize, Serialize};

use stockroom_inventory::{ItemKind, NewItem};

use crate::app::errors::ServiceError;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AddItemRequest {
    #[serde(flatten)]
    pub item: NewItem,
    #[serde(flatten)]
    pub kind: ItemKind,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StaffItemRequest {
    pub staff_id: String,
    pub item_id: String,
}

/// One command line, tagged by `"op"`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    AddItem(AddItemRequest),
    RegisterStaff { staff_id: String, name: String },
    Assign(StaffItemRequest),
    Return(StaffItemRequest),
    FindItem { item_id: String },
    FindByName { name: String },
    Holdings { staff_id: String },
    InventoryList,
    ExpiredWarranties,
    AssignmentSummary,
    MaintenanceTotal,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Response {
    Ok {
        #[serde(skip_serializing_if = "serde_json::Value::is_null")]
        data: serde_json::Value,
    },
    Error {
        error: &'static str,
        message: String,
    },
}

impl Response {
    pub fn ok(data: serde_json::Value) -> Self {
        Self::Ok { data }
    }

    pub fn error(code: &'static str, message: impl Into<String>) -> Self {
        Self::Error {
            error: code,
            message: message.into(),
        }
    }
}

impl From<ServiceError> for Response {
    fn from(err: ServiceError) -> Self {
        Self::error(err.code(), err.to_string())
    }
}
