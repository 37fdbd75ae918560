//! Maps protocol requests onto `InventoryService` calls.

use serde::Serialize;
use serde_json::json;

use crate::app::dto::{Request, Response};
use crate::app::errors::ServiceError;
use crate::app::service::InventoryService;

/// Parse and execute one request line. Never fails: problems become error responses.
pub fn handle_line(service: &mut InventoryService, line: &str) -> Response {
    let request: Request = match serde_json::from_str(line) {
        Ok(req) => req,
        Err(e) => {
            tracing::warn!(error = %e, "malformed request");
            return Response::error("invalid_request", e.to_string());
        }
    };

    match dispatch(service, request) {
        Ok(data) => Response::ok(data),
        Err(err) => err.into(),
    }
}

pub fn dispatch(
    service: &mut InventoryService,
    request: Request,
) -> Result<serde_json::Value, ServiceError> {
    match request {
        Request::AddItem(req) => to_value(service.add_item(req.item, req.kind)?),
        Request::RegisterStaff { staff_id, name } => {
            service.register_staff(&staff_id, &name)?;
            Ok(serde_json::Value::Null)
        }
        Request::Assign(req) => {
            service.assign(&req.staff_id, &req.item_id)?;
            Ok(serde_json::Value::Null)
        }
        Request::Return(req) => {
            service.return_item(&req.staff_id, &req.item_id)?;
            Ok(serde_json::Value::Null)
        }
        Request::FindItem { item_id } => match service.find_item(&item_id) {
            Some(row) => to_value(row),
            None => Err(ServiceError::ItemNotFound(item_id)),
        },
        Request::FindByName { name } => to_value(service.find_items_by_name(&name)),
        Request::Holdings { staff_id } => to_value(service.holdings(&staff_id)?),
        Request::InventoryList => to_value(service.inventory_list()),
        Request::ExpiredWarranties => to_value(json!({
            "today": service.today(),
            "items": service.expired_warranties(),
        })),
        Request::AssignmentSummary => to_value(service.assignment_summary()),
        Request::MaintenanceTotal => to_value(json!({
            "total": service.total_maintenance_fees(),
        })),
    }
}

fn to_value(value: impl Serialize) -> Result<serde_json::Value, ServiceError> {
    serde_json::to_value(value).map_err(|e| ServiceError::InvalidRequest(e.to_string()))
}
