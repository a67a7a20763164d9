use serde_json::Value;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

pub mod account_service;
pub mod auth_service;
pub mod blog_service;
pub mod bulk_discount_service;
pub mod cart_service;
pub mod notify_service;
pub mod order_service;
pub mod product_service;
pub mod serial_service;
pub mod warranty_service;

/// JSON columns hold structured documents; scalars are rejected before they
/// reach the table.
pub(crate) fn ensure_structured(field: &str, value: Option<&Value>) -> AppResult<()> {
    match value {
        None | Some(Value::Object(_)) | Some(Value::Array(_)) => Ok(()),
        Some(_) => Err(AppError::BadRequest(format!(
            "{field} must be a JSON object or array"
        ))),
    }
}

pub(crate) fn require_non_blank(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Human-readable business code, e.g. `ORD-1A2B3C4D5E`.
pub(crate) fn generate_code(prefix: &str) -> String {
    let raw = Uuid::new_v4().simple().to_string().to_uppercase();
    format!("{prefix}-{}", &raw[..10])
}
