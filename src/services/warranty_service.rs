use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter, Set};

use crate::{
    dto::catalog::RegisterWarrantyRequest,
    entity::{product_serials, warranties},
    error::{AppError, AppResult},
    models::Warranty,
    response::ApiResponse,
    services::generate_code,
    state::AppState,
};

pub const WARRANTY_ACTIVE: &str = "ACTIVE";

/// Opens the warranty of a serial. A serial carries at most one warranty.
pub async fn register_warranty(
    state: &AppState,
    payload: RegisterWarrantyRequest,
) -> AppResult<ApiResponse<Warranty>> {
    let serial = product_serials::Entity::find()
        .filter(product_serials::Column::Serial.eq(payload.serial.trim()))
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::BadRequest("serial not found".to_string()))?;

    if serial
        .find_related(warranties::Entity)
        .one(&state.orm)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict(format!(
            "serial {} already has a warranty",
            serial.serial
        )));
    }

    let warranty = warranties::ActiveModel {
        customer_name: Set(payload.customer_name),
        customer_email: Set(payload.customer_email),
        customer_phone: Set(payload.customer_phone),
        customer_address: Set(payload.customer_address),
        warranty_code: Set(generate_code("WR")),
        status: Set(WARRANTY_ACTIVE.to_string()),
        purchase_date: Set(payload.purchase_date),
        id_product_serial: Set(serial.id),
        ..Default::default()
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(
        warranty_id = warranty.id,
        serial_id = serial.id,
        code = %warranty.warranty_code,
        "warranty registered"
    );
    Ok(ApiResponse::success("Warranty registered", warranty.into(), None))
}

pub async fn get_by_code(state: &AppState, code: &str) -> AppResult<ApiResponse<Warranty>> {
    let warranty = warranties::Entity::find()
        .filter(warranties::Column::WarrantyCode.eq(code))
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Warranty", warranty.into(), None))
}

pub async fn get_for_serial(state: &AppState, serial: &str) -> AppResult<ApiResponse<Warranty>> {
    let found = product_serials::Entity::find()
        .filter(product_serials::Column::Serial.eq(serial))
        .find_also_related(warranties::Entity)
        .one(&state.orm)
        .await?;

    match found {
        Some((_, Some(warranty))) => Ok(ApiResponse::success("Warranty", warranty.into(), None)),
        _ => Err(AppError::NotFound),
    }
}
