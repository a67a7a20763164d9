use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

use crate::{
    dto::catalog::{CreateSerialRequest, SerialList, UpdateSerialStatusRequest},
    entity::{
        product_serials::{self, ProductSerialStatus},
        products,
    },
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_admin},
    models::ProductSerial,
    response::{ApiResponse, Meta},
    services::require_non_blank,
    state::AppState,
};

pub async fn create_serial(
    state: &AppState,
    user: &AuthUser,
    payload: CreateSerialRequest,
) -> AppResult<ApiResponse<ProductSerial>> {
    ensure_admin(user)?;
    let serial = payload.serial.trim().to_string();
    require_non_blank("serial", &serial)?;

    products::Entity::find_by_id(payload.product_id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::BadRequest("product not found".to_string()))?;

    let taken = product_serials::Entity::find()
        .filter(product_serials::Column::Serial.eq(serial.as_str()))
        .count(&state.orm)
        .await?;
    if taken > 0 {
        return Err(AppError::Conflict(format!("serial {serial} already exists")));
    }

    let created = product_serials::ActiveModel {
        serial: Set(serial),
        status: Set(payload.status.unwrap_or(ProductSerialStatus::InStock)),
        id_product: Set(payload.product_id),
        ..Default::default()
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(serial_id = created.id, product_id = created.id_product, "serial created");
    Ok(ApiResponse::success("Serial created", created.into(), None))
}

pub async fn get_by_serial(state: &AppState, serial: &str) -> AppResult<ApiResponse<ProductSerial>> {
    let found = product_serials::Entity::find()
        .filter(product_serials::Column::Serial.eq(serial))
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Serial", found.into(), None))
}

pub async fn list_for_product(
    state: &AppState,
    product_id: i64,
    status: Option<ProductSerialStatus>,
) -> AppResult<ApiResponse<SerialList>> {
    let mut finder = product_serials::Entity::find()
        .filter(product_serials::Column::IdProduct.eq(product_id));
    if let Some(status) = status {
        finder = finder.filter(product_serials::Column::Status.eq(status));
    }

    let items: Vec<ProductSerial> = finder
        .order_by_asc(product_serials::Column::Serial)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(ProductSerial::from)
        .collect();

    let meta = Meta::whole(items.len());
    Ok(ApiResponse::success("Serials", SerialList { items }, Some(meta)))
}

pub async fn update_serial_status(
    state: &AppState,
    user: &AuthUser,
    id: i64,
    payload: UpdateSerialStatusRequest,
) -> AppResult<ApiResponse<ProductSerial>> {
    ensure_admin(user)?;
    let existing = product_serials::Entity::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut active: product_serials::ActiveModel = existing.into();
    active.status = Set(payload.status);
    let updated = active.update(&state.orm).await?;

    tracing::info!(serial_id = id, status = ?updated.status, "serial status changed");
    Ok(ApiResponse::success("Updated", updated.into(), Some(Meta::empty())))
}
