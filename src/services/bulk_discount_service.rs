use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::{
    dto::catalog::{BulkDiscountList, CreateBulkDiscountRequest, UpdateBulkDiscountRequest},
    entity::{bulk_discounts, products},
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_admin},
    models::BulkDiscount,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn create_bulk_discount(
    state: &AppState,
    user: &AuthUser,
    payload: CreateBulkDiscountRequest,
) -> AppResult<ApiResponse<BulkDiscount>> {
    ensure_admin(user)?;
    validate_tier(
        payload.min_quantity,
        payload.max_quantity,
        payload.discount_percent,
    )?;

    products::Entity::find_by_id(payload.product_id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::BadRequest("product not found".to_string()))?;

    let tier = bulk_discounts::ActiveModel {
        min_quantity: Set(payload.min_quantity),
        max_quantity: Set(payload.max_quantity),
        discount_percent: Set(payload.discount_percent),
        id_product: Set(payload.product_id),
        ..Default::default()
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(tier_id = tier.id, product_id = tier.id_product, "bulk discount created");
    Ok(ApiResponse::success("Bulk discount created", tier.into(), None))
}

pub async fn list_for_product(
    state: &AppState,
    product_id: i64,
) -> AppResult<ApiResponse<BulkDiscountList>> {
    let items: Vec<BulkDiscount> = bulk_discounts::Entity::find()
        .filter(bulk_discounts::Column::IdProduct.eq(product_id))
        .order_by_asc(bulk_discounts::Column::MinQuantity)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(BulkDiscount::from)
        .collect();

    let meta = Meta::whole(items.len());
    Ok(ApiResponse::success(
        "Bulk discounts",
        BulkDiscountList { items },
        Some(meta),
    ))
}

pub async fn update_bulk_discount(
    state: &AppState,
    user: &AuthUser,
    id: i64,
    payload: UpdateBulkDiscountRequest,
) -> AppResult<ApiResponse<BulkDiscount>> {
    ensure_admin(user)?;
    let existing = bulk_discounts::Entity::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let min_quantity = payload.min_quantity.unwrap_or(existing.min_quantity);
    let max_quantity = payload.max_quantity.unwrap_or(existing.max_quantity);
    let discount_percent = payload.discount_percent.unwrap_or(existing.discount_percent);
    validate_tier(min_quantity, max_quantity, discount_percent)?;

    let mut active: bulk_discounts::ActiveModel = existing.into();
    active.min_quantity = Set(min_quantity);
    active.max_quantity = Set(max_quantity);
    active.discount_percent = Set(discount_percent);
    let tier = active.update(&state.orm).await?;

    Ok(ApiResponse::success("Updated", tier.into(), Some(Meta::empty())))
}

/// Hard delete.
pub async fn delete_bulk_discount(
    state: &AppState,
    user: &AuthUser,
    id: i64,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;
    let result = bulk_discounts::Entity::delete_by_id(id)
        .exec(&state.orm)
        .await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    tracing::info!(tier_id = id, "bulk discount deleted");
    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({ "id": id }),
        Some(Meta::empty()),
    ))
}

fn validate_tier(min: i32, max: Option<i32>, percent: Decimal) -> AppResult<()> {
    if min < 1 {
        return Err(AppError::BadRequest(
            "min_quantity must be at least 1".to_string(),
        ));
    }
    if max.is_some_and(|max| max < min) {
        return Err(AppError::BadRequest(
            "max_quantity must not be below min_quantity".to_string(),
        ));
    }
    if percent.is_sign_negative() || percent > Decimal::ONE_HUNDRED {
        return Err(AppError::BadRequest(
            "discount_percent must be between 0 and 100".to_string(),
        ));
    }
    Ok(())
}
