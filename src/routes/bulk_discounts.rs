use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{post, put},
};

use crate::{
    dto::catalog::{CreateBulkDiscountRequest, UpdateBulkDiscountRequest},
    error::AppResult,
    middleware::auth::AuthUser,
    models::BulkDiscount,
    response::ApiResponse,
    services::bulk_discount_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_bulk_discount))
        .route("/{id}", put(update_bulk_discount).delete(delete_bulk_discount))
}

#[utoipa::path(
    post,
    path = "/api/bulk-discounts",
    request_body = CreateBulkDiscountRequest,
    responses(
        (status = 200, description = "Tier created", body = ApiResponse<BulkDiscount>),
        (status = 400, description = "Invalid tier bounds")
    ),
    security(("bearer_auth" = [])),
    tag = "Bulk discounts"
)]
pub async fn create_bulk_discount(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateBulkDiscountRequest>,
) -> AppResult<Json<ApiResponse<BulkDiscount>>> {
    let resp = bulk_discount_service::create_bulk_discount(&state, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/bulk-discounts/{id}",
    params(("id" = i64, Path, description = "Tier ID")),
    request_body = UpdateBulkDiscountRequest,
    responses(
        (status = 200, description = "Tier updated", body = ApiResponse<BulkDiscount>)
    ),
    security(("bearer_auth" = [])),
    tag = "Bulk discounts"
)]
pub async fn update_bulk_discount(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateBulkDiscountRequest>,
) -> AppResult<Json<ApiResponse<BulkDiscount>>> {
    let resp = bulk_discount_service::update_bulk_discount(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/bulk-discounts/{id}",
    params(("id" = i64, Path, description = "Tier ID")),
    responses(
        (status = 200, description = "Tier removed"),
        (status = 404, description = "Not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Bulk discounts"
)]
pub async fn delete_bulk_discount(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = bulk_discount_service::delete_bulk_discount(&state, &user, id).await?;
    Ok(Json(resp))
}
