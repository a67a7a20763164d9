use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, patch},
};

use crate::{
    dto::orders::{
        CreateOrderRequest, OrderList, OrderWithItems, UpdateOrderItemStatusRequest,
        UpdatePaymentStatusRequest,
    },
    error::AppResult,
    middleware::auth::AuthUser,
    models::{Order, OrderItem},
    response::ApiResponse,
    routes::params::OrderListQuery,
    services::order_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_orders).post(create_order))
        .route("/{id}", get(get_order).delete(delete_order))
        .route("/{id}/payment-status", patch(update_payment_status))
        .route("/{id}/items/{item_id}/status", patch(update_item_status))
}

#[utoipa::path(
    get,
    path = "/api/orders",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20"),
        ("payment_status" = Option<String>, Query, description = "PAID or UNPAID"),
        ("sort_order" = Option<String>, Query, description = "asc | desc")
    ),
    responses(
        (status = 200, description = "Active orders", body = ApiResponse<OrderList>)
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn list_orders(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<OrderListQuery>,
) -> AppResult<Json<ApiResponse<OrderList>>> {
    let resp = order_service::list_orders(&state, &user, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Order placed", body = ApiResponse<OrderWithItems>),
        (status = 400, description = "Invalid lines"),
        (status = 409, description = "Order code taken")
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateOrderRequest>,
) -> AppResult<Json<ApiResponse<OrderWithItems>>> {
    let resp = order_service::create_order(&state, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    params(("id" = i64, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order with items", body = ApiResponse<OrderWithItems>),
        (status = 404, description = "Not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<OrderWithItems>>> {
    let resp = order_service::get_order(&state, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/api/orders/{id}/payment-status",
    params(("id" = i64, Path, description = "Order ID")),
    request_body = UpdatePaymentStatusRequest,
    responses(
        (status = 200, description = "Payment status changed", body = ApiResponse<Order>)
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn update_payment_status(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdatePaymentStatusRequest>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let resp = order_service::update_payment_status(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/api/orders/{id}/items/{item_id}/status",
    params(
        ("id" = i64, Path, description = "Order ID"),
        ("item_id" = i64, Path, description = "Order item ID")
    ),
    request_body = UpdateOrderItemStatusRequest,
    responses(
        (status = 200, description = "Item status changed", body = ApiResponse<OrderItem>)
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn update_item_status(
    State(state): State<AppState>,
    user: AuthUser,
    Path((id, item_id)): Path<(i64, i64)>,
    Json(payload): Json<UpdateOrderItemStatusRequest>,
) -> AppResult<Json<ApiResponse<OrderItem>>> {
    let resp = order_service::update_order_item_status(&state, &user, id, item_id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/orders/{id}",
    params(("id" = i64, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order hidden from listings")
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn delete_order(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = order_service::delete_order(&state, &user, id).await?;
    Ok(Json(resp))
}
