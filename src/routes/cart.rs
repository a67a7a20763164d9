use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get},
};

use crate::{
    dto::cart::{CartList, PutCartItemRequest},
    error::AppResult,
    middleware::auth::AuthUser,
    models::CartItem,
    response::ApiResponse,
    services::cart_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(cart_list).put(put_cart_item))
        .route("/{product_id}", delete(remove_cart_item))
}

#[utoipa::path(
    get,
    path = "/api/cart",
    responses(
        (status = 200, description = "Cart of the calling dealer", body = ApiResponse<CartList>)
    ),
    security(("bearer_auth" = [])),
    tag = "Cart"
)]
pub async fn cart_list(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<CartList>>> {
    let resp = cart_service::list_cart(&state, &user).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/cart",
    request_body = PutCartItemRequest,
    responses(
        (status = 200, description = "Cart line stored", body = ApiResponse<CartItem>),
        (status = 400, description = "Unknown product or invalid quantity")
    ),
    security(("bearer_auth" = [])),
    tag = "Cart"
)]
pub async fn put_cart_item(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<PutCartItemRequest>,
) -> AppResult<Json<ApiResponse<CartItem>>> {
    let resp = cart_service::put_cart_item(&state, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/cart/{product_id}",
    params(("product_id" = i64, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Cart line removed"),
        (status = 404, description = "Not in cart")
    ),
    security(("bearer_auth" = [])),
    tag = "Cart"
)]
pub async fn remove_cart_item(
    State(state): State<AppState>,
    user: AuthUser,
    Path(product_id): Path<i64>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = cart_service::remove_cart_item(&state, &user, product_id).await?;
    Ok(Json(resp))
}
