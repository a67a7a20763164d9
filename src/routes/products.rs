use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};

use crate::{
    dto::{
        catalog::{BulkDiscountList, SerialList, SerialQuery},
        products::{CreateProductRequest, ProductList, UpdateProductRequest},
    },
    error::AppResult,
    middleware::auth::AuthUser,
    models::Product,
    response::ApiResponse,
    routes::params::ProductQuery,
    services::{bulk_discount_service, product_service, serial_service},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/sku/{sku}", get(get_product_by_sku))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/{id}/serials", get(list_serials))
        .route("/{id}/bulk-discounts", get(list_bulk_discounts))
}

#[utoipa::path(
    get,
    path = "/api/products",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20"),
        ("q" = Option<String>, Query, description = "Search by name or SKU"),
        ("publish_status" = Option<String>, Query, description = "PUBLISHED or UNPUBLISHED"),
        ("is_featured" = Option<bool>, Query, description = "Featured products only"),
        ("show_on_homepage" = Option<bool>, Query, description = "Homepage products only"),
        ("sort_by" = Option<String>, Query, description = "created_at | price | name"),
        ("sort_order" = Option<String>, Query, description = "asc | desc")
    ),
    responses(
        (status = 200, description = "List products", body = ApiResponse<ProductList>)
    ),
    tag = "Products"
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> AppResult<Json<ApiResponse<ProductList>>> {
    let resp = product_service::list_products(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(("id" = i64, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Get product", body = ApiResponse<Product>),
        (status = 404, description = "Product not found"),
    ),
    tag = "Products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let resp = product_service::get_product(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/products/sku/{sku}",
    params(("sku" = String, Path, description = "Product SKU")),
    responses(
        (status = 200, description = "Get product", body = ApiResponse<Product>),
        (status = 404, description = "Product not found"),
    ),
    tag = "Products"
)]
pub async fn get_product_by_sku(
    State(state): State<AppState>,
    Path(sku): Path<String>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let resp = product_service::get_product_by_sku(&state, &sku).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/products",
    request_body = CreateProductRequest,
    responses(
        (status = 200, description = "Create product", body = ApiResponse<Product>),
        (status = 409, description = "SKU already exists")
    ),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateProductRequest>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let resp = product_service::create_product(&state, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/products/{id}",
    params(("id" = i64, Path, description = "Product ID")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Updated product", body = ApiResponse<Product>)
    ),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
pub async fn update_product(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateProductRequest>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let resp = product_service::update_product(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    params(("id" = i64, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product hidden from listings")
    ),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = product_service::delete_product(&state, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}/serials",
    params(
        ("id" = i64, Path, description = "Product ID"),
        ("status" = Option<String>, Query, description = "Serial status filter")
    ),
    responses(
        (status = 200, description = "Serials of the product", body = ApiResponse<SerialList>)
    ),
    tag = "Serials"
)]
pub async fn list_serials(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<SerialQuery>,
) -> AppResult<Json<ApiResponse<SerialList>>> {
    let resp = serial_service::list_for_product(&state, id, query.status).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}/bulk-discounts",
    params(("id" = i64, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Discount tiers of the product", body = ApiResponse<BulkDiscountList>)
    ),
    tag = "Bulk discounts"
)]
pub async fn list_bulk_discounts(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<BulkDiscountList>>> {
    let resp = bulk_discount_service::list_for_product(&state, id).await?;
    Ok(Json(resp))
}
