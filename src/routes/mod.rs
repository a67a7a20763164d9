use axum::{
    Json, Router,
    http::{StatusCode, Uri},
    routing::get,
};

use crate::{
    response::{ApiResponse, Meta},
    state::AppState,
};

pub mod accounts;
pub mod auth;
pub mod blogs;
pub mod bulk_discounts;
pub mod cart;
pub mod doc;
pub mod health;
pub mod notifies;
pub mod orders;
pub mod params;
pub mod products;
pub mod serials;
pub mod warranties;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/accounts", accounts::router())
        .nest("/products", products::router())
        .nest("/serials", serials::router())
        .nest("/warranties", warranties::router())
        .nest("/bulk-discounts", bulk_discounts::router())
        .nest("/blogs", blogs::router())
        .nest("/category-blogs", blogs::category_router())
        .nest("/cart", cart::router())
        .nest("/orders", orders::router())
        .nest("/notifies", notifies::router())
}

/// Full application router with state bound; transport layers are added by the binary.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", create_api_router())
        .merge(doc::scalar_docs())
        .fallback(not_found)
        .with_state(state)
}

async fn not_found(uri: Uri) -> (StatusCode, Json<ApiResponse<serde_json::Value>>) {
    let body = ApiResponse::success(
        "Not Found",
        serde_json::json!({ "path": uri.path() }),
        Some(Meta::empty()),
    );
    (StatusCode::NOT_FOUND, Json(body))
}
