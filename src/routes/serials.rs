use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, patch, post},
};

use crate::{
    dto::catalog::{CreateSerialRequest, UpdateSerialStatusRequest},
    error::AppResult,
    middleware::auth::AuthUser,
    models::ProductSerial,
    response::ApiResponse,
    services::serial_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_serial))
        .route("/by-serial/{serial}", get(get_serial))
        .route("/{id}/status", patch(update_status))
}

#[utoipa::path(
    post,
    path = "/api/serials",
    request_body = CreateSerialRequest,
    responses(
        (status = 200, description = "Serial created", body = ApiResponse<ProductSerial>),
        (status = 409, description = "Serial already exists")
    ),
    security(("bearer_auth" = [])),
    tag = "Serials"
)]
pub async fn create_serial(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateSerialRequest>,
) -> AppResult<Json<ApiResponse<ProductSerial>>> {
    let resp = serial_service::create_serial(&state, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/serials/by-serial/{serial}",
    params(("serial" = String, Path, description = "Serial number")),
    responses(
        (status = 200, description = "Serial", body = ApiResponse<ProductSerial>),
        (status = 404, description = "Not found")
    ),
    tag = "Serials"
)]
pub async fn get_serial(
    State(state): State<AppState>,
    Path(serial): Path<String>,
) -> AppResult<Json<ApiResponse<ProductSerial>>> {
    let resp = serial_service::get_by_serial(&state, &serial).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/api/serials/{id}/status",
    params(("id" = i64, Path, description = "Serial ID")),
    request_body = UpdateSerialStatusRequest,
    responses(
        (status = 200, description = "Status changed", body = ApiResponse<ProductSerial>)
    ),
    security(("bearer_auth" = [])),
    tag = "Serials"
)]
pub async fn update_status(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateSerialStatusRequest>,
) -> AppResult<Json<ApiResponse<ProductSerial>>> {
    let resp = serial_service::update_serial_status(&state, &user, id, payload).await?;
    Ok(Json(resp))
}
