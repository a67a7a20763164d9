use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};

use crate::{
    dto::catalog::RegisterWarrantyRequest,
    error::AppResult,
    models::Warranty,
    response::ApiResponse,
    services::warranty_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(register_warranty))
        .route("/serial/{serial}", get(get_for_serial))
        .route("/{code}", get(get_by_code))
}

#[utoipa::path(
    post,
    path = "/api/warranties",
    request_body = RegisterWarrantyRequest,
    responses(
        (status = 200, description = "Warranty registered", body = ApiResponse<Warranty>),
        (status = 400, description = "Unknown serial"),
        (status = 409, description = "Serial already has a warranty")
    ),
    tag = "Warranties"
)]
pub async fn register_warranty(
    State(state): State<AppState>,
    Json(payload): Json<RegisterWarrantyRequest>,
) -> AppResult<Json<ApiResponse<Warranty>>> {
    let resp = warranty_service::register_warranty(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/warranties/{code}",
    params(("code" = String, Path, description = "Warranty code")),
    responses(
        (status = 200, description = "Warranty", body = ApiResponse<Warranty>),
        (status = 404, description = "Not found")
    ),
    tag = "Warranties"
)]
pub async fn get_by_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<Json<ApiResponse<Warranty>>> {
    let resp = warranty_service::get_by_code(&state, &code).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/warranties/serial/{serial}",
    params(("serial" = String, Path, description = "Serial number")),
    responses(
        (status = 200, description = "Warranty of the serial", body = ApiResponse<Warranty>),
        (status = 404, description = "Not found")
    ),
    tag = "Warranties"
)]
pub async fn get_for_serial(
    State(state): State<AppState>,
    Path(serial): Path<String>,
) -> AppResult<Json<ApiResponse<Warranty>>> {
    let resp = warranty_service::get_for_serial(&state, &serial).await?;
    Ok(Json(resp))
}
