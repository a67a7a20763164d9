use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, patch, post},
};

use crate::{
    dto::accounts::{
        CreateAdminRequest, DealerList, RegisterDealerRequest, SetEnabledRequest,
        UpdateDealerRequest,
    },
    error::AppResult,
    middleware::auth::AuthUser,
    models::{Account, Admin, Dealer},
    response::ApiResponse,
    routes::params::Pagination,
    services::account_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admins", post(create_admin))
        .route("/admins/{id}", get(get_admin))
        .route("/dealers", get(list_dealers).post(register_dealer))
        .route("/dealers/{id}", get(get_dealer).put(update_dealer))
        .route("/{id}/enabled", patch(set_enabled))
}

#[utoipa::path(
    post,
    path = "/api/accounts/admins",
    request_body = CreateAdminRequest,
    responses(
        (status = 200, description = "Admin created", body = ApiResponse<Admin>),
        (status = 409, description = "Username taken")
    ),
    security(("bearer_auth" = [])),
    tag = "Accounts"
)]
pub async fn create_admin(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateAdminRequest>,
) -> AppResult<Json<ApiResponse<Admin>>> {
    let resp = account_service::create_admin(&state, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/accounts/admins/{id}",
    params(("id" = i64, Path, description = "Account ID")),
    responses(
        (status = 200, description = "Admin", body = ApiResponse<Admin>),
        (status = 404, description = "Not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Accounts"
)]
pub async fn get_admin(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Admin>>> {
    let resp = account_service::get_admin(&state, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/accounts/dealers",
    request_body = RegisterDealerRequest,
    responses(
        (status = 200, description = "Dealer registered", body = ApiResponse<Dealer>),
        (status = 409, description = "Username or phone taken")
    ),
    tag = "Accounts"
)]
pub async fn register_dealer(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDealerRequest>,
) -> AppResult<Json<ApiResponse<Dealer>>> {
    let resp = account_service::register_dealer(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/accounts/dealers",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20")
    ),
    responses(
        (status = 200, description = "Dealers", body = ApiResponse<DealerList>)
    ),
    security(("bearer_auth" = [])),
    tag = "Accounts"
)]
pub async fn list_dealers(
    State(state): State<AppState>,
    user: AuthUser,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<ApiResponse<DealerList>>> {
    let resp = account_service::list_dealers(&state, &user, pagination).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/accounts/dealers/{id}",
    params(("id" = i64, Path, description = "Account ID")),
    responses(
        (status = 200, description = "Dealer", body = ApiResponse<Dealer>),
        (status = 404, description = "Not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Accounts"
)]
pub async fn get_dealer(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Dealer>>> {
    let resp = account_service::get_dealer(&state, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/accounts/dealers/{id}",
    params(("id" = i64, Path, description = "Account ID")),
    request_body = UpdateDealerRequest,
    responses(
        (status = 200, description = "Dealer updated", body = ApiResponse<Dealer>)
    ),
    security(("bearer_auth" = [])),
    tag = "Accounts"
)]
pub async fn update_dealer(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateDealerRequest>,
) -> AppResult<Json<ApiResponse<Dealer>>> {
    let resp = account_service::update_dealer(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/api/accounts/{id}/enabled",
    params(("id" = i64, Path, description = "Account ID")),
    request_body = SetEnabledRequest,
    responses(
        (status = 200, description = "Account updated", body = ApiResponse<Account>)
    ),
    security(("bearer_auth" = [])),
    tag = "Accounts"
)]
pub async fn set_enabled(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<SetEnabledRequest>,
) -> AppResult<Json<ApiResponse<Account>>> {
    let resp = account_service::set_account_enabled(&state, &user, id, payload).await?;
    Ok(Json(resp))
}
