use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, patch},
};

use crate::{
    dto::notifies::{CreateNotifyRequest, NotifyList, UnreadCount},
    error::AppResult,
    middleware::auth::AuthUser,
    models::Notify,
    response::ApiResponse,
    routes::params::NotifyQuery,
    services::notify_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_notifies).post(create_notify))
        .route("/unread-count", get(unread_count))
        .route("/{id}/read", patch(mark_read))
}

#[utoipa::path(
    get,
    path = "/api/notifies",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20"),
        ("unread_only" = Option<bool>, Query, description = "Unread notifications only")
    ),
    responses(
        (status = 200, description = "Notifications", body = ApiResponse<NotifyList>)
    ),
    security(("bearer_auth" = [])),
    tag = "Notifications"
)]
pub async fn list_notifies(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<NotifyQuery>,
) -> AppResult<Json<ApiResponse<NotifyList>>> {
    let resp = notify_service::list_notifies(&state, &user, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/notifies",
    request_body = CreateNotifyRequest,
    responses(
        (status = 200, description = "Notification created", body = ApiResponse<Notify>)
    ),
    security(("bearer_auth" = [])),
    tag = "Notifications"
)]
pub async fn create_notify(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateNotifyRequest>,
) -> AppResult<Json<ApiResponse<Notify>>> {
    let resp = notify_service::create_notify(&state, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/notifies/unread-count",
    responses(
        (status = 200, description = "Number of unread notifications", body = ApiResponse<UnreadCount>)
    ),
    security(("bearer_auth" = [])),
    tag = "Notifications"
)]
pub async fn unread_count(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<UnreadCount>>> {
    let resp = notify_service::unread_count(&state, &user).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/api/notifies/{id}/read",
    params(("id" = i64, Path, description = "Notification ID")),
    responses(
        (status = 200, description = "Marked as read", body = ApiResponse<Notify>)
    ),
    security(("bearer_auth" = [])),
    tag = "Notifications"
)]
pub async fn mark_read(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Notify>>> {
    let resp = notify_service::mark_read(&state, &user, id).await?;
    Ok(Json(resp))
}
