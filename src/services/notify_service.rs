use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use crate::{
    dto::notifies::{CreateNotifyRequest, NotifyList, UnreadCount},
    entity::notifies,
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_admin},
    models::Notify,
    response::{ApiResponse, Meta},
    routes::params::NotifyQuery,
    services::require_non_blank,
    state::AppState,
};

pub async fn create_notify(
    state: &AppState,
    user: &AuthUser,
    payload: CreateNotifyRequest,
) -> AppResult<ApiResponse<Notify>> {
    ensure_admin(user)?;
    require_non_blank("title", &payload.title)?;

    let notify = notifies::ActiveModel {
        title: Set(payload.title),
        message: Set(payload.message),
        time: Set(payload.time),
        is_read: Set(false),
        notify_type: Set(payload.notify_type),
        ..Default::default()
    }
    .insert(&state.orm)
    .await?;

    tracing::debug!(notify_id = notify.id, "notification created");
    Ok(ApiResponse::success("Created", notify.into(), None))
}

pub async fn list_notifies(
    state: &AppState,
    user: &AuthUser,
    query: NotifyQuery,
) -> AppResult<ApiResponse<NotifyList>> {
    ensure_admin(user)?;
    let (page, limit, offset) = query.pagination().normalize();

    let mut finder = notifies::Entity::find();
    if query.unread_only.unwrap_or(false) {
        finder = finder.filter(notifies::Column::IsRead.eq(false));
    }
    let finder = finder
        .order_by_desc(notifies::Column::CreatedAt)
        .order_by_desc(notifies::Column::Id);

    let total = finder.clone().count(&state.orm).await? as i64;
    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Notify::from)
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success("Ok", NotifyList { items }, Some(meta)))
}

pub async fn mark_read(
    state: &AppState,
    user: &AuthUser,
    id: i64,
) -> AppResult<ApiResponse<Notify>> {
    ensure_admin(user)?;
    let existing = notifies::Entity::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let notify = if existing.is_read {
        existing
    } else {
        let mut active: notifies::ActiveModel = existing.into();
        active.is_read = Set(true);
        active.update(&state.orm).await?
    };

    Ok(ApiResponse::success("Ok", notify.into(), Some(Meta::empty())))
}

pub async fn unread_count(
    state: &AppState,
    user: &AuthUser,
) -> AppResult<ApiResponse<UnreadCount>> {
    ensure_admin(user)?;
    let unread = notifies::Entity::find()
        .filter(notifies::Column::IsRead.eq(false))
        .count(&state.orm)
        .await?;
    Ok(ApiResponse::success("Ok", UnreadCount { unread }, None))
}
