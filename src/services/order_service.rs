use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, ModelTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};

use crate::{
    dto::orders::{
        CreateOrderRequest, OrderList, OrderWithItems, UpdateOrderItemStatusRequest,
        UpdatePaymentStatusRequest,
    },
    entity::{
        order_items::{self, OrderItemStatus},
        orders::{self, PaymentStatus},
        products,
    },
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_admin, ensure_dealer},
    models::{Order, OrderItem},
    response::{ApiResponse, Meta},
    routes::params::{OrderListQuery, SortOrder},
    services::generate_code,
    state::AppState,
};

pub async fn list_orders(
    state: &AppState,
    user: &AuthUser,
    query: OrderListQuery,
) -> AppResult<ApiResponse<OrderList>> {
    let (page, limit, offset) = query.pagination().normalize();

    let mut condition = Condition::all().add(orders::Column::IsDeleted.eq(false));
    if !user.is_admin() {
        condition = condition.add(orders::Column::IdDealer.eq(user.account_id));
    }
    if let Some(status) = query.payment_status {
        condition = condition.add(orders::Column::PaymentStatus.eq(status));
    }

    let mut finder = orders::Entity::find().filter(condition);
    finder = match query.sort_order.unwrap_or(SortOrder::Desc) {
        SortOrder::Asc => finder.order_by_asc(orders::Column::CreatedAt),
        SortOrder::Desc => finder.order_by_desc(orders::Column::CreatedAt),
    };

    let total = finder.clone().count(&state.orm).await? as i64;

    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Order::from)
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success("Ok", OrderList { items }, Some(meta)))
}

/// Places an order for the calling dealer. Lines are priced at the current
/// retail price; the order and its lines are written in one transaction.
pub async fn create_order(
    state: &AppState,
    user: &AuthUser,
    payload: CreateOrderRequest,
) -> AppResult<ApiResponse<OrderWithItems>> {
    ensure_dealer(user)?;
    if payload.items.is_empty() {
        return Err(AppError::BadRequest("Order has no items".into()));
    }
    if payload.items.iter().any(|line| line.quantity <= 0) {
        return Err(AppError::BadRequest(
            "quantity must be greater than 0".into(),
        ));
    }

    let order_code = match payload.order_code {
        Some(code) => {
            let code = code.trim().to_string();
            if code.is_empty() {
                return Err(AppError::BadRequest("order_code must not be blank".into()));
            }
            code
        }
        None => generate_code("ORD"),
    };

    let txn = state.orm.begin().await?;

    let taken = orders::Entity::find()
        .filter(orders::Column::OrderCode.eq(order_code.as_str()))
        .count(&txn)
        .await?;
    if taken > 0 {
        return Err(AppError::Conflict(format!(
            "order code {order_code} already exists"
        )));
    }

    let order = orders::ActiveModel {
        order_code: Set(order_code),
        payment_status: Set(PaymentStatus::Unpaid),
        is_deleted: Set(false),
        id_dealer: Set(user.account_id),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    let mut items = Vec::with_capacity(payload.items.len());
    for line in &payload.items {
        let product = products::Entity::find_by_id(line.product_id)
            .one(&txn)
            .await?
            .filter(|p| !p.is_deleted)
            .ok_or_else(|| {
                AppError::BadRequest(format!("product {} not found", line.product_id))
            })?;

        let item = order_items::ActiveModel {
            id_order: Set(order.id),
            id_product: Set(product.id),
            quantity: Set(line.quantity),
            unit_price: Set(product.retail_price),
            status: Set(OrderItemStatus::Pending),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        items.push(OrderItem::from(item));
    }

    txn.commit().await?;

    tracing::info!(
        order_id = order.id,
        dealer_id = order.id_dealer,
        code = %order.order_code,
        lines = items.len(),
        "order created"
    );
    Ok(ApiResponse::success(
        "Order created",
        OrderWithItems {
            order: order.into(),
            items,
        },
        None,
    ))
}

/// Lookup by identity; soft-deleted orders are still returned. Dealers only
/// see their own orders.
pub async fn get_order(
    state: &AppState,
    user: &AuthUser,
    id: i64,
) -> AppResult<ApiResponse<OrderWithItems>> {
    let order = orders::Entity::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    if !user.is_admin() && order.id_dealer != user.account_id {
        return Err(AppError::NotFound);
    }

    let items = order
        .find_related(order_items::Entity)
        .order_by_asc(order_items::Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(OrderItem::from)
        .collect();

    Ok(ApiResponse::success(
        "Ok",
        OrderWithItems {
            order: order.into(),
            items,
        },
        None,
    ))
}

pub async fn update_payment_status(
    state: &AppState,
    user: &AuthUser,
    id: i64,
    payload: UpdatePaymentStatusRequest,
) -> AppResult<ApiResponse<Order>> {
    ensure_admin(user)?;
    let existing = orders::Entity::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut active: orders::ActiveModel = existing.into();
    active.payment_status = Set(payload.payment_status);
    let order = active.update(&state.orm).await?;

    tracing::info!(order_id = id, status = ?order.payment_status, "payment status changed");
    Ok(ApiResponse::success("Updated", order.into(), Some(Meta::empty())))
}

pub async fn update_order_item_status(
    state: &AppState,
    user: &AuthUser,
    order_id: i64,
    item_id: i64,
    payload: UpdateOrderItemStatusRequest,
) -> AppResult<ApiResponse<OrderItem>> {
    ensure_admin(user)?;
    let existing = order_items::Entity::find_by_id(item_id)
        .filter(order_items::Column::IdOrder.eq(order_id))
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut active: order_items::ActiveModel = existing.into();
    active.status = Set(payload.status);
    let item = active.update(&state.orm).await?;

    tracing::info!(order_id, item_id, status = ?item.status, "order item status changed");
    Ok(ApiResponse::success("Updated", item.into(), Some(Meta::empty())))
}

/// Soft delete.
pub async fn delete_order(
    state: &AppState,
    user: &AuthUser,
    id: i64,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;
    let existing = orders::Entity::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    if !existing.is_deleted {
        let mut active: orders::ActiveModel = existing.into();
        active.is_deleted = Set(true);
        active.update(&state.orm).await?;
        tracing::info!(order_id = id, "order soft-deleted");
    }

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({ "id": id }),
        Some(Meta::empty()),
    ))
}
