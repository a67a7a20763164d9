use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait, sea_query::OnConflict,
};

use crate::{
    dto::cart::{CartList, PutCartItemRequest},
    entity::{
        dealer_cart_items::{self, DealerCartItemId},
        product_of_carts, products,
    },
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_dealer},
    models::CartItem,
    response::{ApiResponse, Meta},
    state::AppState,
};

/// Lines whose product has since been soft-deleted are left out.
pub async fn list_cart(state: &AppState, user: &AuthUser) -> AppResult<ApiResponse<CartList>> {
    ensure_dealer(user)?;

    let rows = dealer_cart_items::Entity::find()
        .filter(dealer_cart_items::Column::IdDealer.eq(user.account_id))
        .order_by_desc(dealer_cart_items::Column::CreatedAt)
        .find_also_related(product_of_carts::Entity)
        .all(&state.orm)
        .await?;

    let product_ids: Vec<i64> = rows
        .iter()
        .filter_map(|(_, offer)| offer.as_ref().map(|o| o.id_product))
        .collect();
    let by_id: HashMap<i64, products::Model> = products::Entity::find()
        .filter(products::Column::Id.is_in(product_ids))
        .filter(products::Column::IsDeleted.eq(false))
        .all(&state.orm)
        .await?
        .into_iter()
        .map(|p| (p.id, p))
        .collect();

    let items: Vec<CartItem> = rows
        .into_iter()
        .filter_map(|(item, offer)| {
            let product = by_id.get(&offer?.id_product)?.clone();
            Some(CartItem::new(item, product))
        })
        .collect();

    let meta = Meta::whole(items.len());
    Ok(ApiResponse::success("OK", CartList { items }, Some(meta)))
}

/// Upsert keyed by (dealer, product_of_cart): the quantity of an existing row
/// is replaced, otherwise a row is created.
pub async fn put_cart_item(
    state: &AppState,
    user: &AuthUser,
    payload: PutCartItemRequest,
) -> AppResult<ApiResponse<CartItem>> {
    ensure_dealer(user)?;
    if payload.quantity <= 0 {
        return Err(AppError::BadRequest(
            "quantity must be greater than 0".to_string(),
        ));
    }

    let product = products::Entity::find_by_id(payload.product_id)
        .one(&state.orm)
        .await?
        .filter(|p| !p.is_deleted)
        .ok_or_else(|| AppError::BadRequest("product not found".to_string()))?;

    let txn = state.orm.begin().await?;
    let offer = offer_for_product(&txn, product.id).await?;
    let key = DealerCartItemId::new(user.account_id, offer.id);

    let item = match dealer_cart_items::Entity::find_by_id(<(i64, i64)>::from(key))
        .one(&txn)
        .await?
    {
        Some(existing) => {
            let mut active: dealer_cart_items::ActiveModel = existing.into();
            active.quantity = Set(payload.quantity);
            active.update(&txn).await?
        }
        None => {
            dealer_cart_items::ActiveModel {
                id_dealer: Set(key.id_dealer),
                id_product_of_cart: Set(key.id_product_of_cart),
                quantity: Set(payload.quantity),
                ..Default::default()
            }
            .insert(&txn)
            .await?
        }
    };
    txn.commit().await?;

    tracing::debug!(
        dealer_id = key.id_dealer,
        product_of_cart_id = key.id_product_of_cart,
        quantity = item.quantity,
        "cart item stored"
    );
    Ok(ApiResponse::success("OK", CartItem::new(item, product), None))
}

pub async fn remove_cart_item(
    state: &AppState,
    user: &AuthUser,
    product_id: i64,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_dealer(user)?;

    let offer = find_offer(&state.orm, product_id)
        .await?
        .ok_or(AppError::NotFound)?;

    let key = DealerCartItemId::new(user.account_id, offer.id);
    let result = dealer_cart_items::Entity::delete_by_id(<(i64, i64)>::from(key))
        .exec(&state.orm)
        .await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    Ok(ApiResponse::success(
        "Removed",
        serde_json::json!({ "product_id": product_id }),
        Some(Meta::empty()),
    ))
}

/// Each product has one cart offer row; it is created on first use. A
/// concurrent first use loses the insert on the unique `id_product` and reads
/// the winner's row.
async fn offer_for_product<C: ConnectionTrait>(
    conn: &C,
    product_id: i64,
) -> AppResult<product_of_carts::Model> {
    if let Some(offer) = find_offer(conn, product_id).await? {
        return Ok(offer);
    }

    product_of_carts::Entity::insert(product_of_carts::ActiveModel {
        id_product: Set(product_id),
        ..Default::default()
    })
    .on_conflict(
        OnConflict::column(product_of_carts::Column::IdProduct)
            .do_nothing()
            .to_owned(),
    )
    .exec_without_returning(conn)
    .await?;

    find_offer(conn, product_id).await?.ok_or_else(|| {
        AppError::Internal(anyhow::anyhow!(
            "cart offer for product {product_id} missing"
        ))
    })
}

async fn find_offer<C: ConnectionTrait>(
    conn: &C,
    product_id: i64,
) -> AppResult<Option<product_of_carts::Model>> {
    Ok(product_of_carts::Entity::find()
        .filter(product_of_carts::Column::IdProduct.eq(product_id))
        .one(conn)
        .await?)
}
