use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use crate::{
    dto::products::{CreateProductRequest, ProductList, UpdateProductRequest},
    entity::products::{ActiveModel, Column, Entity as Products, PublishStatus},
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_admin},
    models::Product,
    response::{ApiResponse, Meta},
    routes::params::{ProductQuery, ProductSortBy, SortOrder},
    services::{ensure_structured, require_non_blank},
    state::AppState,
};

/// Active catalogue: soft-deleted products never appear here.
pub async fn list_products(
    state: &AppState,
    query: ProductQuery,
) -> AppResult<ApiResponse<ProductList>> {
    let (page, limit, offset) = query.pagination().normalize();
    let mut condition = Condition::all().add(Column::IsDeleted.eq(false));

    if let Some(search) = query.q.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        condition = condition.add(
            Condition::any()
                .add(Column::Name.contains(search))
                .add(Column::Sku.contains(search)),
        );
    }
    if let Some(status) = query.publish_status {
        condition = condition.add(Column::PublishStatus.eq(status));
    }
    if let Some(featured) = query.is_featured {
        condition = condition.add(Column::IsFeatured.eq(featured));
    }
    if let Some(homepage) = query.show_on_homepage {
        condition = condition.add(Column::ShowOnHomepage.eq(homepage));
    }

    let sort_col = match query.sort_by.unwrap_or(ProductSortBy::CreatedAt) {
        ProductSortBy::CreatedAt => Column::CreatedAt,
        ProductSortBy::Price => Column::RetailPrice,
        ProductSortBy::Name => Column::Name,
    };

    let mut finder = Products::find().filter(condition);
    finder = match query.sort_order.unwrap_or(SortOrder::Desc) {
        SortOrder::Asc => finder.order_by_asc(sort_col),
        SortOrder::Desc => finder.order_by_desc(sort_col),
    };
    finder = finder.order_by_asc(Column::Id);

    let total = finder.clone().count(&state.orm).await? as i64;

    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Product::from)
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success("Products", ProductList { items }, Some(meta)))
}

/// Lookup by identity; soft-deleted products are still returned.
pub async fn get_product(state: &AppState, id: i64) -> AppResult<ApiResponse<Product>> {
    let product = Products::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Product", product.into(), None))
}

pub async fn get_product_by_sku(state: &AppState, sku: &str) -> AppResult<ApiResponse<Product>> {
    let product = Products::find()
        .filter(Column::Sku.eq(sku))
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Product", product.into(), None))
}

pub async fn create_product(
    state: &AppState,
    user: &AuthUser,
    payload: CreateProductRequest,
) -> AppResult<ApiResponse<Product>> {
    ensure_admin(user)?;
    let sku = payload.sku.trim().to_string();
    require_non_blank("sku", &sku)?;
    require_non_blank("name", &payload.name)?;
    validate_price_and_stock(Some(payload.retail_price), Some(payload.stock))?;
    validate_documents(
        payload.image.as_ref(),
        payload.descriptions.as_ref(),
        payload.videos.as_ref(),
        payload.specifications.as_ref(),
    )?;

    let taken = Products::find()
        .filter(Column::Sku.eq(sku.as_str()))
        .count(&state.orm)
        .await?;
    if taken > 0 {
        return Err(AppError::Conflict(format!("SKU {sku} already exists")));
    }

    let product = ActiveModel {
        sku: Set(sku),
        name: Set(payload.name),
        short_description: Set(payload.short_description),
        image: Set(payload.image),
        descriptions: Set(payload.descriptions),
        videos: Set(payload.videos),
        specifications: Set(payload.specifications),
        retail_price: Set(payload.retail_price),
        show_on_homepage: Set(payload.show_on_homepage),
        is_featured: Set(payload.is_featured),
        is_deleted: Set(false),
        publish_status: Set(payload.publish_status.unwrap_or(PublishStatus::Unpublished)),
        stock: Set(payload.stock),
        ..Default::default()
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(product_id = product.id, sku = %product.sku, "product created");
    Ok(ApiResponse::success(
        "Product created",
        product.into(),
        Some(Meta::empty()),
    ))
}

pub async fn update_product(
    state: &AppState,
    user: &AuthUser,
    id: i64,
    payload: UpdateProductRequest,
) -> AppResult<ApiResponse<Product>> {
    ensure_admin(user)?;
    validate_price_and_stock(payload.retail_price, payload.stock)?;
    validate_documents(
        payload.image.as_ref(),
        payload.descriptions.as_ref(),
        payload.videos.as_ref(),
        payload.specifications.as_ref(),
    )?;

    let existing = Products::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut active: ActiveModel = existing.into();
    if let Some(name) = payload.name {
        require_non_blank("name", &name)?;
        active.name = Set(name);
    }
    if let Some(short_description) = payload.short_description {
        active.short_description = Set(Some(short_description));
    }
    if let Some(image) = payload.image {
        active.image = Set(Some(image));
    }
    if let Some(descriptions) = payload.descriptions {
        active.descriptions = Set(Some(descriptions));
    }
    if let Some(videos) = payload.videos {
        active.videos = Set(Some(videos));
    }
    if let Some(specifications) = payload.specifications {
        active.specifications = Set(Some(specifications));
    }
    if let Some(price) = payload.retail_price {
        active.retail_price = Set(price);
    }
    if let Some(homepage) = payload.show_on_homepage {
        active.show_on_homepage = Set(homepage);
    }
    if let Some(featured) = payload.is_featured {
        active.is_featured = Set(featured);
    }
    if let Some(status) = payload.publish_status {
        active.publish_status = Set(status);
    }
    if let Some(stock) = payload.stock {
        active.stock = Set(stock);
    }

    let product = active.update(&state.orm).await?;

    tracing::info!(product_id = product.id, "product updated");
    Ok(ApiResponse::success(
        "Updated",
        product.into(),
        Some(Meta::empty()),
    ))
}

/// Soft delete. The row stays addressable by id and sku.
pub async fn delete_product(
    state: &AppState,
    user: &AuthUser,
    id: i64,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;
    let existing = Products::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    if !existing.is_deleted {
        let mut active: ActiveModel = existing.into();
        active.is_deleted = Set(true);
        active.update(&state.orm).await?;
        tracing::info!(product_id = id, "product soft-deleted");
    }

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({ "id": id }),
        Some(Meta::empty()),
    ))
}

fn validate_price_and_stock(price: Option<Decimal>, stock: Option<i32>) -> AppResult<()> {
    if price.is_some_and(|p| p.is_sign_negative()) {
        return Err(AppError::BadRequest(
            "retail_price must not be negative".to_string(),
        ));
    }
    if stock.is_some_and(|s| s < 0) {
        return Err(AppError::BadRequest("stock must not be negative".to_string()));
    }
    Ok(())
}

fn validate_documents(
    image: Option<&serde_json::Value>,
    descriptions: Option<&serde_json::Value>,
    videos: Option<&serde_json::Value>,
    specifications: Option<&serde_json::Value>,
) -> AppResult<()> {
    ensure_structured("image", image)?;
    ensure_structured("descriptions", descriptions)?;
    ensure_structured("videos", videos)?;
    ensure_structured("specifications", specifications)
}
