use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, ModelTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};

use crate::{
    dto::blogs::{
        BlogList, CategoryList, CategoryWithBlogs, CreateBlogRequest, CreateCategoryRequest,
        UpdateBlogRequest,
    },
    entity::{blogs, category_blogs},
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_admin},
    models::{Blog, CategoryBlog},
    response::{ApiResponse, Meta},
    routes::params::BlogQuery,
    services::{ensure_structured, require_non_blank},
    state::AppState,
};

pub async fn create_category(
    state: &AppState,
    user: &AuthUser,
    payload: CreateCategoryRequest,
) -> AppResult<ApiResponse<CategoryBlog>> {
    ensure_admin(user)?;
    require_non_blank("name", &payload.name)?;

    let category = category_blogs::ActiveModel {
        name: Set(payload.name.trim().to_string()),
        ..Default::default()
    }
    .insert(&state.orm)
    .await?;

    Ok(ApiResponse::success("Category created", category.into(), None))
}

pub async fn list_categories(state: &AppState) -> AppResult<ApiResponse<CategoryList>> {
    let items: Vec<CategoryBlog> = category_blogs::Entity::find()
        .order_by_asc(category_blogs::Column::Name)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(CategoryBlog::from)
        .collect();

    let meta = Meta::whole(items.len());
    Ok(ApiResponse::success("Categories", CategoryList { items }, Some(meta)))
}

/// A category with its active blogs.
pub async fn get_category(
    state: &AppState,
    id: i64,
) -> AppResult<ApiResponse<CategoryWithBlogs>> {
    let category = category_blogs::Entity::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let blogs = category
        .find_related(blogs::Entity)
        .filter(blogs::Column::IsDeleted.eq(false))
        .order_by_desc(blogs::Column::CreatedAt)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Blog::from)
        .collect();

    Ok(ApiResponse::success(
        "Category",
        CategoryWithBlogs {
            category: category.into(),
            blogs,
        },
        None,
    ))
}

pub async fn create_blog(
    state: &AppState,
    user: &AuthUser,
    payload: CreateBlogRequest,
) -> AppResult<ApiResponse<Blog>> {
    ensure_admin(user)?;
    require_non_blank("title", &payload.title)?;
    ensure_structured("image", payload.image.as_ref())?;
    ensure_structured("introduction", payload.introduction.as_ref())?;
    if let Some(category_id) = payload.category_id {
        ensure_category_exists(state, category_id).await?;
    }

    let blog = blogs::ActiveModel {
        title: Set(payload.title),
        description: Set(payload.description),
        image: Set(payload.image),
        introduction: Set(payload.introduction),
        show_on_homepage: Set(payload.show_on_homepage),
        is_deleted: Set(false),
        id_category_blog: Set(payload.category_id),
        ..Default::default()
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(blog_id = blog.id, "blog created");
    Ok(ApiResponse::success("Blog created", blog.into(), None))
}

/// Lookup by identity; soft-deleted blogs are still returned.
pub async fn get_blog(state: &AppState, id: i64) -> AppResult<ApiResponse<Blog>> {
    let blog = blogs::Entity::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Blog", blog.into(), None))
}

pub async fn list_blogs(state: &AppState, query: BlogQuery) -> AppResult<ApiResponse<BlogList>> {
    let (page, limit, offset) = query.pagination().normalize();

    let mut condition = Condition::all().add(blogs::Column::IsDeleted.eq(false));
    if let Some(category_id) = query.category_id {
        condition = condition.add(blogs::Column::IdCategoryBlog.eq(category_id));
    }
    if let Some(homepage) = query.show_on_homepage {
        condition = condition.add(blogs::Column::ShowOnHomepage.eq(homepage));
    }

    let finder = blogs::Entity::find()
        .filter(condition)
        .order_by_desc(blogs::Column::CreatedAt)
        .order_by_desc(blogs::Column::Id);
    let total = finder.clone().count(&state.orm).await? as i64;

    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Blog::from)
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success("Blogs", BlogList { items }, Some(meta)))
}

pub async fn update_blog(
    state: &AppState,
    user: &AuthUser,
    id: i64,
    payload: UpdateBlogRequest,
) -> AppResult<ApiResponse<Blog>> {
    ensure_admin(user)?;
    ensure_structured("image", payload.image.as_ref())?;
    ensure_structured("introduction", payload.introduction.as_ref())?;

    let existing = blogs::Entity::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut active: blogs::ActiveModel = existing.into();
    if let Some(title) = payload.title {
        require_non_blank("title", &title)?;
        active.title = Set(title);
    }
    if let Some(description) = payload.description {
        active.description = Set(Some(description));
    }
    if let Some(image) = payload.image {
        active.image = Set(Some(image));
    }
    if let Some(introduction) = payload.introduction {
        active.introduction = Set(Some(introduction));
    }
    if let Some(homepage) = payload.show_on_homepage {
        active.show_on_homepage = Set(homepage);
    }
    if let Some(category_id) = payload.category_id {
        ensure_category_exists(state, category_id).await?;
        active.id_category_blog = Set(Some(category_id));
    }

    let blog = active.update(&state.orm).await?;
    Ok(ApiResponse::success("Updated", blog.into(), Some(Meta::empty())))
}

/// Soft delete.
pub async fn delete_blog(
    state: &AppState,
    user: &AuthUser,
    id: i64,
) -> AppResult<ApiResponse<serde_json::Value>> {
    ensure_admin(user)?;
    let existing = blogs::Entity::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    if !existing.is_deleted {
        let mut active: blogs::ActiveModel = existing.into();
        active.is_deleted = Set(true);
        active.update(&state.orm).await?;
        tracing::info!(blog_id = id, "blog soft-deleted");
    }

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({ "id": id }),
        Some(Meta::empty()),
    ))
}

async fn ensure_category_exists(state: &AppState, id: i64) -> AppResult<()> {
    category_blogs::Entity::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::BadRequest("category not found".to_string()))?;
    Ok(())
}
