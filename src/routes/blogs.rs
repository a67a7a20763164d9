use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};

use crate::{
    dto::blogs::{
        BlogList, CategoryList, CategoryWithBlogs, CreateBlogRequest, CreateCategoryRequest,
        UpdateBlogRequest,
    },
    error::AppResult,
    middleware::auth::AuthUser,
    models::{Blog, CategoryBlog},
    response::ApiResponse,
    routes::params::BlogQuery,
    services::blog_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_blogs).post(create_blog))
        .route("/{id}", get(get_blog).put(update_blog).delete(delete_blog))
}

pub fn category_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route("/{id}", get(get_category))
}

#[utoipa::path(
    get,
    path = "/api/blogs",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20"),
        ("category_id" = Option<i64>, Query, description = "Category filter"),
        ("show_on_homepage" = Option<bool>, Query, description = "Homepage blogs only")
    ),
    responses(
        (status = 200, description = "Active blogs", body = ApiResponse<BlogList>)
    ),
    tag = "Blogs"
)]
pub async fn list_blogs(
    State(state): State<AppState>,
    Query(query): Query<BlogQuery>,
) -> AppResult<Json<ApiResponse<BlogList>>> {
    let resp = blog_service::list_blogs(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/blogs/{id}",
    params(("id" = i64, Path, description = "Blog ID")),
    responses(
        (status = 200, description = "Blog", body = ApiResponse<Blog>),
        (status = 404, description = "Not found")
    ),
    tag = "Blogs"
)]
pub async fn get_blog(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Blog>>> {
    let resp = blog_service::get_blog(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/blogs",
    request_body = CreateBlogRequest,
    responses(
        (status = 200, description = "Blog created", body = ApiResponse<Blog>)
    ),
    security(("bearer_auth" = [])),
    tag = "Blogs"
)]
pub async fn create_blog(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateBlogRequest>,
) -> AppResult<Json<ApiResponse<Blog>>> {
    let resp = blog_service::create_blog(&state, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/blogs/{id}",
    params(("id" = i64, Path, description = "Blog ID")),
    request_body = UpdateBlogRequest,
    responses(
        (status = 200, description = "Blog updated", body = ApiResponse<Blog>)
    ),
    security(("bearer_auth" = [])),
    tag = "Blogs"
)]
pub async fn update_blog(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateBlogRequest>,
) -> AppResult<Json<ApiResponse<Blog>>> {
    let resp = blog_service::update_blog(&state, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/blogs/{id}",
    params(("id" = i64, Path, description = "Blog ID")),
    responses(
        (status = 200, description = "Blog hidden from listings")
    ),
    security(("bearer_auth" = [])),
    tag = "Blogs"
)]
pub async fn delete_blog(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = blog_service::delete_blog(&state, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/category-blogs",
    responses(
        (status = 200, description = "Categories", body = ApiResponse<CategoryList>)
    ),
    tag = "Blogs"
)]
pub async fn list_categories(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<CategoryList>>> {
    let resp = blog_service::list_categories(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/category-blogs",
    request_body = CreateCategoryRequest,
    responses(
        (status = 200, description = "Category created", body = ApiResponse<CategoryBlog>)
    ),
    security(("bearer_auth" = [])),
    tag = "Blogs"
)]
pub async fn create_category(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateCategoryRequest>,
) -> AppResult<Json<ApiResponse<CategoryBlog>>> {
    let resp = blog_service::create_category(&state, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/category-blogs/{id}",
    params(("id" = i64, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category with its blogs", body = ApiResponse<CategoryWithBlogs>),
        (status = 404, description = "Not found")
    ),
    tag = "Blogs"
)]
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<CategoryWithBlogs>>> {
    let resp = blog_service::get_category(&state, id).await?;
    Ok(Json(resp))
}
