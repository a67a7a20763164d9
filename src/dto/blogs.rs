use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::models::{Blog, CategoryBlog};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCategoryRequest {
    pub name: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBlogRequest {
    pub title: String,
    pub description: Option<String>,
    pub image: Option<Value>,
    pub introduction: Option<Value>,
    #[serde(default)]
    pub show_on_homepage: bool,
    pub category_id: Option<i64>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateBlogRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<Value>,
    pub introduction: Option<Value>,
    pub show_on_homepage: Option<bool>,
    pub category_id: Option<i64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BlogList {
    pub items: Vec<Blog>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryList {
    pub items: Vec<CategoryBlog>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryWithBlogs {
    pub category: CategoryBlog,
    pub blogs: Vec<Blog>,
}
