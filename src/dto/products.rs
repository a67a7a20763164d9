use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::{entity::products::PublishStatus, models::Product};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    pub sku: String,
    pub name: String,
    pub short_description: Option<String>,
    pub image: Option<Value>,
    pub descriptions: Option<Value>,
    pub videos: Option<Value>,
    pub specifications: Option<Value>,
    #[schema(value_type = String)]
    pub retail_price: Decimal,
    #[serde(default)]
    pub show_on_homepage: bool,
    #[serde(default)]
    pub is_featured: bool,
    pub publish_status: Option<PublishStatus>,
    #[serde(default)]
    pub stock: i32,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub short_description: Option<String>,
    pub image: Option<Value>,
    pub descriptions: Option<Value>,
    pub videos: Option<Value>,
    pub specifications: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub retail_price: Option<Decimal>,
    pub show_on_homepage: Option<bool>,
    pub is_featured: Option<bool>,
    pub publish_status: Option<PublishStatus>,
    pub stock: Option<i32>,
}

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct ProductList {
    #[schema(value_type = Vec<Product>)]
    pub items: Vec<Product>,
}
