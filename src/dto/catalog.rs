//! Requests for the records hanging off a product: serials, warranties and
//! bulk discount tiers.

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    entity::product_serials::ProductSerialStatus,
    models::{BulkDiscount, ProductSerial},
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateSerialRequest {
    pub product_id: i64,
    pub serial: String,
    pub status: Option<ProductSerialStatus>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateSerialStatusRequest {
    pub status: ProductSerialStatus,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SerialQuery {
    pub status: Option<ProductSerialStatus>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SerialList {
    pub items: Vec<ProductSerial>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterWarrantyRequest {
    pub serial: String,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub customer_address: Option<String>,
    pub purchase_date: Option<DateTime<FixedOffset>>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBulkDiscountRequest {
    pub product_id: i64,
    pub min_quantity: i32,
    pub max_quantity: Option<i32>,
    #[schema(value_type = String)]
    pub discount_percent: Decimal,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateBulkDiscountRequest {
    pub min_quantity: Option<i32>,
    /// `null` removes the upper bound.
    #[serde(default, deserialize_with = "super::nullable")]
    #[schema(value_type = Option<i32>)]
    pub max_quantity: Option<Option<i32>>,
    #[schema(value_type = Option<String>)]
    pub discount_percent: Option<Decimal>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BulkDiscountList {
    pub items: Vec<BulkDiscount>,
}
