//! Response shapes served by the API, converted from the entity models.

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::entity::{
    accounts, admins, blogs, bulk_discounts, category_blogs, dealer_cart_items, dealers, notifies,
    order_items::{self, OrderItemStatus},
    orders::{self, PaymentStatus},
    product_serials::{self, ProductSerialStatus},
    products::{self, PublishStatus},
    warranties,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct Account {
    pub id: i64,
    pub username: String,
    pub enabled: bool,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

impl From<accounts::Model> for Account {
    fn from(model: accounts::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            enabled: model.enabled,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct Admin {
    #[serde(flatten)]
    pub account: Account,
    pub require_login_email_confirmation: bool,
}

impl Admin {
    pub fn new(account: accounts::Model, admin: admins::Model) -> Self {
        Self {
            account: account.into(),
            require_login_email_confirmation: admin.require_login_email_confirmation,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct Dealer {
    #[serde(flatten)]
    pub account: Account,
    pub company_name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
}

impl Dealer {
    pub fn new(account: accounts::Model, dealer: dealers::Model) -> Self {
        Self {
            account: account.into(),
            company_name: dealer.company_name,
            address: dealer.address,
            phone: dealer.phone,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub sku: String,
    pub name: String,
    pub short_description: Option<String>,
    pub image: Option<Value>,
    pub descriptions: Option<Value>,
    pub videos: Option<Value>,
    pub specifications: Option<Value>,
    #[schema(value_type = String)]
    pub retail_price: Decimal,
    pub show_on_homepage: bool,
    pub is_featured: bool,
    pub is_deleted: bool,
    pub publish_status: PublishStatus,
    pub stock: i32,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

impl From<products::Model> for Product {
    fn from(model: products::Model) -> Self {
        Self {
            id: model.id,
            sku: model.sku,
            name: model.name,
            short_description: model.short_description,
            image: model.image,
            descriptions: model.descriptions,
            videos: model.videos,
            specifications: model.specifications,
            retail_price: model.retail_price,
            show_on_homepage: model.show_on_homepage,
            is_featured: model.is_featured,
            is_deleted: model.is_deleted,
            publish_status: model.publish_status,
            stock: model.stock,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct ProductSerial {
    pub id: i64,
    pub serial: String,
    pub status: ProductSerialStatus,
    pub product_id: i64,
}

impl From<product_serials::Model> for ProductSerial {
    fn from(model: product_serials::Model) -> Self {
        Self {
            id: model.id,
            serial: model.serial,
            status: model.status,
            product_id: model.id_product,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct Warranty {
    pub id: i64,
    pub warranty_code: String,
    pub status: String,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub customer_address: Option<String>,
    pub purchase_date: Option<DateTime<FixedOffset>>,
    pub created_at: DateTime<FixedOffset>,
    pub product_serial_id: i64,
}

impl From<warranties::Model> for Warranty {
    fn from(model: warranties::Model) -> Self {
        Self {
            id: model.id,
            warranty_code: model.warranty_code,
            status: model.status,
            customer_name: model.customer_name,
            customer_email: model.customer_email,
            customer_phone: model.customer_phone,
            customer_address: model.customer_address,
            purchase_date: model.purchase_date,
            created_at: model.created_at,
            product_serial_id: model.id_product_serial,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct BulkDiscount {
    pub id: i64,
    pub product_id: i64,
    pub min_quantity: i32,
    pub max_quantity: Option<i32>,
    #[schema(value_type = String)]
    pub discount_percent: Decimal,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

impl From<bulk_discounts::Model> for BulkDiscount {
    fn from(model: bulk_discounts::Model) -> Self {
        Self {
            id: model.id,
            product_id: model.id_product,
            min_quantity: model.min_quantity,
            max_quantity: model.max_quantity,
            discount_percent: model.discount_percent,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct CategoryBlog {
    pub id: i64,
    pub name: String,
}

impl From<category_blogs::Model> for CategoryBlog {
    fn from(model: category_blogs::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct Blog {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub image: Option<Value>,
    pub introduction: Option<Value>,
    pub show_on_homepage: bool,
    pub is_deleted: bool,
    pub category_id: Option<i64>,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

impl From<blogs::Model> for Blog {
    fn from(model: blogs::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            image: model.image,
            introduction: model.introduction,
            show_on_homepage: model.show_on_homepage,
            is_deleted: model.is_deleted,
            category_id: model.id_category_blog,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct CartItem {
    pub dealer_id: i64,
    pub product_of_cart_id: i64,
    pub product: Product,
    pub quantity: i32,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

impl CartItem {
    pub fn new(item: dealer_cart_items::Model, product: products::Model) -> Self {
        Self {
            dealer_id: item.id_dealer,
            product_of_cart_id: item.id_product_of_cart,
            product: product.into(),
            quantity: item.quantity,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct Order {
    pub id: i64,
    pub order_code: String,
    pub payment_status: PaymentStatus,
    pub is_deleted: bool,
    pub dealer_id: i64,
    pub created_at: DateTime<FixedOffset>,
}

impl From<orders::Model> for Order {
    fn from(model: orders::Model) -> Self {
        Self {
            id: model.id,
            order_code: model.order_code,
            payment_status: model.payment_status,
            is_deleted: model.is_deleted,
            dealer_id: model.id_dealer,
            created_at: model.created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct OrderItem {
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i32,
    #[schema(value_type = String)]
    pub unit_price: Decimal,
    pub status: OrderItemStatus,
}

impl From<order_items::Model> for OrderItem {
    fn from(model: order_items::Model) -> Self {
        Self {
            id: model.id,
            order_id: model.id_order,
            product_id: model.id_product,
            quantity: model.quantity,
            unit_price: model.unit_price,
            status: model.status,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct Notify {
    pub id: i64,
    pub title: String,
    pub message: Option<String>,
    pub time: Option<DateTime<FixedOffset>>,
    pub is_read: bool,
    #[serde(rename = "type")]
    pub notify_type: Option<String>,
    pub created_at: DateTime<FixedOffset>,
}

impl From<notifies::Model> for Notify {
    fn from(model: notifies::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            message: model.message,
            time: model.time,
            is_read: model.is_read,
            notify_type: model.notify_type,
            created_at: model.created_at,
        }
    }
}
