use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    entity::{order_items::OrderItemStatus, orders::PaymentStatus},
    models::{Order, OrderItem},
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct OrderLineRequest {
    pub product_id: i64,
    pub quantity: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    /// Generated when absent.
    pub order_code: Option<String>,
    pub items: Vec<OrderLineRequest>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePaymentStatusRequest {
    pub payment_status: PaymentStatus,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateOrderItemStatusRequest {
    pub status: OrderItemStatus,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderWithItems {
    pub order: Order,
    pub items: Vec<OrderItem>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderList {
    pub items: Vec<Order>,
}
