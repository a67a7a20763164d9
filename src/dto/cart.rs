use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::CartItem;

/// Sets the quantity of a product in the caller's cart, creating the row if
/// needed.
#[derive(Debug, Deserialize, ToSchema)]
pub struct PutCartItemRequest {
    pub product_id: i64,
    pub quantity: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CartList {
    pub items: Vec<CartItem>,
}
