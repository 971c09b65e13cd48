use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Domain representation of a single line on an order.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OrderItem {
    /// Unique identifier of the order item.
    pub id: i32,
    /// Identifier of the owning order.
    pub order_id: i32,
    /// Identifier of the ordered product.
    pub product_id: i32,
    /// Number of units ordered. Always positive.
    pub quantity: i32,
    /// Cached `quantity * product.price`, captured at the time of the last
    /// save. A later product price change does not update it.
    pub subtotal: Decimal,
    /// Timestamp for when the order item was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the order item.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new order item. The subtotal is computed
/// by the save pipeline, not supplied by callers.
#[derive(Debug, Clone)]
pub struct NewOrderItem {
    /// Identifier of the owning order.
    pub order_id: i32,
    /// Identifier of the ordered product.
    pub product_id: i32,
    /// Number of units ordered.
    pub quantity: i32,
}

impl NewOrderItem {
    /// Build a new order item payload.
    pub fn new(order_id: i32, product_id: i32, quantity: i32) -> Self {
        Self {
            order_id,
            product_id,
            quantity,
        }
    }
}

/// Patch applied when updating an order item. The subtotal is recomputed
/// by the save pipeline from the fields below.
#[derive(Debug, Clone)]
pub struct UpdateOrderItem {
    /// New product reference.
    pub product_id: i32,
    /// New unit count.
    pub quantity: i32,
    /// Timestamp captured when the patch was created.
    pub updated_at: NaiveDateTime,
}

impl UpdateOrderItem {
    /// Create a patch pointing the item at `product_id` with `quantity` units.
    pub fn new(product_id: i32, quantity: i32) -> Self {
        Self {
            product_id,
            quantity,
            updated_at: chrono::Local::now().naive_utc(),
        }
    }
}
