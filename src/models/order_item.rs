use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::order_item::OrderItem as DomainOrderItem;
use crate::models::decimal_from_cents;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::order_items)]
pub struct OrderItem {
    pub id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub subtotal_cents: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insert payload. `subtotal_cents` is filled in by the pre-save subtotal
/// hook, never by callers.
#[derive(Insertable)]
#[diesel(table_name = crate::schema::order_items)]
pub struct NewOrderItem {
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub subtotal_cents: i64,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::order_items)]
pub struct UpdateOrderItem {
    pub product_id: i32,
    pub quantity: i32,
    pub subtotal_cents: i64,
    pub updated_at: NaiveDateTime,
}

impl From<OrderItem> for DomainOrderItem {
    fn from(value: OrderItem) -> Self {
        Self {
            id: value.id,
            order_id: value.order_id,
            product_id: value.product_id,
            quantity: value.quantity,
            subtotal: decimal_from_cents(value.subtotal_cents),
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
