use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::order_item::{
    NewOrderItem as DomainNewOrderItem, OrderItem as DomainOrderItem,
    UpdateOrderItem as DomainUpdateOrderItem,
};
use crate::models::order_item::{
    NewOrderItem as DbNewOrderItem, OrderItem as DbOrderItem, UpdateOrderItem as DbUpdateOrderItem,
};
use crate::repository::{
    DieselRepository, OrderItemReader, OrderItemWriter, RepositoryError, RepositoryResult,
};

/// Pre-save interceptor for order items.
///
/// Runs inside the save transaction, before the row is written. Resolves
/// the referenced product and returns the subtotal to cache on the row,
/// in cents. A dangling product reference aborts the save with
/// [`RepositoryError::NotFound`]; a subtotal outside the `i64` cent
/// range aborts it with [`RepositoryError::Constraint`]. Nothing is
/// persisted in either case.
pub(crate) fn subtotal_hook(
    conn: &mut SqliteConnection,
    product_id: i32,
    quantity: i32,
) -> RepositoryResult<i64> {
    use crate::schema::products;

    let price_cents = products::table
        .filter(products::id.eq(product_id))
        .select(products::price_cents)
        .first::<i64>(conn)
        .optional()?
        .ok_or(RepositoryError::NotFound)?;

    i64::from(quantity)
        .checked_mul(price_cents)
        .ok_or_else(|| RepositoryError::Constraint("order item subtotal out of range".to_string()))
}

impl OrderItemReader for DieselRepository {
    fn get_order_item_by_id(&self, id: i32) -> RepositoryResult<Option<DomainOrderItem>> {
        use crate::schema::order_items;

        let mut conn = self.conn()?;
        let item = order_items::table
            .filter(order_items::id.eq(id))
            .first::<DbOrderItem>(&mut conn)
            .optional()?;

        Ok(item.map(Into::into))
    }

    fn list_order_items(&self, order_id: i32) -> RepositoryResult<Vec<DomainOrderItem>> {
        use crate::schema::order_items;

        let mut conn = self.conn()?;
        let items = order_items::table
            .filter(order_items::order_id.eq(order_id))
            .order(order_items::id.asc())
            .load::<DbOrderItem>(&mut conn)?;

        Ok(items.into_iter().map(Into::into).collect())
    }
}

impl OrderItemWriter for DieselRepository {
    fn create_order_item(
        &self,
        new_item: &DomainNewOrderItem,
    ) -> RepositoryResult<DomainOrderItem> {
        use crate::schema::order_items;

        let mut conn = self.conn()?;

        conn.transaction::<DomainOrderItem, RepositoryError, _>(|conn| {
            let subtotal_cents = subtotal_hook(conn, new_item.product_id, new_item.quantity)?;

            let db_new = DbNewOrderItem {
                order_id: new_item.order_id,
                product_id: new_item.product_id,
                quantity: new_item.quantity,
                subtotal_cents,
            };

            let created = diesel::insert_into(order_items::table)
                .values(&db_new)
                .get_result::<DbOrderItem>(conn)?;

            Ok(created.into())
        })
    }

    fn update_order_item(
        &self,
        order_item_id: i32,
        updates: &DomainUpdateOrderItem,
    ) -> RepositoryResult<DomainOrderItem> {
        use crate::schema::order_items;

        let mut conn = self.conn()?;

        conn.transaction::<DomainOrderItem, RepositoryError, _>(|conn| {
            let subtotal_cents = subtotal_hook(conn, updates.product_id, updates.quantity)?;

            let db_updates = DbUpdateOrderItem {
                product_id: updates.product_id,
                quantity: updates.quantity,
                subtotal_cents,
                updated_at: updates.updated_at,
            };

            let updated =
                diesel::update(order_items::table.filter(order_items::id.eq(order_item_id)))
                    .set(&db_updates)
                    .get_result::<DbOrderItem>(conn)?;

            Ok(updated.into())
        })
    }
}
