use crate::db::{DbConnection, DbPool};
use crate::domain::image::{Image, ImageListQuery, NewImage, UpdateImage};
use crate::domain::order_item::{NewOrderItem, OrderItem, UpdateOrderItem};
use crate::domain::product::{NewProduct, Product, ProductListQuery, UpdateProduct};

pub mod errors;
pub mod image;
pub mod order_item;
pub mod product;

#[cfg(test)]
pub mod mock;

pub use errors::{RepositoryError, RepositoryResult};

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over image records.
pub trait ImageReader {
    fn get_image_by_id(&self, id: i32) -> RepositoryResult<Option<Image>>;
    fn list_images(&self, query: ImageListQuery) -> RepositoryResult<(usize, Vec<Image>)>;
}

/// Write operations over image records.
pub trait ImageWriter {
    fn create_image(&self, new_image: &NewImage) -> RepositoryResult<Image>;
    fn update_image(&self, image_id: i32, updates: &UpdateImage) -> RepositoryResult<Image>;
    fn delete_image(&self, image_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over product records.
pub trait ProductReader {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)>;
}

/// Write operations over product records.
pub trait ProductWriter {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
    fn update_product(&self, product_id: i32, updates: &UpdateProduct)
    -> RepositoryResult<Product>;
    fn delete_product(&self, product_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over order-item records.
pub trait OrderItemReader {
    fn get_order_item_by_id(&self, id: i32) -> RepositoryResult<Option<OrderItem>>;
    fn list_order_items(&self, order_id: i32) -> RepositoryResult<Vec<OrderItem>>;
}

/// Write operations over order-item records. Both writes run the subtotal
/// hook before committing.
pub trait OrderItemWriter {
    fn create_order_item(&self, new_item: &NewOrderItem) -> RepositoryResult<OrderItem>;
    fn update_order_item(
        &self,
        order_item_id: i32,
        updates: &UpdateOrderItem,
    ) -> RepositoryResult<OrderItem>;
}
