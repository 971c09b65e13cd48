pub mod image;
pub mod order_item;
pub mod product;
