use mockall::mock;

use super::{
    ImageReader, ImageWriter, OrderItemReader, OrderItemWriter, ProductReader, ProductWriter,
    RepositoryResult,
};
use crate::domain::{
    image::{Image, ImageListQuery, NewImage, UpdateImage},
    order_item::{NewOrderItem, OrderItem, UpdateOrderItem},
    product::{NewProduct, Product, ProductListQuery, UpdateProduct},
};

mock! {
    pub ImageReader {}

    impl ImageReader for ImageReader {
        fn get_image_by_id(&self, id: i32) -> RepositoryResult<Option<Image>>;
        fn list_images(&self, query: ImageListQuery) -> RepositoryResult<(usize, Vec<Image>)>;
    }
}

mock! {
    pub ImageWriter {}

    impl ImageWriter for ImageWriter {
        fn create_image(&self, new_image: &NewImage) -> RepositoryResult<Image>;
        fn update_image(&self, image_id: i32, updates: &UpdateImage) -> RepositoryResult<Image>;
        fn delete_image(&self, image_id: i32) -> RepositoryResult<()>;
    }
}

// Image deletion needs one repository that both reads and writes.
mock! {
    pub ImageRepository {}

    impl ImageReader for ImageRepository {
        fn get_image_by_id(&self, id: i32) -> RepositoryResult<Option<Image>>;
        fn list_images(&self, query: ImageListQuery) -> RepositoryResult<(usize, Vec<Image>)>;
    }

    impl ImageWriter for ImageRepository {
        fn create_image(&self, new_image: &NewImage) -> RepositoryResult<Image>;
        fn update_image(&self, image_id: i32, updates: &UpdateImage) -> RepositoryResult<Image>;
        fn delete_image(&self, image_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub ProductReader {}

    impl ProductReader for ProductReader {
        fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
        fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)>;
    }
}

mock! {
    pub ProductWriter {}

    impl ProductWriter for ProductWriter {
        fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
        fn update_product(&self, product_id: i32, updates: &UpdateProduct) -> RepositoryResult<Product>;
        fn delete_product(&self, product_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub OrderItemReader {}

    impl OrderItemReader for OrderItemReader {
        fn get_order_item_by_id(&self, id: i32) -> RepositoryResult<Option<OrderItem>>;
        fn list_order_items(&self, order_id: i32) -> RepositoryResult<Vec<OrderItem>>;
    }
}

mock! {
    pub OrderItemWriter {}

    impl OrderItemWriter for OrderItemWriter {
        fn create_order_item(&self, new_item: &NewOrderItem) -> RepositoryResult<OrderItem>;
        fn update_order_item(&self, order_item_id: i32, updates: &UpdateOrderItem) -> RepositoryResult<OrderItem>;
    }
}
