use catalog_admin::domain::image::ImageListQuery;
use catalog_admin::domain::product::ProductListQuery;
use catalog_admin::repository::{
    DieselRepository, ImageReader, OrderItemReader, ProductReader,
};

mod common;

#[test]
fn test_migrated_tables_are_queryable() {
    let base = "test_migrated_tables.db";

    {
        let test_db = common::TestDb::new(base);
        let repo = DieselRepository::new(test_db.pool());

        // A fresh database carries every table, all empty.
        let (total, items) = repo.list_images(ImageListQuery::new()).unwrap();
        assert_eq!(total, 0);
        assert!(items.is_empty());

        let (total, items) = repo.list_products(ProductListQuery::new()).unwrap();
        assert_eq!(total, 0);
        assert!(items.is_empty());

        assert!(repo.list_order_items(1).unwrap().is_empty());
    }

    // Dropping the harness removes the database and its WAL sidecars.
    assert!(!std::path::Path::new(base).exists());
    assert!(!std::path::Path::new(&format!("{base}-shm")).exists());
    assert!(!std::path::Path::new(&format!("{base}-wal")).exists());
}
