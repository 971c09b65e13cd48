use serde::Deserialize;

use crate::domain::product::{Product, ProductListQuery};
use crate::forms::products::ProductPayload;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, MAX_ITEMS_PER_PAGE, Paginated};
use crate::repository::{ProductReader, ProductWriter, RepositoryError};
use crate::services::{ServiceError, ServiceResult};

/// Query parameters accepted by the product list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ProductsQuery {
    /// Optional substring filter on the product name.
    pub name: Option<String>,
    /// Page requested by the client (1-based).
    pub page: Option<usize>,
    /// Requested page size.
    pub per_page: Option<usize>,
}

/// Lists products, optionally restricted to names containing the filter
/// term (store-default `LIKE` semantics).
pub fn list_products<R>(repo: &R, query: ProductsQuery) -> ServiceResult<Paginated<Product>>
where
    R: ProductReader + ?Sized,
{
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query
        .per_page
        .unwrap_or(DEFAULT_ITEMS_PER_PAGE)
        .clamp(1, MAX_ITEMS_PER_PAGE);

    let mut list_query = ProductListQuery::new().paginate(page, per_page);
    if let Some(term) = query.name.filter(|value| !value.trim().is_empty()) {
        list_query = list_query.name(term);
    }

    let (total, items) = repo.list_products(list_query)?;

    Ok(Paginated::new(items, page, per_page, total))
}

/// Creates a new product from a validated payload.
pub fn create_product<R>(repo: &R, payload: ProductPayload) -> ServiceResult<Product>
where
    R: ProductWriter + ?Sized,
{
    let new_product = payload
        .into_new_product()
        .map_err(|err| ServiceError::Validation(err.to_string()))?;

    repo.create_product(&new_product).map_err(ServiceError::from)
}

/// Fetches a single product record.
pub fn get_product<R>(repo: &R, id: i32) -> ServiceResult<Product>
where
    R: ProductReader + ?Sized,
{
    repo.get_product_by_id(id)?.ok_or(ServiceError::NotFound)
}

/// Fully replaces a product's mutable fields. Applying the same payload
/// twice yields the same stored state.
pub fn update_product<R>(repo: &R, id: i32, payload: ProductPayload) -> ServiceResult<Product>
where
    R: ProductWriter + ?Sized,
{
    let updates = payload
        .into_update_product()
        .map_err(|err| ServiceError::Validation(err.to_string()))?;

    repo.update_product(id, &updates).map_err(ServiceError::from)
}

/// Removes a product record.
pub fn delete_product<R>(repo: &R, id: i32) -> ServiceResult<()>
where
    R: ProductWriter + ?Sized,
{
    repo.delete_product(id).map_err(|err| match err {
        RepositoryError::NotFound => ServiceError::NotFound,
        other => ServiceError::Deletion(other.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;
    use rust_decimal::Decimal;

    use super::*;
    use crate::repository::mock::{MockProductReader, MockProductWriter};

    fn product(id: i32, name: &str) -> Product {
        let now = chrono::Local::now().naive_utc();
        Product {
            id,
            name: name.to_string(),
            description: None,
            price: Decimal::new(1999, 2),
            image_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn list_products_passes_the_name_filter_through() {
        let mut repo = MockProductReader::new();
        repo.expect_list_products()
            .withf(|query| query.name.as_deref() == Some("wid"))
            .returning(|_| Ok((2, vec![product(1, "Widget A"), product(3, "Widget B")])));

        let page = list_products(
            &repo,
            ProductsQuery {
                name: Some("wid".to_string()),
                ..Default::default()
            },
        )
        .expect("list should succeed");

        assert_eq!(page.total, 2);
        assert_eq!(page.items.len(), 2);
    }

    #[test]
    fn blank_filter_lists_everything() {
        let mut repo = MockProductReader::new();
        repo.expect_list_products()
            .withf(|query| query.name.is_none())
            .returning(|_| Ok((0, Vec::new())));

        list_products(
            &repo,
            ProductsQuery {
                name: Some("   ".to_string()),
                ..Default::default()
            },
        )
        .expect("list should succeed");
    }

    #[test]
    fn create_product_rejects_invalid_payloads() {
        let repo = MockProductWriter::new();

        let err = create_product(
            &repo,
            ProductPayload {
                name: String::new(),
                description: None,
                price: Decimal::ONE,
                image_id: None,
            },
        )
        .unwrap_err();

        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[test]
    fn delete_product_maps_missing_records_to_not_found() {
        let mut repo = MockProductWriter::new();
        repo.expect_delete_product()
            .with(eq(9))
            .returning(|_| Err(RepositoryError::NotFound));

        let err = delete_product(&repo, 9).unwrap_err();
        assert!(matches!(err, ServiceError::NotFound));
    }
}
