use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::pagination::Pagination;

/// Domain representation of a product in the catalog.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Product {
    /// Unique identifier of the product.
    pub id: i32,
    /// Human-readable name of the product.
    pub name: String,
    /// Optional longer description shown to users.
    pub description: Option<String>,
    /// Unit price with two fractional digits. Never negative.
    pub price: Decimal,
    /// Weak reference to an image record; the product does not own the
    /// image's lifecycle.
    pub image_id: Option<i32>,
    /// Timestamp for when the product record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the product record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    /// Human-readable name of the product.
    pub name: String,
    /// Optional longer description shown to users.
    pub description: Option<String>,
    /// Unit price with two fractional digits.
    pub price: Decimal,
    /// Optional reference to an image record.
    pub image_id: Option<i32>,
}

impl NewProduct {
    /// Build a new product payload with the supplied name and price.
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            description: None,
            price,
            image_id: None,
        }
    }

    /// Attach a descriptive text to the product payload.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach an image reference to the product payload.
    pub fn with_image(mut self, image_id: i32) -> Self {
        self.image_id = Some(image_id);
        self
    }
}

/// Patch applied when updating an existing product. All four mutable
/// fields are replaced wholesale.
#[derive(Debug, Clone)]
pub struct UpdateProduct {
    /// New product name.
    pub name: String,
    /// New description, `None` clears an existing value.
    pub description: Option<String>,
    /// New unit price.
    pub price: Decimal,
    /// New image reference, `None` clears an existing value.
    pub image_id: Option<i32>,
    /// Timestamp captured when the patch was created.
    pub updated_at: NaiveDateTime,
}

impl UpdateProduct {
    /// Create a full-replace patch with the supplied name and price.
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            description: None,
            price,
            image_id: None,
            updated_at: chrono::Local::now().naive_utc(),
        }
    }

    /// Set the description carried by the patch.
    pub fn description(mut self, description: Option<impl Into<String>>) -> Self {
        self.description = description.map(|value| value.into());
        self
    }

    /// Set the image reference carried by the patch.
    pub fn image_id(mut self, image_id: Option<i32>) -> Self {
        self.image_id = image_id;
        self
    }
}

/// Query definition used to list products.
#[derive(Debug, Clone, Default)]
pub struct ProductListQuery {
    /// Optional substring filter applied to the product name.
    pub name: Option<String>,
    /// Optional pagination options applied to the query.
    pub pagination: Option<Pagination>,
}

impl ProductListQuery {
    /// Construct a query that targets all products.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the results to products whose name contains `term`.
    pub fn name(mut self, term: impl Into<String>) -> Self {
        self.name = Some(term.into());
        self
    }

    /// Apply pagination to the query with the given page number and page size.
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}
