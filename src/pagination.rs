use serde::{Deserialize, Serialize};

/// Default number of items returned per page.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 25;
/// Upper bound on client-requested page sizes.
pub const MAX_ITEMS_PER_PAGE: usize = 100;

/// Pagination options applied to list queries.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Pagination {
    /// Requested page, 1-based.
    pub page: usize,
    /// Number of items per page.
    pub per_page: usize,
}

impl Pagination {
    /// Zero-based row offset for this page. Saturates at the `i64` bound
    /// for absurd client-supplied page numbers.
    pub fn offset(&self) -> i64 {
        let offset = (self.page.max(1) - 1).saturating_mul(self.per_page);
        i64::try_from(offset).unwrap_or(i64::MAX)
    }

    /// Row limit for this page.
    pub fn limit(&self) -> i64 {
        i64::try_from(self.per_page).unwrap_or(i64::MAX)
    }
}

/// One page of a collection, as returned to API clients.
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// Page number, 1-based.
    pub page: usize,
    /// Page size used for the query.
    pub per_page: usize,
    /// Total number of matching items across all pages.
    pub total: usize,
    /// Total number of pages.
    pub total_pages: usize,
}

impl<T> Paginated<T> {
    /// Assemble a page from query results and the total match count.
    pub fn new(items: Vec<T>, page: usize, per_page: usize, total: usize) -> Self {
        let total_pages = total.div_ceil(per_page.max(1));
        Self {
            items,
            page,
            per_page,
            total,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paginated_computes_total_pages() {
        let page = Paginated::new(vec![1, 2, 3], 1, 25, 51);
        assert_eq!(page.total_pages, 3);

        let empty: Paginated<i32> = Paginated::new(Vec::new(), 1, 25, 0);
        assert_eq!(empty.total_pages, 0);
    }

    #[test]
    fn serializes_the_collection_shape() {
        let page = Paginated::new(vec![1, 2], 1, 2, 3);
        let value = serde_json::to_value(&page).unwrap();
        assert_eq!(value["total"], 3);
        assert_eq!(value["total_pages"], 2);
        assert_eq!(value["items"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn pagination_offset_is_zero_based() {
        let pagination = Pagination {
            page: 3,
            per_page: 10,
        };
        assert_eq!(pagination.offset(), 20);
        assert_eq!(pagination.limit(), 10);
    }

    #[test]
    fn pagination_offset_saturates_on_huge_pages() {
        let pagination = Pagination {
            page: usize::MAX,
            per_page: 25,
        };
        assert_eq!(pagination.offset(), i64::MAX);
        assert_eq!(pagination.limit(), 25);
    }
}
