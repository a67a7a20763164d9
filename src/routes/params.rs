use serde::Deserialize;
use utoipa::ToSchema;

use crate::entity::{orders::PaymentStatus, products::PublishStatus};

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct Pagination {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl Pagination {
    pub fn normalize(&self) -> (i64, i64, i64) {
        let page = self.page.unwrap_or(1).max(1);
        let per_page = self.per_page.unwrap_or(20).clamp(1, 100);
        let offset = (page - 1).saturating_mul(per_page);
        (page, per_page, offset)
    }
}

#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProductSortBy {
    CreatedAt,
    Price,
    Name,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ProductQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub q: Option<String>,
    pub publish_status: Option<PublishStatus>,
    pub is_featured: Option<bool>,
    pub show_on_homepage: Option<bool>,
    pub sort_by: Option<ProductSortBy>,
    pub sort_order: Option<SortOrder>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct BlogQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub category_id: Option<i64>,
    pub show_on_homepage: Option<bool>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct OrderListQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub payment_status: Option<PaymentStatus>,
    pub sort_order: Option<SortOrder>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct NotifyQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub unread_only: Option<bool>,
}

// Query strings arrive as flat key/value pairs; `#[serde(flatten)]` would
// hand numeric fields to serde as strings, so page fields are repeated.
macro_rules! paginated {
    ($($query:ty),+) => {
        $(impl $query {
            pub fn pagination(&self) -> Pagination {
                Pagination {
                    page: self.page,
                    per_page: self.per_page,
                }
            }
        })+
    };
}

paginated!(ProductQuery, BlogQuery, OrderListQuery, NotifyQuery);

#[cfg(test)]
mod tests {
    use super::Pagination;

    #[test]
    fn pagination_defaults_and_clamps() {
        assert_eq!(Pagination::default().normalize(), (1, 20, 0));

        let p = Pagination {
            page: Some(3),
            per_page: Some(500),
        };
        assert_eq!(p.normalize(), (3, 100, 200));

        let p = Pagination {
            page: Some(-2),
            per_page: Some(0),
        };
        assert_eq!(p.normalize(), (1, 1, 0));
    }

    #[test]
    fn pagination_saturates_on_huge_pages() {
        let p = Pagination {
            page: Some(i64::MAX),
            per_page: Some(100),
        };
        let (page, per_page, offset) = p.normalize();
        assert_eq!(page, i64::MAX);
        assert_eq!(per_page, 100);
        assert_eq!(offset, i64::MAX);
    }
}
