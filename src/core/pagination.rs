use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;
pub const DEFAULT_SORT_FIELD: &str = "createdAt";

/// Sort direction accepted on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// Normalised page query every list operation receives. Constructed from the
/// already validated filter DTOs, so `page` and `limit` are always positive
/// by the time an adapter sees them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    pub page: u64,
    pub limit: u64,
    pub sort_by: String,
    pub sort_order: SortOrder,
}

impl PageQuery {
    pub fn new(
        page: Option<u64>,
        limit: Option<u64>,
        sort_by: Option<String>,
        sort_order: Option<SortOrder>,
    ) -> Self {
        Self {
            page: page.unwrap_or(DEFAULT_PAGE),
            limit: limit.unwrap_or(DEFAULT_LIMIT),
            sort_by: sort_by.unwrap_or_else(|| DEFAULT_SORT_FIELD.to_string()),
            sort_order: sort_order.unwrap_or_default(),
        }
    }

    /// Row offset of the first item on the requested page.
    pub fn offset(&self) -> u64 {
        (self.page - 1) * self.limit
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self::new(None, None, None, None)
    }
}

/// Pagination summary attached to list responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub total_count: u64,
    pub total_pages: u64,
    pub current_page: u64,
    pub limit: u64,
}

impl Metadata {
    /// `total_pages` is the ceiling of `total_count / limit`. The requested
    /// page is echoed back untouched, never clamped, so clients can detect a
    /// read past the end by comparing `currentPage` against `totalPages`.
    pub fn new(total_count: u64, page: u64, limit: u64) -> Self {
        let total_pages = if limit == 0 {
            0
        } else {
            (total_count + limit - 1) / limit
        };
        Self {
            total_count,
            total_pages,
            current_page: page,
            limit,
        }
    }
}

/// One page of results together with its metadata.
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub metadata: Metadata,
}

impl<T> Paginated<T> {
    pub fn new(data: Vec<T>, total_count: u64, query: &PageQuery) -> Self {
        Self {
            data,
            metadata: Metadata::new(total_count, query.page, query.limit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_is_the_ceiling_of_count_over_limit() {
        assert_eq!(Metadata::new(25, 1, 10).total_pages, 3);
        assert_eq!(Metadata::new(30, 1, 10).total_pages, 3);
        assert_eq!(Metadata::new(31, 1, 10).total_pages, 4);
        assert_eq!(Metadata::new(1, 1, 10).total_pages, 1);
    }

    #[test]
    fn empty_collection_has_zero_pages() {
        let metadata = Metadata::new(0, 1, 10);
        assert_eq!(metadata.total_pages, 0);
        assert_eq!(metadata.total_count, 0);
    }

    #[test]
    fn requested_page_is_echoed_unclamped() {
        let metadata = Metadata::new(25, 9, 10);
        assert_eq!(metadata.current_page, 9);
        assert_eq!(metadata.total_pages, 3);
    }

    #[test]
    fn defaults_match_the_wire_contract() {
        let query = PageQuery::default();
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 10);
        assert_eq!(query.sort_by, "createdAt");
        assert_eq!(query.sort_order, SortOrder::Desc);
    }

    #[test]
    fn offset_skips_previous_pages() {
        let query = PageQuery::new(Some(3), Some(10), None, None);
        assert_eq!(query.offset(), 20);
        assert_eq!(PageQuery::default().offset(), 0);
    }

    #[test]
    fn sort_order_deserializes_uppercase() {
        assert_eq!(
            serde_json::from_str::<SortOrder>("\"ASC\"").unwrap(),
            SortOrder::Asc
        );
        assert_eq!(
            serde_json::from_str::<SortOrder>("\"DESC\"").unwrap(),
            SortOrder::Desc
        );
    }
}
