use crate::core::pagination::{PageQuery, SortOrder};
use serde::Deserialize;
use validify::Validify;

#[derive(Debug, Deserialize, Validify)]
#[serde(rename_all = "camelCase")]
pub struct GetLikesPaginated {
    #[validate(range(min = 1.))]
    pub page: Option<u64>,
    #[validate(range(min = 1.))]
    pub limit: Option<u64>,
    pub sort_by: Option<String>,
    pub sort_order: Option<SortOrder>,
}

impl GetLikesPaginated {
    pub fn into_query(self) -> PageQuery {
        PageQuery::new(self.page, self.limit, self.sort_by, self.sort_order)
    }
}

#[derive(Debug, Clone, Deserialize, Validify)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentLike {
    pub comment_id: i32,
    /// Defaults to a like, `false` registers a dislike.
    pub is_like: Option<bool>,
}
