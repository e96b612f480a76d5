use crate::core::pagination::{PageQuery, SortOrder};
use serde::Deserialize;
use validify::Validify;

#[derive(Debug, Deserialize, Validify)]
#[serde(rename_all = "camelCase")]
pub struct GetCommentsPaginated {
    #[validate(range(min = 1.))]
    pub page: Option<u64>,
    #[validate(range(min = 1.))]
    pub limit: Option<u64>,
    pub sort_by: Option<String>,
    pub sort_order: Option<SortOrder>,
    pub post_id: Option<i32>,
}

impl GetCommentsPaginated {
    pub fn into_parts(self) -> (Option<i32>, PageQuery) {
        (
            self.post_id,
            PageQuery::new(self.page, self.limit, self.sort_by, self.sort_order),
        )
    }
}

#[derive(Debug, Clone, Deserialize, Validify)]
#[serde(rename_all = "camelCase")]
pub struct CreateComment {
    #[validate(length(min = 2, max = 1000))]
    pub content: String,
    #[validate(length(min = 1))]
    pub post_slug: String,
}

#[derive(Debug, Clone, Deserialize, Validify)]
pub struct UpdateComment {
    #[validate(length(min = 2, max = 1000))]
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use validify::Validify;

    #[test]
    fn content_length_is_bounded() {
        let payload = serde_json::from_value::<CreateCommentPayload>(json!({
            "content": "x",
            "postSlug": "a-post",
        }))
        .unwrap();
        assert!(CreateComment::validify(payload).is_err());

        let payload = serde_json::from_value::<CreateCommentPayload>(json!({
            "content": "y".repeat(1001),
            "postSlug": "a-post",
        }))
        .unwrap();
        assert!(CreateComment::validify(payload).is_err());
    }

    #[test]
    fn pagination_bounds_apply() {
        let payload =
            serde_json::from_value::<GetCommentsPaginatedPayload>(json!({ "limit": 0 })).unwrap();
        assert!(GetCommentsPaginated::validify(payload).is_err());
    }
}
