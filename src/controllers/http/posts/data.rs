use crate::core::pagination::{PageQuery, SortOrder};
use crate::core::repository::post::{PostFilter, PostUpdate};
use serde::Deserialize;
use validify::Validify;

#[derive(Debug, Deserialize, Validify)]
#[serde(rename_all = "camelCase")]
pub struct GetPostsPaginated {
    #[validate(range(min = 1.))]
    pub page: Option<u64>,
    #[validate(range(min = 1.))]
    pub limit: Option<u64>,
    pub sort_by: Option<String>,
    pub sort_order: Option<SortOrder>,
    pub search: Option<String>,
    pub category: Option<String>,
    pub user_id: Option<i32>,
}

impl GetPostsPaginated {
    pub fn into_parts(self) -> (PostFilter, PageQuery) {
        (
            PostFilter {
                search: self.search,
                category: self.category,
                user_id: self.user_id,
            },
            PageQuery::new(self.page, self.limit, self.sort_by, self.sort_order),
        )
    }
}

/// The mandatory `query` parameter of the search endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub query: String,
}

#[derive(Debug, Clone, Deserialize, Validify)]
pub struct CreatePost {
    #[modify(trim)]
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub content: String,
    #[validate(length(min = 1))]
    pub category: String,
}

#[derive(Debug, Clone, Deserialize, Validify)]
pub struct UpdatePost {
    #[modify(trim)]
    #[validate(length(min = 1))]
    pub title: Option<String>,
    #[validate(length(min = 1))]
    pub content: Option<String>,
    #[validate(length(min = 1))]
    pub category: Option<String>,
}

impl From<UpdatePost> for PostUpdate {
    fn from(data: UpdatePost) -> Self {
        Self {
            title: data.title,
            content: data.content,
            category: data.category,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use validify::Validify;

    #[test]
    fn zero_page_is_rejected_before_any_query() {
        let payload =
            serde_json::from_value::<GetPostsPaginatedPayload>(json!({ "page": 0 })).unwrap();
        assert!(GetPostsPaginated::validify(payload).is_err());
    }

    #[test]
    fn zero_limit_is_rejected_before_any_query() {
        let payload =
            serde_json::from_value::<GetPostsPaginatedPayload>(json!({ "limit": 0 })).unwrap();
        assert!(GetPostsPaginated::validify(payload).is_err());
    }

    #[test]
    fn absent_params_fall_back_to_defaults() {
        let payload = serde_json::from_value::<GetPostsPaginatedPayload>(json!({})).unwrap();
        let filter = GetPostsPaginated::validify(payload).unwrap();
        let (scope, query) = filter.into_parts();

        assert_eq!(scope, PostFilter::default());
        assert_eq!(query, PageQuery::default());
    }

    #[test]
    fn wire_parameters_are_camel_case() {
        let payload = serde_json::from_value::<GetPostsPaginatedPayload>(json!({
            "page": 2,
            "limit": 5,
            "sortBy": "title",
            "sortOrder": "ASC",
            "userId": 3,
        }))
        .unwrap();
        let filter = GetPostsPaginated::validify(payload).unwrap();
        let (scope, query) = filter.into_parts();

        assert_eq!(scope.user_id, Some(3));
        assert_eq!(query.page, 2);
        assert_eq!(query.limit, 5);
        assert_eq!(query.sort_by, "title");
        assert_eq!(query.sort_order, SortOrder::Asc);
    }

    #[test]
    fn empty_title_is_rejected() {
        let payload = serde_json::from_value::<CreatePostPayload>(json!({
            "title": " ",
            "content": "Content",
            "category": "general",
        }))
        .unwrap();
        assert!(CreatePost::validify(payload).is_err());
    }
}
