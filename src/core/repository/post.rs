use crate::{
    core::{models::post::Post, pagination::PageQuery},
    db::adapters::AdapterError,
};
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub category: String,
    pub slug: String,
    pub image_url: Option<String>,
    pub user_id: i32,
}

#[derive(Debug, Clone, Default)]
pub struct PostUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub slug: Option<String>,
}

/// Resource predicates applied on top of the page query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFilter {
    pub search: Option<String>,
    pub category: Option<String>,
    pub user_id: Option<i32>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository {
    /// Returns the requested page together with the unpaged row count.
    /// Listed posts carry their author.
    async fn get_paginated(
        &self,
        filter: PostFilter,
        query: PageQuery,
    ) -> Result<(Vec<Post>, u64), AdapterError>;

    async fn get_by_id(&self, id: i32) -> Result<Option<Post>, AdapterError>;

    async fn get_by_slug(&self, slug: String) -> Result<Option<Post>, AdapterError>;

    /// Single atomic `view_count = view_count + 1`.
    async fn bump_view_count(&self, id: i32) -> Result<(), AdapterError>;

    async fn create(&self, data: NewPost) -> Result<Post, AdapterError>;

    async fn update(&self, id: i32, data: PostUpdate) -> Result<Post, AdapterError>;

    async fn delete(&self, id: i32) -> Result<u64, AdapterError>;
}
