use crate::{
    core::{models::comment::Comment, pagination::PageQuery},
    db::adapters::AdapterError,
};
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct NewComment {
    pub content: String,
    pub post_id: i32,
    pub user_id: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentFilter {
    pub post_id: Option<i32>,
    pub user_id: Option<i32>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository {
    /// Post scoped listings carry the comment author, user scoped listings
    /// carry the commented post.
    async fn get_paginated(
        &self,
        filter: CommentFilter,
        query: PageQuery,
    ) -> Result<(Vec<Comment>, u64), AdapterError>;

    async fn get_by_id(&self, id: i32) -> Result<Option<Comment>, AdapterError>;

    async fn count_for_post(&self, post_id: i32) -> Result<u64, AdapterError>;

    async fn create(&self, data: NewComment) -> Result<Comment, AdapterError>;

    async fn update_content(&self, id: i32, content: String) -> Result<Comment, AdapterError>;

    async fn delete(&self, id: i32) -> Result<u64, AdapterError>;
}
