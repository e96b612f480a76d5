use crate::{
    core::{models::comment_like::CommentLike, pagination::PageQuery},
    db::adapters::AdapterError,
};
use async_trait::async_trait;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentLikeFilter {
    pub comment_id: Option<i32>,
    pub user_id: Option<i32>,
}

/// Every mutation here also moves `comments.like_count`, inside the same
/// database transaction as the like row itself.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentLikeRepository {
    async fn get_by_user_and_comment(
        &self,
        user_id: i32,
        comment_id: i32,
    ) -> Result<Option<CommentLike>, AdapterError>;

    /// Comment scoped listings carry the reacting user, user scoped listings
    /// carry the reacted comment.
    async fn get_paginated(
        &self,
        filter: CommentLikeFilter,
        query: PageQuery,
    ) -> Result<(Vec<CommentLike>, u64), AdapterError>;

    /// Inserts the row and moves the counter by +1 (like) or -1 (dislike).
    async fn insert(
        &self,
        comment_id: i32,
        user_id: i32,
        is_like: bool,
    ) -> Result<CommentLike, AdapterError>;

    /// Inverts `is_like` and moves the counter by two accordingly.
    async fn flip(&self, like: CommentLike) -> Result<CommentLike, AdapterError>;

    /// Deletes the row and reverts its contribution to the counter.
    async fn remove(&self, like: CommentLike) -> Result<u64, AdapterError>;
}
