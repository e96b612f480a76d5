use crate::{
    core::{
        models::comment_like::CommentLike,
        pagination::{PageQuery, Paginated},
        repository::{
            comment::CommentRepository,
            comment_like::{CommentLikeFilter, CommentLikeRepository},
        },
    },
    error::Error,
    AppResult,
};
use serde::Serialize;

/// Reaction summary for a single caller and comment.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeStatus {
    pub liked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_like: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct CommentLikes<R, C> {
    pub repository: R,
    pub comments: C,
}

impl<R, C> CommentLikes<R, C>
where
    R: CommentLikeRepository + Send + Sync,
    C: CommentRepository + Send + Sync,
{
    pub fn new(repository: R, comments: C) -> Self {
        Self { repository, comments }
    }

    /// Registers a reaction. An opposite existing reaction is flipped, a
    /// duplicate one is rejected.
    pub async fn create(
        &self,
        user_id: i32,
        comment_id: i32,
        is_like: bool,
    ) -> AppResult<CommentLike> {
        self.ensure_comment(comment_id).await?;

        match self
            .repository
            .get_by_user_and_comment(user_id, comment_id)
            .await?
        {
            Some(existing) if existing.is_like != is_like => {
                self.repository.flip(existing).await.map_err(Error::new)
            }
            Some(_) => Err(Error::Conflict(format!(
                "You have already {} this comment",
                if is_like { "liked" } else { "disliked" }
            ))),
            None => self
                .repository
                .insert(comment_id, user_id, is_like)
                .await
                .map_err(Error::new),
        }
    }

    pub async fn remove(&self, user_id: i32, comment_id: i32) -> AppResult<()> {
        self.ensure_comment(comment_id).await?;

        let like = self
            .repository
            .get_by_user_and_comment(user_id, comment_id)
            .await?
            .ok_or_else(|| Error::NotFound("You have not liked this comment".to_string()))?;

        self.repository.remove(like).await?;
        Ok(())
    }

    pub async fn get_for_comment(
        &self,
        comment_id: i32,
        query: PageQuery,
    ) -> AppResult<Paginated<CommentLike>> {
        self.scoped(
            CommentLikeFilter {
                comment_id: Some(comment_id),
                user_id: None,
            },
            query,
        )
        .await
    }

    pub async fn get_for_user(
        &self,
        user_id: i32,
        query: PageQuery,
    ) -> AppResult<Paginated<CommentLike>> {
        self.scoped(
            CommentLikeFilter {
                comment_id: None,
                user_id: Some(user_id),
            },
            query,
        )
        .await
    }

    pub async fn check(&self, user_id: i32, comment_id: i32) -> AppResult<LikeStatus> {
        let like = self
            .repository
            .get_by_user_and_comment(user_id, comment_id)
            .await?;

        Ok(LikeStatus {
            liked: like.is_some(),
            is_like: like.map(|like| like.is_like),
        })
    }

    async fn ensure_comment(&self, comment_id: i32) -> AppResult<()> {
        self.comments
            .get_by_id(comment_id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Comment with id {comment_id} not found")))?;
        Ok(())
    }

    async fn scoped(
        &self,
        filter: CommentLikeFilter,
        query: PageQuery,
    ) -> AppResult<Paginated<CommentLike>> {
        let (likes, total_count) = self
            .repository
            .get_paginated(filter, query.clone())
            .await?;
        Ok(Paginated::new(likes, total_count, &query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::comment::Comment;
    use crate::core::repository::comment::MockCommentRepository;
    use crate::core::repository::comment_like::MockCommentLikeRepository;
    use chrono::Utc;

    fn sample_comment(id: i32) -> Comment {
        Comment {
            id,
            content: "Nice".to_string(),
            like_count: 0,
            post_id: 1,
            user_id: 1,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            user: None,
            post: None,
        }
    }

    fn sample_like(id: i32, user_id: i32, comment_id: i32, is_like: bool) -> CommentLike {
        CommentLike {
            id,
            is_like,
            comment_id,
            user_id,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            user: None,
            comment: None,
        }
    }

    fn comments_with(comment: Option<Comment>) -> MockCommentRepository {
        let mut comments = MockCommentRepository::new();
        comments
            .expect_get_by_id()
            .returning(move |_| Ok(comment.clone()));
        comments
    }

    #[tokio::test]
    async fn reacting_to_a_missing_comment_is_not_found() {
        let service = CommentLikes::new(MockCommentLikeRepository::new(), comments_with(None));
        let result = service.create(1, 1, true).await;
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[tokio::test]
    async fn duplicate_reaction_is_rejected() {
        let mut likes = MockCommentLikeRepository::new();
        likes
            .expect_get_by_user_and_comment()
            .returning(|user_id, comment_id| {
                Ok(Some(sample_like(1, user_id, comment_id, true)))
            });

        let service = CommentLikes::new(likes, comments_with(Some(sample_comment(1))));
        let result = service.create(1, 1, true).await;

        assert!(matches!(result, Err(Error::Conflict(_))));
    }

    #[tokio::test]
    async fn opposite_reaction_flips_the_existing_row() {
        let mut likes = MockCommentLikeRepository::new();
        likes
            .expect_get_by_user_and_comment()
            .returning(|user_id, comment_id| {
                Ok(Some(sample_like(1, user_id, comment_id, true)))
            });
        likes
            .expect_flip()
            .times(1)
            .withf(|like: &CommentLike| like.is_like)
            .returning(|mut like| {
                like.is_like = !like.is_like;
                Ok(like)
            });

        let service = CommentLikes::new(likes, comments_with(Some(sample_comment(1))));
        let like = service.create(1, 1, false).await.unwrap();

        assert!(!like.is_like);
    }

    #[tokio::test]
    async fn first_reaction_inserts_a_row() {
        let mut likes = MockCommentLikeRepository::new();
        likes
            .expect_get_by_user_and_comment()
            .returning(|_, _| Ok(None));
        likes
            .expect_insert()
            .times(1)
            .returning(|comment_id, user_id, is_like| {
                Ok(sample_like(1, user_id, comment_id, is_like))
            });

        let service = CommentLikes::new(likes, comments_with(Some(sample_comment(1))));
        let like = service.create(2, 1, true).await.unwrap();

        assert!(like.is_like);
        assert_eq!(like.user_id, 2);
    }

    #[tokio::test]
    async fn removing_an_absent_reaction_is_not_found() {
        let mut likes = MockCommentLikeRepository::new();
        likes
            .expect_get_by_user_and_comment()
            .returning(|_, _| Ok(None));

        let service = CommentLikes::new(likes, comments_with(Some(sample_comment(1))));
        let result = service.remove(1, 1).await;

        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[tokio::test]
    async fn check_reports_the_reaction_kind() {
        let mut likes = MockCommentLikeRepository::new();
        likes
            .expect_get_by_user_and_comment()
            .returning(|user_id, comment_id| {
                Ok(Some(sample_like(1, user_id, comment_id, false)))
            });

        let service = CommentLikes::new(likes, comments_with(Some(sample_comment(1))));
        let status = service.check(1, 1).await.unwrap();

        assert!(status.liked);
        assert_eq!(status.is_like, Some(false));
    }
}
