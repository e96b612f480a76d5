use crate::{
    core::{
        auth::CurrentUser,
        models::comment::Comment,
        pagination::{PageQuery, Paginated},
        repository::{
            comment::{CommentFilter, CommentRepository, NewComment},
            post::PostRepository,
        },
    },
    error::Error,
    AppResult,
};

#[derive(Debug, Clone)]
pub struct Comments<R, P> {
    pub repository: R,
    pub posts: P,
}

impl<R, P> Comments<R, P>
where
    R: CommentRepository + Send + Sync,
    P: PostRepository + Send + Sync,
{
    pub fn new(repository: R, posts: P) -> Self {
        Self { repository, posts }
    }

    pub async fn create(
        &self,
        user_id: i32,
        content: String,
        post_slug: String,
    ) -> AppResult<Comment> {
        let post = self
            .posts
            .get_by_slug(post_slug.clone())
            .await?
            .ok_or_else(|| Error::NotFound(format!("Post with slug {post_slug} not found")))?;

        self.repository
            .create(NewComment {
                content,
                post_id: post.id,
                user_id,
            })
            .await
            .map_err(Error::new)
    }

    pub async fn get_for_post(&self, post_id: i32, query: PageQuery) -> AppResult<Paginated<Comment>> {
        self.posts
            .get_by_id(post_id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Post with id {post_id} not found")))?;

        self.scoped(
            CommentFilter {
                post_id: Some(post_id),
                user_id: None,
            },
            query,
        )
        .await
    }

    pub async fn get_for_post_slug(
        &self,
        post_slug: String,
        query: PageQuery,
    ) -> AppResult<Paginated<Comment>> {
        let post = self
            .posts
            .get_by_slug(post_slug.clone())
            .await?
            .ok_or_else(|| Error::NotFound(format!("Post with slug {post_slug} not found")))?;

        self.scoped(
            CommentFilter {
                post_id: Some(post.id),
                user_id: None,
            },
            query,
        )
        .await
    }

    pub async fn get_for_user(
        &self,
        user_id: i32,
        post_id: Option<i32>,
        query: PageQuery,
    ) -> AppResult<Paginated<Comment>> {
        self.scoped(
            CommentFilter {
                post_id,
                user_id: Some(user_id),
            },
            query,
        )
        .await
    }

    pub async fn count_for_post(&self, post_id: i32) -> AppResult<u64> {
        self.repository
            .count_for_post(post_id)
            .await
            .map_err(Error::new)
    }

    pub async fn update(&self, actor: &CurrentUser, id: i32, content: String) -> AppResult<Comment> {
        let comment = self.get_by_id(id).await?;

        if comment.user_id != actor.id {
            return Err(Error::Forbidden(
                "You can only update your own comments".to_string(),
            ));
        }

        self.repository
            .update_content(id, content)
            .await
            .map_err(Error::new)
    }

    pub async fn remove(&self, actor: &CurrentUser, id: i32) -> AppResult<()> {
        let comment = self.get_by_id(id).await?;

        if comment.user_id != actor.id {
            return Err(Error::Forbidden(
                "You can only delete your own comments".to_string(),
            ));
        }

        let deleted = self.repository.delete(id).await?;
        if deleted == 0 {
            return Err(Error::NotFound(format!("Comment with id {id} not found")));
        }
        Ok(())
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Comment> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Comment with id {id} not found")))
    }

    async fn scoped(&self, filter: CommentFilter, query: PageQuery) -> AppResult<Paginated<Comment>> {
        let (comments, total_count) = self
            .repository
            .get_paginated(filter, query.clone())
            .await?;
        Ok(Paginated::new(comments, total_count, &query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::post::Post;
    use crate::core::repository::comment::MockCommentRepository;
    use crate::core::repository::post::MockPostRepository;
    use chrono::Utc;

    fn sample_post(id: i32) -> Post {
        Post {
            id,
            title: "Title".to_string(),
            content: "Content".to_string(),
            slug: "title".to_string(),
            category: "general".to_string(),
            image_url: None,
            view_count: 0,
            user_id: 1,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            user: None,
        }
    }

    fn sample_comment(id: i32, user_id: i32) -> Comment {
        Comment {
            id,
            content: "Nice".to_string(),
            like_count: 0,
            post_id: 1,
            user_id,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            user: None,
            post: None,
        }
    }

    fn actor(id: i32) -> CurrentUser {
        CurrentUser {
            id,
            email: "foo@bar.com".to_string(),
        }
    }

    #[tokio::test]
    async fn create_rejects_unknown_post_slug() {
        let mut posts = MockPostRepository::new();
        posts.expect_get_by_slug().returning(|_| Ok(None));

        let service = Comments::new(MockCommentRepository::new(), posts);
        let result = service
            .create(1, "Nice".to_string(), "missing".to_string())
            .await;

        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[tokio::test]
    async fn create_attaches_the_comment_to_the_resolved_post() {
        let mut posts = MockPostRepository::new();
        posts
            .expect_get_by_slug()
            .returning(|_| Ok(Some(sample_post(9))));

        let mut comments = MockCommentRepository::new();
        comments
            .expect_create()
            .withf(|data: &NewComment| data.post_id == 9 && data.user_id == 3)
            .returning(|data| {
                let mut comment = sample_comment(1, data.user_id);
                comment.post_id = data.post_id;
                Ok(comment)
            });

        let service = Comments::new(comments, posts);
        let comment = service
            .create(3, "Nice".to_string(), "title".to_string())
            .await
            .unwrap();

        assert_eq!(comment.post_id, 9);
    }

    #[tokio::test]
    async fn listing_for_an_unknown_post_is_not_found() {
        let mut posts = MockPostRepository::new();
        posts.expect_get_by_id().returning(|_| Ok(None));

        let service = Comments::new(MockCommentRepository::new(), posts);
        let result = service.get_for_post(1, PageQuery::default()).await;

        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[tokio::test]
    async fn update_by_non_owner_is_forbidden() {
        let mut comments = MockCommentRepository::new();
        comments
            .expect_get_by_id()
            .returning(|id| Ok(Some(sample_comment(id, 1))));

        let service = Comments::new(comments, MockPostRepository::new());
        let result = service.update(&actor(2), 1, "Edited".to_string()).await;

        assert!(matches!(result, Err(Error::Forbidden(_))));
    }

    #[tokio::test]
    async fn remove_by_owner_succeeds() {
        let mut comments = MockCommentRepository::new();
        comments
            .expect_get_by_id()
            .returning(|id| Ok(Some(sample_comment(id, 2))));
        comments.expect_delete().returning(|_| Ok(1));

        let service = Comments::new(comments, MockPostRepository::new());
        service.remove(&actor(2), 1).await.unwrap();
    }

    #[tokio::test]
    async fn user_scope_passes_the_optional_post_filter() {
        let mut comments = MockCommentRepository::new();
        comments
            .expect_get_paginated()
            .withf(|filter: &CommentFilter, _| {
                *filter
                    == CommentFilter {
                        post_id: Some(4),
                        user_id: Some(7),
                    }
            })
            .returning(|_, _| Ok((vec![], 0)));

        let service = Comments::new(comments, MockPostRepository::new());
        let page = service
            .get_for_user(7, Some(4), PageQuery::default())
            .await
            .unwrap();

        assert_eq!(page.metadata.total_pages, 0);
    }
}
