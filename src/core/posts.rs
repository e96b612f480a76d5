use crate::{
    core::{
        auth::CurrentUser,
        models::post::Post,
        pagination::{PageQuery, Paginated},
        repository::post::{NewPost, PostFilter, PostRepository, PostUpdate},
        uploads::{ImageUpload, UploadStorage},
    },
    db::adapters::AdapterError,
    error::Error,
    AppResult,
};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Posts<R, U> {
    pub repository: R,
    pub uploads: U,
}

impl<R, U> Posts<R, U>
where
    R: PostRepository + Send + Sync,
    U: UploadStorage + Send + Sync,
{
    pub fn new(repository: R, uploads: U) -> Self {
        Self { repository, uploads }
    }

    pub async fn get_paginated(
        &self,
        filter: PostFilter,
        query: PageQuery,
    ) -> AppResult<Paginated<Post>> {
        let (posts, total_count) = self
            .repository
            .get_paginated(filter, query.clone())
            .await?;
        Ok(Paginated::new(posts, total_count, &query))
    }

    /// Looks a post up by slug and bumps its view counter. The returned post
    /// carries the count as it was when read.
    pub async fn get_by_slug(&self, slug: &str) -> AppResult<Post> {
        let post = self
            .repository
            .get_by_slug(slug.to_string())
            .await?
            .ok_or_else(|| Error::NotFound(format!("Post with slug {slug} not found")))?;

        self.repository.bump_view_count(post.id).await?;

        Ok(post)
    }

    pub async fn create(
        &self,
        user_id: i32,
        title: String,
        content: String,
        category: String,
        image: Option<ImageUpload>,
    ) -> AppResult<Post> {
        let image_url = match image {
            Some(image) => Some(self.uploads.store(image).await?),
            None => None,
        };

        let slug = slug::slugify(&title);
        debug!("Creating post {slug}");

        self.repository
            .create(NewPost {
                title,
                content,
                category,
                slug: slug.clone(),
                image_url,
                user_id,
            })
            .await
            .map_err(|e| match e {
                AdapterError::UniqueViolation => {
                    Error::Conflict(format!("Post with slug {slug} already exists"))
                }
                e => Error::new(e),
            })
    }

    pub async fn update(
        &self,
        actor: &CurrentUser,
        slug: &str,
        mut update: PostUpdate,
        image: Option<ImageUpload>,
    ) -> AppResult<Post> {
        let post = self
            .repository
            .get_by_slug(slug.to_string())
            .await?
            .ok_or_else(|| Error::NotFound(format!("Post with slug {slug} not found")))?;

        if post.user_id != actor.id {
            return Err(Error::Forbidden(
                "You can only update your own posts".to_string(),
            ));
        }

        if let Some(image) = image {
            update.image_url = Some(self.uploads.store(image).await?);
        }

        // a new title means a new slug
        if let Some(ref title) = update.title {
            update.slug = Some(slug::slugify(title));
        }

        self.repository
            .update(post.id, update)
            .await
            .map_err(|e| match e {
                AdapterError::UniqueViolation => {
                    Error::Conflict("Post with this title already exists".to_string())
                }
                e => Error::new(e),
            })
    }

    pub async fn delete(&self, actor: &CurrentUser, slug: &str) -> AppResult<()> {
        let post = self
            .repository
            .get_by_slug(slug.to_string())
            .await?
            .ok_or_else(|| Error::NotFound(format!("Post with slug {slug} not found")))?;

        if post.user_id != actor.id {
            return Err(Error::Forbidden(
                "You can only delete your own posts".to_string(),
            ));
        }

        let deleted = self.repository.delete(post.id).await?;
        if deleted == 0 {
            return Err(Error::NotFound(format!(
                "Post with id {} not found",
                post.id
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::repository::post::MockPostRepository;
    use crate::core::uploads::MockUploadStorage;
    use chrono::Utc;

    fn post_from(data: NewPost, id: i32) -> Post {
        Post {
            id,
            title: data.title,
            content: data.content,
            slug: data.slug,
            category: data.category,
            image_url: data.image_url,
            view_count: 0,
            user_id: data.user_id,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            user: None,
        }
    }

    fn sample_post(id: i32, user_id: i32) -> Post {
        post_from(
            NewPost {
                title: "Title".to_string(),
                content: "Content".to_string(),
                category: "general".to_string(),
                slug: "title".to_string(),
                image_url: None,
                user_id,
            },
            id,
        )
    }

    #[tokio::test]
    async fn create_derives_the_slug_from_the_title() {
        let mut repo = MockPostRepository::new();
        repo.expect_create()
            .withf(|data: &NewPost| data.slug == "hello-world")
            .returning(|data| Ok(post_from(data, 1)));

        let service = Posts::new(repo, MockUploadStorage::new());
        let post = service
            .create(
                1,
                "Hello World".to_string(),
                "Content".to_string(),
                "general".to_string(),
                None,
            )
            .await
            .unwrap();

        assert_eq!(post.slug, "hello-world");
        assert_eq!(post.image_url, None);
    }

    #[tokio::test]
    async fn create_stores_the_image_first() {
        let mut repo = MockPostRepository::new();
        repo.expect_create().returning(|data| Ok(post_from(data, 1)));

        let mut uploads = MockUploadStorage::new();
        uploads
            .expect_store()
            .returning(|_| Ok("http://localhost:3000/uploads/abc.png".to_string()));

        let service = Posts::new(repo, uploads);
        let post = service
            .create(
                1,
                "Hello".to_string(),
                "Content".to_string(),
                "general".to_string(),
                Some(ImageUpload {
                    filename: "cat.png".to_string(),
                    content: vec![1, 2, 3],
                }),
            )
            .await
            .unwrap();

        assert_eq!(
            post.image_url.as_deref(),
            Some("http://localhost:3000/uploads/abc.png")
        );
    }

    #[tokio::test]
    async fn update_regenerates_the_slug_when_the_title_changes() {
        let mut repo = MockPostRepository::new();
        repo.expect_get_by_slug()
            .returning(|_| Ok(Some(sample_post(1, 1))));
        repo.expect_update()
            .withf(|_, update: &PostUpdate| update.slug.as_deref() == Some("brand-new-title"))
            .returning(|_, _| Ok(sample_post(1, 1)));

        let service = Posts::new(repo, MockUploadStorage::new());
        let actor = CurrentUser {
            id: 1,
            email: "foo@bar.com".to_string(),
        };
        let update = PostUpdate {
            title: Some("Brand New Title".to_string()),
            ..Default::default()
        };

        service.update(&actor, "title", update, None).await.unwrap();
    }

    #[tokio::test]
    async fn update_by_non_owner_is_forbidden() {
        let mut repo = MockPostRepository::new();
        repo.expect_get_by_slug()
            .returning(|_| Ok(Some(sample_post(1, 1))));

        let service = Posts::new(repo, MockUploadStorage::new());
        let actor = CurrentUser {
            id: 2,
            email: "other@bar.com".to_string(),
        };

        let result = service
            .update(&actor, "title", PostUpdate::default(), None)
            .await;
        assert!(matches!(result, Err(Error::Forbidden(_))));
    }

    #[tokio::test]
    async fn delete_by_non_owner_is_forbidden() {
        let mut repo = MockPostRepository::new();
        repo.expect_get_by_slug()
            .returning(|_| Ok(Some(sample_post(1, 1))));

        let service = Posts::new(repo, MockUploadStorage::new());
        let actor = CurrentUser {
            id: 2,
            email: "other@bar.com".to_string(),
        };

        assert!(matches!(
            service.delete(&actor, "title").await,
            Err(Error::Forbidden(_))
        ));
    }

    #[tokio::test]
    async fn page_past_the_end_echoes_the_requested_page() {
        let mut repo = MockPostRepository::new();
        repo.expect_get_paginated().returning(|_, _| Ok((vec![], 25)));

        let service = Posts::new(repo, MockUploadStorage::new());
        let query = PageQuery {
            page: 9,
            ..Default::default()
        };
        let page = service
            .get_paginated(PostFilter::default(), query)
            .await
            .unwrap();

        assert!(page.data.is_empty());
        assert_eq!(page.metadata.current_page, 9);
        assert_eq!(page.metadata.total_pages, 3);
        assert_eq!(page.metadata.total_count, 25);
    }

    #[tokio::test]
    async fn concatenated_pages_cover_every_item_exactly_once() {
        let mut repo = MockPostRepository::new();
        repo.expect_get_paginated().returning(|_, query| {
            let all: Vec<Post> = (1..=25).map(|id| sample_post(id, 1)).collect();
            let start = query.offset() as usize;
            let end = (start + query.limit as usize).min(all.len());
            Ok((all[start..end].to_vec(), 25))
        });

        let service = Posts::new(repo, MockUploadStorage::new());

        let mut seen = Vec::new();
        for page in 1..=3 {
            let query = PageQuery {
                page,
                ..Default::default()
            };
            let result = service
                .get_paginated(PostFilter::default(), query)
                .await
                .unwrap();
            seen.extend(result.data.into_iter().map(|post| post.id));
        }

        assert_eq!(seen.len(), 25);
        let mut deduped = seen.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), 25);
    }

    #[tokio::test]
    async fn missing_slug_is_not_found() {
        let mut repo = MockPostRepository::new();
        repo.expect_get_by_slug().returning(|_| Ok(None));

        let service = Posts::new(repo, MockUploadStorage::new());
        assert!(matches!(
            service.get_by_slug("nope").await,
            Err(Error::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn slug_lookup_bumps_the_view_counter() {
        let mut repo = MockPostRepository::new();
        repo.expect_get_by_slug()
            .returning(|_| Ok(Some(sample_post(1, 1))));
        repo.expect_bump_view_count()
            .times(1)
            .withf(|id| *id == 1)
            .returning(|_| Ok(()));

        let service = Posts::new(repo, MockUploadStorage::new());
        service.get_by_slug("title").await.unwrap();
    }
}
