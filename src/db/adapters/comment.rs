use crate::core::models::comment::Comment;
use crate::core::pagination::{PageQuery, SortOrder};
use crate::core::repository::comment::{CommentFilter, CommentRepository, NewComment};
use crate::db::adapters::AdapterError;
use crate::db::driver::SeaormDriver;
use crate::db::entities::comments::{ActiveModel as CommentModel, Column, Entity as CommentEntity};
use crate::db::entities::{posts, users};
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, Order, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

#[derive(Debug, Clone)]
pub struct CommentAdapter {
    pub driver: SeaormDriver,
}

impl CommentAdapter {
    pub fn new(driver: SeaormDriver) -> Self {
        Self { driver }
    }
}

fn sort_column(sort_by: &str) -> Column {
    match sort_by {
        "updatedAt" => Column::UpdatedAt,
        "like_count" | "likeCount" => Column::LikeCount,
        _ => Column::CreatedAt,
    }
}

fn order(sort_order: SortOrder) -> Order {
    match sort_order {
        SortOrder::Asc => Order::Asc,
        SortOrder::Desc => Order::Desc,
    }
}

#[async_trait]
impl CommentRepository for CommentAdapter {
    async fn get_paginated(
        &self,
        filter: CommentFilter,
        query: PageQuery,
    ) -> Result<(Vec<Comment>, u64), AdapterError> {
        let conn = self.driver.connection();

        let mut select = CommentEntity::find();
        if let Some(post_id) = filter.post_id {
            select = select.filter(Column::PostId.eq(post_id));
        }
        if let Some(user_id) = filter.user_id {
            select = select.filter(Column::UserId.eq(user_id));
        }

        let total_count = select.clone().count(conn).await?;

        let select = select
            .order_by(sort_column(&query.sort_by), order(query.sort_order))
            .offset(query.offset())
            .limit(query.limit);

        // Post scoped pages carry the author, user scoped ones the post.
        let comments = if filter.user_id.is_some() {
            select
                .find_also_related(posts::Entity)
                .all(conn)
                .await?
                .into_iter()
                .map(|(comment, post)| Comment::from_parts(comment, None, post))
                .collect()
        } else {
            select
                .find_also_related(users::Entity)
                .all(conn)
                .await?
                .into_iter()
                .map(|(comment, user)| Comment::from_parts(comment, user, None))
                .collect()
        };

        Ok((comments, total_count))
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Comment>, AdapterError> {
        let conn = self.driver.connection();

        let Some((comment, user)) = CommentEntity::find_by_id(id)
            .find_also_related(users::Entity)
            .one(conn)
            .await?
        else {
            return Ok(None);
        };

        let post = posts::Entity::find_by_id(comment.post_id).one(conn).await?;

        Ok(Some(Comment::from_parts(comment, user, post)))
    }

    async fn count_for_post(&self, post_id: i32) -> Result<u64, AdapterError> {
        CommentEntity::find()
            .filter(Column::PostId.eq(post_id))
            .count(self.driver.connection())
            .await
            .map_err(AdapterError::from)
    }

    async fn create(&self, data: NewComment) -> Result<Comment, AdapterError> {
        let now = Utc::now();
        let comment = CommentModel {
            content: Set(data.content),
            like_count: Set(0),
            post_id: Set(data.post_id),
            user_id: Set(data.user_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        CommentEntity::insert(comment)
            .exec_with_returning(self.driver.connection())
            .await
            .map(Comment::from)
            .map_err(AdapterError::from)
    }

    async fn update_content(&self, id: i32, content: String) -> Result<Comment, AdapterError> {
        CommentModel {
            id: Set(id),
            content: Set(content),
            updated_at: Set(Utc::now()),
            ..Default::default()
        }
        .update(self.driver.connection())
        .await
        .map(Comment::from)
        .map_err(AdapterError::from)
    }

    async fn delete(&self, id: i32) -> Result<u64, AdapterError> {
        CommentEntity::delete_by_id(id)
            .exec(self.driver.connection())
            .await
            .map(|res| res.rows_affected)
            .map_err(AdapterError::from)
    }
}
