use crate::core::models::comment_like::CommentLike;
use crate::core::pagination::{PageQuery, SortOrder};
use crate::core::repository::comment_like::{CommentLikeFilter, CommentLikeRepository};
use crate::db::adapters::AdapterError;
use crate::db::driver::SeaormDriver;
use crate::db::entities::comment_likes::{
    ActiveModel as LikeModel, Column, Entity as LikeEntity,
};
use crate::db::entities::{comments, users};
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, Order, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};

#[derive(Debug, Clone)]
pub struct CommentLikeAdapter {
    pub driver: SeaormDriver,
}

impl CommentLikeAdapter {
    pub fn new(driver: SeaormDriver) -> Self {
        Self { driver }
    }
}

fn sort_column(sort_by: &str) -> Column {
    match sort_by {
        "updatedAt" => Column::UpdatedAt,
        _ => Column::CreatedAt,
    }
}

fn order(sort_order: SortOrder) -> Order {
    match sort_order {
        SortOrder::Asc => Order::Asc,
        SortOrder::Desc => Order::Desc,
    }
}

async fn adjust_like_count<C: ConnectionTrait>(
    conn: &C,
    comment_id: i32,
    delta: i32,
) -> Result<(), sea_orm::DbErr> {
    comments::Entity::update_many()
        .col_expr(
            comments::Column::LikeCount,
            Expr::col(comments::Column::LikeCount).add(delta),
        )
        .filter(comments::Column::Id.eq(comment_id))
        .exec(conn)
        .await
        .map(|_| ())
}

#[async_trait]
impl CommentLikeRepository for CommentLikeAdapter {
    async fn get_by_user_and_comment(
        &self,
        user_id: i32,
        comment_id: i32,
    ) -> Result<Option<CommentLike>, AdapterError> {
        LikeEntity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::CommentId.eq(comment_id))
            .one(self.driver.connection())
            .await
            .map(|like| like.map(CommentLike::from))
            .map_err(AdapterError::from)
    }

    async fn get_paginated(
        &self,
        filter: CommentLikeFilter,
        query: PageQuery,
    ) -> Result<(Vec<CommentLike>, u64), AdapterError> {
        let conn = self.driver.connection();

        let mut select = LikeEntity::find();
        if let Some(comment_id) = filter.comment_id {
            select = select.filter(Column::CommentId.eq(comment_id));
        }
        if let Some(user_id) = filter.user_id {
            select = select.filter(Column::UserId.eq(user_id));
        }

        let total_count = select.clone().count(conn).await?;

        let select = select
            .order_by(sort_column(&query.sort_by), order(query.sort_order))
            .offset(query.offset())
            .limit(query.limit);

        // Comment scoped pages carry the user, user scoped ones the comment.
        let likes = if filter.user_id.is_some() {
            select
                .find_also_related(comments::Entity)
                .all(conn)
                .await?
                .into_iter()
                .map(|(like, comment)| CommentLike::from_parts(like, None, comment))
                .collect()
        } else {
            select
                .find_also_related(users::Entity)
                .all(conn)
                .await?
                .into_iter()
                .map(|(like, user)| CommentLike::from_parts(like, user, None))
                .collect()
        };

        Ok((likes, total_count))
    }

    async fn insert(
        &self,
        comment_id: i32,
        user_id: i32,
        is_like: bool,
    ) -> Result<CommentLike, AdapterError> {
        let txn = self.driver.connection().begin().await?;

        let now = Utc::now();
        let like = LikeEntity::insert(LikeModel {
            is_like: Set(is_like),
            comment_id: Set(comment_id),
            user_id: Set(user_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        })
        .exec_with_returning(&txn)
        .await?;

        adjust_like_count(&txn, comment_id, if is_like { 1 } else { -1 }).await?;

        txn.commit().await?;
        Ok(CommentLike::from(like))
    }

    async fn flip(&self, like: CommentLike) -> Result<CommentLike, AdapterError> {
        let txn = self.driver.connection().begin().await?;

        let flipped = !like.is_like;
        let updated = LikeModel {
            id: Set(like.id),
            is_like: Set(flipped),
            updated_at: Set(Utc::now()),
            ..Default::default()
        }
        .update(&txn)
        .await?;

        // the row both loses its old contribution and gains the new one
        adjust_like_count(&txn, like.comment_id, if flipped { 2 } else { -2 }).await?;

        txn.commit().await?;
        Ok(CommentLike::from(updated))
    }

    async fn remove(&self, like: CommentLike) -> Result<u64, AdapterError> {
        let txn = self.driver.connection().begin().await?;

        let deleted = LikeEntity::delete_by_id(like.id)
            .exec(&txn)
            .await?
            .rows_affected;

        if deleted > 0 {
            adjust_like_count(&txn, like.comment_id, if like.is_like { -1 } else { 1 }).await?;
        }

        txn.commit().await?;
        Ok(deleted)
    }
}
