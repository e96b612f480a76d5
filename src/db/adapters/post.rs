use crate::core::models::post::Post;
use crate::core::pagination::{PageQuery, SortOrder};
use crate::core::repository::post::{NewPost, PostFilter, PostRepository, PostUpdate};
use crate::db::adapters::AdapterError;
use crate::db::driver::SeaormDriver;
use crate::db::entities::posts::{ActiveModel as PostModel, Column, Entity as PostEntity};
use crate::db::entities::{posts, users};
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, Order, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

#[derive(Debug, Clone)]
pub struct PostAdapter {
    pub driver: SeaormDriver,
}

impl PostAdapter {
    pub fn new(driver: SeaormDriver) -> Self {
        Self { driver }
    }
}

/// Sortable columns exposed on the wire. Anything else falls back to the
/// creation timestamp.
fn sort_column(sort_by: &str) -> Column {
    match sort_by {
        "updatedAt" => Column::UpdatedAt,
        "title" => Column::Title,
        "category" => Column::Category,
        "view_count" | "viewCount" => Column::ViewCount,
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
impl PostRepository for PostAdapter {
    async fn get_paginated(
        &self,
        filter: PostFilter,
        query: PageQuery,
    ) -> Result<(Vec<Post>, u64), AdapterError> {
        let conn = self.driver.connection();

        let mut select = PostEntity::find();
        if let Some(category) = filter.category {
            select = select.filter(Column::Category.eq(category));
        }
        if let Some(user_id) = filter.user_id {
            select = select.filter(Column::UserId.eq(user_id));
        }
        if let Some(search) = filter.search {
            let pattern = format!("%{search}%");
            select = select.filter(
                Condition::any()
                    .add(Expr::col((posts::Entity, Column::Title)).ilike(pattern.clone()))
                    .add(Expr::col((posts::Entity, Column::Content)).ilike(pattern.clone()))
                    .add(Expr::col((posts::Entity, Column::Category)).ilike(pattern)),
            );
        }

        let total_count = select.clone().count(conn).await?;

        let rows = select
            .find_also_related(users::Entity)
            .order_by(sort_column(&query.sort_by), order(query.sort_order))
            .offset(query.offset())
            .limit(query.limit)
            .all(conn)
            .await?;

        let posts = rows
            .into_iter()
            .map(|(post, user)| Post::from_parts(post, user))
            .collect();

        Ok((posts, total_count))
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Post>, AdapterError> {
        PostEntity::find_by_id(id)
            .find_also_related(users::Entity)
            .one(self.driver.connection())
            .await
            .map(|row| row.map(|(post, user)| Post::from_parts(post, user)))
            .map_err(AdapterError::from)
    }

    async fn get_by_slug(&self, slug: String) -> Result<Option<Post>, AdapterError> {
        PostEntity::find()
            .filter(Column::Slug.eq(slug))
            .find_also_related(users::Entity)
            .one(self.driver.connection())
            .await
            .map(|row| row.map(|(post, user)| Post::from_parts(post, user)))
            .map_err(AdapterError::from)
    }

    async fn bump_view_count(&self, id: i32) -> Result<(), AdapterError> {
        PostEntity::update_many()
            .col_expr(Column::ViewCount, Expr::col(Column::ViewCount).add(1))
            .filter(Column::Id.eq(id))
            .exec(self.driver.connection())
            .await
            .map(|_| ())
            .map_err(AdapterError::from)
    }

    async fn create(&self, data: NewPost) -> Result<Post, AdapterError> {
        let now = Utc::now();
        let post = PostModel {
            title: Set(data.title),
            content: Set(data.content),
            category: Set(data.category),
            slug: Set(data.slug),
            image_url: Set(data.image_url),
            view_count: Set(0),
            user_id: Set(data.user_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        PostEntity::insert(post)
            .exec_with_returning(self.driver.connection())
            .await
            .map(Post::from)
            .map_err(AdapterError::from)
    }

    async fn update(&self, id: i32, data: PostUpdate) -> Result<Post, AdapterError> {
        let mut post = PostModel {
            id: Set(id),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };
        if let Some(title) = data.title {
            post.title = Set(title);
        }
        if let Some(content) = data.content {
            post.content = Set(content);
        }
        if let Some(category) = data.category {
            post.category = Set(category);
        }
        if let Some(image_url) = data.image_url {
            post.image_url = Set(Some(image_url));
        }
        if let Some(slug) = data.slug {
            post.slug = Set(slug);
        }
        post.update(self.driver.connection())
            .await
            .map(Post::from)
            .map_err(AdapterError::from)
    }

    async fn delete(&self, id: i32) -> Result<u64, AdapterError> {
        PostEntity::delete_by_id(id)
            .exec(self.driver.connection())
            .await
            .map(|res| res.rows_affected)
            .map_err(AdapterError::from)
    }
}
