use super::user::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub slug: String,
    pub category: String,
    pub image_url: Option<String>,
    #[serde(rename = "view_count")]
    pub view_count: i32,
    #[serde(skip_serializing)]
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none", skip_deserializing)]
    pub user: Option<User>,
}

impl Post {
    pub fn from_parts(
        model: crate::db::entities::posts::Model,
        user: Option<crate::db::entities::users::Model>,
    ) -> Self {
        let mut post = Self::from(model);
        post.user = user.map(User::from);
        post
    }
}

impl From<crate::db::entities::posts::Model> for Post {
    fn from(
        crate::db::entities::posts::Model {
            id,
            title,
            content,
            slug,
            category,
            image_url,
            view_count,
            user_id,
            created_at,
            updated_at,
        }: crate::db::entities::posts::Model,
    ) -> Self {
        Self {
            id,
            title,
            content,
            slug,
            category,
            image_url,
            view_count,
            user_id,
            created_at,
            updated_at,
            user: None,
        }
    }
}
