use super::{post::Post, user::User};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i32,
    pub content: String,
    #[serde(rename = "like_count")]
    pub like_count: i32,
    pub post_id: i32,
    #[serde(skip_serializing)]
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none", skip_deserializing)]
    pub user: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none", skip_deserializing)]
    pub post: Option<Post>,
}

impl Comment {
    pub fn from_parts(
        model: crate::db::entities::comments::Model,
        user: Option<crate::db::entities::users::Model>,
        post: Option<crate::db::entities::posts::Model>,
    ) -> Self {
        let mut comment = Self::from(model);
        comment.user = user.map(User::from);
        comment.post = post.map(Post::from);
        comment
    }
}

impl From<crate::db::entities::comments::Model> for Comment {
    fn from(
        crate::db::entities::comments::Model {
            id,
            content,
            like_count,
            post_id,
            user_id,
            created_at,
            updated_at,
        }: crate::db::entities::comments::Model,
    ) -> Self {
        Self {
            id,
            content,
            like_count,
            post_id,
            user_id,
            created_at,
            updated_at,
            user: None,
            post: None,
        }
    }
}
