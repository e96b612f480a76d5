use super::{comment::Comment, user::User};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentLike {
    pub id: i32,
    #[serde(rename = "is_like")]
    pub is_like: bool,
    pub comment_id: i32,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none", skip_deserializing)]
    pub user: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none", skip_deserializing)]
    pub comment: Option<Comment>,
}

impl CommentLike {
    pub fn from_parts(
        model: crate::db::entities::comment_likes::Model,
        user: Option<crate::db::entities::users::Model>,
        comment: Option<crate::db::entities::comments::Model>,
    ) -> Self {
        let mut like = Self::from(model);
        like.user = user.map(User::from);
        like.comment = comment.map(Comment::from);
        like
    }
}

impl From<crate::db::entities::comment_likes::Model> for CommentLike {
    fn from(
        crate::db::entities::comment_likes::Model {
            id,
            is_like,
            comment_id,
            user_id,
            created_at,
            updated_at,
        }: crate::db::entities::comment_likes::Model,
    ) -> Self {
        Self {
            id,
            is_like,
            comment_id,
            user_id,
            created_at,
            updated_at,
            user: None,
            comment: None,
        }
    }
}
