pub mod comment_likes;
pub mod comments;
pub mod posts;
pub mod users;
