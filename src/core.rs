pub mod auth;
pub mod comment_likes;
pub mod comments;
pub mod models;
pub mod pagination;
pub mod posts;
pub mod repository;
pub mod uploads;
pub mod users;
