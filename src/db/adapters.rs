pub mod comment;
pub mod comment_like;
pub mod post;
pub mod user;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("SeaORM: {0}")]
    SeaORM(sea_orm::DbErr),
    #[error("Unique constraint violated")]
    UniqueViolation,
}

impl From<sea_orm::DbErr> for AdapterError {
    fn from(e: sea_orm::DbErr) -> Self {
        match e.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(_)) => Self::UniqueViolation,
            _ => Self::SeaORM(e),
        }
    }
}
