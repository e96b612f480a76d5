use crate::{core::models::user::User, db::adapters::AdapterError};
use async_trait::async_trait;

/// Insert payload. The password is expected to be hashed by the caller.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository {
    async fn get_by_id(&self, id: i32) -> Result<Option<User>, AdapterError>;

    async fn get_by_email(&self, email: String) -> Result<Option<User>, AdapterError>;

    async fn get_all(&self) -> Result<Vec<User>, AdapterError>;

    async fn create(&self, data: NewUser) -> Result<User, AdapterError>;

    async fn update(&self, id: i32, data: UserUpdate) -> Result<User, AdapterError>;

    async fn delete(&self, id: i32) -> Result<u64, AdapterError>;
}
