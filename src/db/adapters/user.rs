use crate::core::models::user::User;
use crate::core::repository::user::{NewUser, UserRepository, UserUpdate};
use crate::db::adapters::AdapterError;
use crate::db::driver::SeaormDriver;
use crate::db::entities::users::{ActiveModel as UserModel, Column, Entity as UserEntity};
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

#[derive(Debug, Clone)]
pub struct UserAdapter {
    pub driver: SeaormDriver,
}

impl UserAdapter {
    pub fn new(driver: SeaormDriver) -> Self {
        Self { driver }
    }
}

#[async_trait]
impl UserRepository for UserAdapter {
    async fn get_by_id(&self, id: i32) -> Result<Option<User>, AdapterError> {
        UserEntity::find_by_id(id)
            .one(self.driver.connection())
            .await
            .map(|user| user.map(User::from))
            .map_err(AdapterError::from)
    }

    async fn get_by_email(&self, email: String) -> Result<Option<User>, AdapterError> {
        UserEntity::find()
            .filter(Column::Email.eq(email))
            .one(self.driver.connection())
            .await
            .map(|user| user.map(User::from))
            .map_err(AdapterError::from)
    }

    async fn get_all(&self) -> Result<Vec<User>, AdapterError> {
        UserEntity::find()
            .order_by_asc(Column::Id)
            .all(self.driver.connection())
            .await
            .map(|users| users.into_iter().map(User::from).collect())
            .map_err(AdapterError::from)
    }

    async fn create(&self, data: NewUser) -> Result<User, AdapterError> {
        let now = Utc::now();
        let user = UserModel {
            name: Set(data.name),
            surname: Set(data.surname),
            email: Set(data.email),
            password: Set(data.password),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        UserEntity::insert(user)
            .exec_with_returning(self.driver.connection())
            .await
            .map(User::from)
            .map_err(AdapterError::from)
    }

    async fn update(&self, id: i32, data: UserUpdate) -> Result<User, AdapterError> {
        let mut user = UserModel {
            id: Set(id),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };
        if let Some(name) = data.name {
            user.name = Set(name);
        }
        if let Some(surname) = data.surname {
            user.surname = Set(surname);
        }
        if let Some(email) = data.email {
            user.email = Set(email);
        }
        if let Some(password) = data.password {
            user.password = Set(password);
        }
        user.update(self.driver.connection())
            .await
            .map(User::from)
            .map_err(AdapterError::from)
    }

    async fn delete(&self, id: i32) -> Result<u64, AdapterError> {
        UserEntity::delete_by_id(id)
            .exec(self.driver.connection())
            .await
            .map(|res| res.rows_affected)
            .map_err(AdapterError::from)
    }
}
