use crate::{
    core::{
        models::user::User,
        repository::user::{NewUser, UserRepository, UserUpdate},
    },
    error::Error,
    AppResult,
};
use crate::core::auth::AuthenticationError;

const BCRYPT_COST: u32 = 10;

#[derive(Debug, Clone)]
pub struct Users<R> {
    pub repository: R,
}

impl<R> Users<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub async fn get_all(&self) -> AppResult<Vec<User>> {
        self.repository.get_all().await.map_err(Error::new)
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<User> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("User with id {id} not found")))
    }

    pub async fn create(&self, mut data: NewUser) -> AppResult<User> {
        if self
            .repository
            .get_by_email(data.email.clone())
            .await?
            .is_some()
        {
            return Err(AuthenticationError::EmailTaken.into());
        }

        data.password = bcrypt::hash(&data.password, BCRYPT_COST)?;
        self.repository.create(data).await.map_err(Error::new)
    }

    pub async fn update(&self, id: i32, mut data: UserUpdate) -> AppResult<User> {
        self.get_by_id(id).await?;

        if let Some(password) = data.password {
            data.password = Some(bcrypt::hash(&password, BCRYPT_COST)?);
        }

        self.repository.update(id, data).await.map_err(Error::new)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let deleted = self.repository.delete(id).await?;
        if deleted == 0 {
            return Err(Error::NotFound(format!("User with id {id} not found")));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::repository::user::MockUserRepository;
    use chrono::Utc;

    fn sample_user(id: i32) -> User {
        User {
            id,
            name: "Foo".to_string(),
            surname: "Bar".to_string(),
            email: "foo@bar.com".to_string(),
            password: String::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn missing_user_is_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(None));

        let service = Users::new(repo);
        assert!(matches!(
            service.get_by_id(1).await,
            Err(Error::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn create_hashes_the_password() {
        let mut repo = MockUserRepository::new();
        repo.expect_get_by_email().returning(|_| Ok(None));
        repo.expect_create()
            .withf(|data: &NewUser| data.password != "plaintext")
            .returning(|data| {
                let mut user = sample_user(1);
                user.password = data.password;
                Ok(user)
            });

        let service = Users::new(repo);
        let user = service
            .create(NewUser {
                name: "Foo".to_string(),
                surname: "Bar".to_string(),
                email: "foo@bar.com".to_string(),
                password: "plaintext".to_string(),
            })
            .await
            .unwrap();

        assert!(bcrypt::verify("plaintext", &user.password).unwrap());
    }

    #[tokio::test]
    async fn delete_of_missing_user_is_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_delete().returning(|_| Ok(0));

        let service = Users::new(repo);
        assert!(matches!(service.delete(1).await, Err(Error::NotFound(_))));
    }
}
