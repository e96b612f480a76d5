use crate::{
    core::{
        models::user::User,
        repository::user::{NewUser, UserRepository},
    },
    error::Error,
    AppResult,
};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// In seconds, 24 hours.
pub const TOKEN_DURATION: u64 = 60 * 60 * 24;

const BCRYPT_COST: u32 = 10;

/// Bearer token claims. `sub` is the user id, `iat` and `exp` are unix
/// timestamps as per RFC 7519.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub iss: String,
    pub iat: u64,
    pub exp: u64,
}

/// HS256 signing and verification keys derived from the configured secret.
/// Cheap to clone, shared through the app state.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    issuer: String,
}

impl TokenKeys {
    pub fn new(secret: &[u8], issuer: String) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            issuer,
        }
    }

    pub fn generate(&self, user: &User) -> Result<String, jsonwebtoken::errors::Error> {
        let iat = jsonwebtoken::get_current_timestamp();
        let claims = Claims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            iss: self.issuer.clone(),
            iat,
            exp: iat + TOKEN_DURATION,
        };
        jsonwebtoken::encode(&Header::default(), &claims, &self.encoding)
    }

    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.issuer]);
        jsonwebtoken::decode::<Claims>(token, &self.decoding, &validation).map(|data| data.claims)
    }
}

impl std::fmt::Debug for TokenKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenKeys")
            .field("issuer", &self.issuer)
            .finish_non_exhaustive()
    }
}

/// The authenticated caller, inserted into request extensions by the bearer
/// guard.
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUser {
    pub id: i32,
    pub email: String,
}

/// Issued on successful registration and login.
#[derive(Debug, Clone, Serialize)]
pub struct AccessToken {
    pub access_token: String,
}

#[derive(Debug, Clone)]
pub struct Authentication<R> {
    pub repository: R,
    pub keys: TokenKeys,
}

impl<R> Authentication<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R, keys: TokenKeys) -> Self {
        Self { repository, keys }
    }

    pub async fn register(
        &self,
        name: String,
        surname: String,
        email: String,
        password: String,
    ) -> AppResult<AccessToken> {
        if self.repository.get_by_email(email.clone()).await?.is_some() {
            return Err(AuthenticationError::EmailTaken.into());
        }

        let hashed = bcrypt::hash(&password, BCRYPT_COST)?;

        let user = self
            .repository
            .create(NewUser {
                name,
                surname,
                email,
                password: hashed,
            })
            .await?;

        debug!("Registered user {}", user.id);

        let access_token = self.keys.generate(&user)?;
        Ok(AccessToken { access_token })
    }

    pub async fn login(&self, email: String, password: String) -> AppResult<AccessToken> {
        let user = match self.repository.get_by_email(email).await? {
            Some(user) => user,
            None => return Err(AuthenticationError::InvalidCredentials.into()),
        };

        if !bcrypt::verify(&password, &user.password)? {
            return Err(AuthenticationError::InvalidCredentials.into());
        }

        let access_token = self.keys.generate(&user)?;
        Ok(AccessToken { access_token })
    }

    pub async fn current_user(&self, id: i32) -> AppResult<User> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| Error::new(AuthenticationError::Unauthenticated))
    }
}

#[derive(Debug, Error, Serialize)]
pub enum AuthenticationError {
    #[error("Unauthenticated")]
    Unauthenticated,
    #[error("This user already exists with this email")]
    EmailTaken,
    #[error("Invalid credentials")]
    InvalidCredentials,
}
