use crate::controllers::http::validation::EMAIL_REGEX;
use crate::core::repository::user::{NewUser, UserUpdate};
use serde::Deserialize;
use validify::Validify;

#[derive(Debug, Clone, Deserialize, Validify)]
pub struct CreateUser {
    #[modify(trim)]
    #[validate(length(min = 1))]
    pub name: String,
    #[modify(trim)]
    #[validate(length(min = 1))]
    pub surname: String,
    #[validate(regex(EMAIL_REGEX))]
    pub email: String,
    #[validate(length(min = 6))]
    pub password: String,
}

impl From<CreateUser> for NewUser {
    fn from(data: CreateUser) -> Self {
        Self {
            name: data.name,
            surname: data.surname,
            email: data.email,
            password: data.password,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validify)]
pub struct UpdateUser {
    #[modify(trim)]
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[modify(trim)]
    #[validate(length(min = 1))]
    pub surname: Option<String>,
    #[validate(regex(EMAIL_REGEX))]
    pub email: Option<String>,
    #[validate(length(min = 6))]
    pub password: Option<String>,
}

impl From<UpdateUser> for UserUpdate {
    fn from(data: UpdateUser) -> Self {
        Self {
            name: data.name,
            surname: data.surname,
            email: data.email,
            password: data.password,
        }
    }
}
