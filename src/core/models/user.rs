use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<crate::db::entities::users::Model> for User {
    fn from(
        crate::db::entities::users::Model {
            id,
            name,
            surname,
            email,
            password,
            created_at,
            updated_at,
        }: crate::db::entities::users::Model,
    ) -> Self {
        Self {
            id,
            name,
            surname,
            email,
            password,
            created_at,
            updated_at,
        }
    }
}
