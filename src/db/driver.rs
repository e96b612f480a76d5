use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// Contains a connection pool for postgres with sea-orm. Cheap to clone; an
/// instance of this is shared through the app state and the adapters.
#[derive(Debug, Clone)]
pub struct SeaormDriver {
    pool: DatabaseConnection,
}

impl SeaormDriver {
    pub async fn new(url: &str) -> Self {
        let pool = Database::connect(ConnectOptions::new(url.to_string()))
            .await
            .expect("Could not establish database connection");
        Self { pool }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.pool
    }
}
