use std::str::FromStr;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use crate::config::DatabaseConfig;
use crate::errors::{AppError, AppResult};
use crate::models::User;

/// Credential store: the `users` table behind a SQLite pool.
#[derive(Clone)]
pub struct UserStore {
    pool: SqlitePool,
}

impl UserStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str(&config.url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await?;
        tracing::info!("Connected to database {}", config.url);
        Ok(Self::new(pool))
    }

    pub async fn init_schema(&self) -> AppResult<()> {
        sqlx::query(include_str!("../../schema.sql"))
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password, name
            FROM users
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    pub async fn create(&self, email: &str, password_hash: &str, name: &str) -> AppResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password, name)
            VALUES (?, ?, ?)
            RETURNING id, email, password, name
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .bind(name)
        .fetch_one(&self.pool)
        .await?;
        tracing::debug!("Created user {} ({})", user.id, user.email);
        Ok(user)
    }

    /// The referenced user must exist; a missing row is `NotFound`.
    pub async fn get_by_id(&self, id: i64) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password, name
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user {}", id)))
    }

    #[cfg(test)]
    pub(crate) fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[cfg(test)]
pub(crate) async fn memory_store() -> UserStore {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");
    let store = UserStore::new(pool);
    store.init_schema().await.expect("schema");
    store
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_and_find_by_email() {
        let store = memory_store().await;
        let created = store.create("alice@example.com", "hash", "Alice").await.unwrap();

        let found = store.find_by_email("alice@example.com").await.unwrap().unwrap();
        assert_eq!(found.id, created.id);
        assert_eq!(found.name, "Alice");
        assert_eq!(found.password_hash, "hash");

        assert!(store.find_by_email("ALICE@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn ids_are_assigned_in_order() {
        let store = memory_store().await;
        let first = store.create("a@example.com", "h", "A").await.unwrap();
        let second = store.create("b@example.com", "h", "B").await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected_by_storage() {
        let store = memory_store().await;
        store.create("alice@example.com", "h", "Alice").await.unwrap();

        let err = store.create("alice@example.com", "h2", "Other").await.unwrap_err();
        assert!(err.is_unique_violation());
    }

    #[tokio::test]
    async fn get_by_id_missing_is_not_found() {
        let store = memory_store().await;
        let user = store.create("alice@example.com", "h", "Alice").await.unwrap();

        assert_eq!(store.get_by_id(user.id).await.unwrap().email, "alice@example.com");
        assert!(matches!(store.get_by_id(user.id + 1).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn connect_creates_database_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.db");
        let config = DatabaseConfig {
            url: format!("sqlite://{}", path.display()),
            max_connections: 1,
            create_schema: true,
        };

        let store = UserStore::connect(&config).await.unwrap();
        store.init_schema().await.unwrap();
        store.init_schema().await.unwrap();
        assert!(path.exists());
    }
}
