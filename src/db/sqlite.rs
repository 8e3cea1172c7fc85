use crate::config::Config;
use crate::db::models::TodoRecord;
use crate::db::schema::SQLITE_INIT;
use crate::error::TodoError;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Pool, Row, Sqlite};
use tracing::debug;

pub type SqlitePool = Pool<Sqlite>;

#[derive(Clone)]
pub struct TodoStorage {
    pool: SqlitePool,
}

impl TodoStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open a pool on the configured database file, creating the file if needed.
    pub async fn connect(cfg: &Config) -> Result<Self, TodoError> {
        let connect_opts = SqliteConnectOptions::new()
            .filename(&cfg.database_path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;
        Ok(Self::new(pool))
    }

    /// Connect and make sure the schema exists.
    pub async fn initialize(cfg: &Config) -> Result<Self, TodoError> {
        let storage = Self::connect(cfg).await?;
        storage.init_schema().await?;
        Ok(storage)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL. Idempotent.
    pub async fn init_schema(&self) -> Result<(), TodoError> {
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    pub async fn create(&self, name: &str, completed: bool) -> Result<TodoRecord, TodoError> {
        let created_at = Utc::now().to_rfc3339();
        let row = sqlx::query(
            r#"INSERT INTO todo (name, completed, created_at) VALUES (?, ?, ?)
               RETURNING id, name, completed, created_at"#,
        )
        .bind(name)
        .bind(completed as i64)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await?;
        Self::row_to_model(row)
    }

    /// All rows in insertion order.
    pub async fn list(&self) -> Result<Vec<TodoRecord>, TodoError> {
        let rows = sqlx::query("SELECT id, name, completed, created_at FROM todo ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        rows.into_iter().map(Self::row_to_model).collect()
    }

    pub async fn get(&self, id: i64) -> Result<TodoRecord, TodoError> {
        let row = sqlx::query("SELECT id, name, completed, created_at FROM todo WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(TodoError::NotFound(id))?;
        Self::row_to_model(row)
    }

    /// Replace `name` and `completed` of one row.
    pub async fn update(
        &self,
        id: i64,
        name: &str,
        completed: bool,
    ) -> Result<TodoRecord, TodoError> {
        let row = sqlx::query(
            r#"UPDATE todo SET
                name = ?,
                completed = ?
              WHERE id = ?
              RETURNING id, name, completed, created_at"#,
        )
        .bind(name)
        .bind(completed as i64)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(TodoError::NotFound(id))?;
        Self::row_to_model(row)
    }

    /// Unconditional delete; a missing row is not an error. Returns rows removed.
    pub async fn delete(&self, id: i64) -> Result<u64, TodoError> {
        let result = sqlx::query("DELETE FROM todo WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        debug!(id, rows = result.rows_affected(), "delete executed");
        Ok(result.rows_affected())
    }

    fn row_to_model(row: SqliteRow) -> Result<TodoRecord, TodoError> {
        let id: i64 = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let completed_i: i64 = row.try_get("completed")?;
        let created_at_str: String = row.try_get("created_at")?;

        let created_at: DateTime<Utc> = DateTime::parse_from_rfc3339(&created_at_str)
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?
            .with_timezone(&Utc);

        Ok(TodoRecord {
            id,
            name,
            completed: completed_i != 0,
            created_at,
        })
    }
}
