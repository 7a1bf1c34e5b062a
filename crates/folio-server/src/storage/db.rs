//! SQLite database layer (embedded, survives restarts)

use anyhow::{Context, Result};
use chrono::Utc;
use folio_types::{validate_entry, validate_visitor_id, GuestbookEntry, LikeState};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::sync::Arc;

use async_trait::async_trait;

use super::{Store, StoreBackend, StoreResult};

pub struct Database {
    pool: Arc<SqlitePool>,
}

impl Database {
    pub async fn new(database_path: &str) -> Result<Self> {
        tracing::info!("Opening SQLite database at: {}", database_path);

        if let Some(parent) = std::path::Path::new(database_path).parent() {
            tokio::fs::create_dir_all(parent).await.with_context(|| {
                format!("Failed to create database directory: {}", parent.display())
            })?;
        }

        let options = SqliteConnectOptions::new()
            .filename(database_path)
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .synchronous(sqlx::sqlite::SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .with_context(|| {
                format!("Failed to connect to SQLite database at: {}", database_path)
            })?;

        Self::run_migrations(&pool)
            .await
            .context("Failed to run database migrations")?;

        tracing::info!("Database initialization complete");

        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    async fn run_migrations(pool: &SqlitePool) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS guestbook (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                message TEXT NOT NULL,
                created_at DATETIME NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS likes (
                visitor_id TEXT PRIMARY KEY,
                created_at DATETIME NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    async fn count_likes(&self) -> StoreResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM likes")
            .fetch_one(&*self.pool)
            .await?;

        Ok(count.max(0) as u64)
    }
}

#[async_trait]
impl Store for Database {
    async fn list_entries(&self) -> StoreResult<Vec<GuestbookEntry>> {
        // rowid breaks timestamp ties in insertion order
        let rows: Vec<EntryRow> = sqlx::query_as(
            r#"
            SELECT id, name, message, created_at
            FROM guestbook
            ORDER BY created_at DESC, rowid ASC
            "#,
        )
        .fetch_all(&*self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn append_entry(&self, name: &str, message: &str) -> StoreResult<GuestbookEntry> {
        let (name, message) = validate_entry(name, message)?;

        let entry = GuestbookEntry {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            message,
            created_at: Utc::now(),
        };

        sqlx::query(
            r#"
            INSERT INTO guestbook (id, name, message, created_at)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&entry.id)
        .bind(&entry.name)
        .bind(&entry.message)
        .bind(entry.created_at)
        .execute(&*self.pool)
        .await?;

        Ok(entry)
    }

    async fn remove_entry(&self, id: &str) -> StoreResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM guestbook WHERE id = ?1
            "#,
        )
        .bind(id)
        .execute(&*self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn like_state(&self, visitor_id: &str) -> StoreResult<LikeState> {
        let count = self.count_likes().await?;

        if visitor_id.is_empty() {
            return Ok(LikeState {
                count,
                liked: false,
            });
        }

        let row: Option<(String,)> = sqlx::query_as(
            r#"
            SELECT visitor_id FROM likes WHERE visitor_id = ?1
            "#,
        )
        .bind(visitor_id)
        .fetch_optional(&*self.pool)
        .await?;

        Ok(LikeState {
            count,
            liked: row.is_some(),
        })
    }

    async fn toggle_like(&self, visitor_id: &str) -> StoreResult<LikeState> {
        let visitor_id = validate_visitor_id(visitor_id)?;

        let existing: Option<(String,)> = sqlx::query_as(
            r#"
            SELECT visitor_id FROM likes WHERE visitor_id = ?1
            "#,
        )
        .bind(visitor_id)
        .fetch_optional(&*self.pool)
        .await?;

        // Check, write, and recount run as three separate statements; two
        // concurrent toggles for the same visitor can interleave.
        let liked = if existing.is_some() {
            sqlx::query(
                r#"
                DELETE FROM likes WHERE visitor_id = ?1
                "#,
            )
            .bind(visitor_id)
            .execute(&*self.pool)
            .await?;
            false
        } else {
            sqlx::query(
                r#"
                INSERT INTO likes (visitor_id, created_at) VALUES (?1, ?2)
                "#,
            )
            .bind(visitor_id)
            .bind(Utc::now())
            .execute(&*self.pool)
            .await?;
            true
        };

        Ok(LikeState {
            count: self.count_likes().await?,
            liked,
        })
    }

    fn backend(&self) -> StoreBackend {
        StoreBackend::Database
    }
}

#[derive(sqlx::FromRow)]
struct EntryRow {
    id: String,
    name: String,
    message: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<EntryRow> for GuestbookEntry {
    fn from(r: EntryRow) -> Self {
        GuestbookEntry {
            id: r.id,
            name: r.name,
            message: r.message,
            created_at: r.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_db_path() -> String {
        std::env::temp_dir()
            .join(format!("folio-test-{}.db", uuid::Uuid::new_v4()))
            .to_string_lossy()
            .to_string()
    }

    #[tokio::test]
    async fn guestbook_round_trip() {
        let path = temp_db_path();
        let db = Database::new(&path).await.unwrap();

        let entry = db.append_entry(" Ann ", " hi ").await.unwrap();
        assert_eq!(entry.name, "Ann");
        assert_eq!(entry.message, "hi");

        let entries = db.list_entries().await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, entry.id);

        assert!(db.remove_entry(&entry.id).await.unwrap());
        assert!(!db.remove_entry(&entry.id).await.unwrap());
        assert!(db.list_entries().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn entries_survive_a_reopen() {
        let path = temp_db_path();

        let entry = {
            let db = Database::new(&path).await.unwrap();
            db.append_entry("Ann", "still here").await.unwrap()
        };

        let db = Database::new(&path).await.unwrap();
        let entries = db.list_entries().await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, entry.id);
    }

    #[tokio::test]
    async fn toggle_is_an_involution() {
        let path = temp_db_path();
        let db = Database::new(&path).await.unwrap();

        let state = db.toggle_like("abc").await.unwrap();
        assert_eq!(state, LikeState { count: 1, liked: true });

        let state = db.toggle_like("abc").await.unwrap();
        assert_eq!(state, LikeState { count: 0, liked: false });
    }

    #[tokio::test]
    async fn count_aggregates_across_visitors() {
        let path = temp_db_path();
        let db = Database::new(&path).await.unwrap();

        db.toggle_like("v1").await.unwrap();
        db.toggle_like("v2").await.unwrap();

        let state = db.like_state("").await.unwrap();
        assert_eq!(state, LikeState { count: 2, liked: false });

        let state = db.like_state("v2").await.unwrap();
        assert_eq!(state, LikeState { count: 2, liked: true });
    }

    #[tokio::test]
    async fn validation_failures_leave_tables_untouched() {
        let path = temp_db_path();
        let db = Database::new(&path).await.unwrap();

        assert!(db.append_entry("", "hi").await.is_err());
        assert!(db.toggle_like("").await.is_err());

        assert!(db.list_entries().await.unwrap().is_empty());
        assert_eq!(db.like_state("").await.unwrap().count, 0);
    }
}
