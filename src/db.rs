// src/db.rs

//! Persistence gateway.
//!
//! Every request works through one [`Session`], a transaction that is either
//! committed explicitly or rolled back when dropped. Entity-specific SQL lives
//! in the [`Record`] impls next to each model.

use std::{str::FromStr, time::Duration};

use async_trait::async_trait;
use sqlx::{
    FromRow, Sqlite, SqliteConnection, SqlitePool, Transaction,
    migrate::Migrator,
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteRow},
};

use crate::{config::Config, error::AppError};

/// Embedded schema migrations.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Builds the connection pool. Foreign key enforcement is switched on for every connection.
pub async fn connect(config: &Config) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(3))
        .connect_with(options)
        .await
}

/// A persisted entity type.
#[async_trait]
pub trait Record: for<'r> FromRow<'r, SqliteRow> + Send + Unpin + Sized {
    /// Table holding the rows.
    const TABLE: &'static str;

    /// Column list used for reads, in struct order.
    const COLUMNS: &'static str;

    /// Human-readable name used in error messages.
    const LABEL: &'static str;

    /// Fields needed to construct a new row.
    type Create: Send + Sync;

    /// Inserts a new row and returns it with its generated id.
    async fn insert(conn: &mut SqliteConnection, new: &Self::Create) -> Result<Self, AppError>;
}

/// Request-scoped unit of work.
pub struct Session {
    tx: Transaction<'static, Sqlite>,
}

impl Session {
    /// Opens a read session. SQLite defers locking until the first statement.
    pub async fn acquire(pool: &SqlitePool) -> Result<Self, AppError> {
        let tx = pool.begin().await?;
        Ok(Self { tx })
    }

    /// Opens a session that will write. The write lock is taken up front so
    /// reads done before the write (FK checks) never need a lock upgrade;
    /// concurrent writers queue on the busy timeout instead of failing with SQLITE_BUSY.
    pub async fn acquire_write(pool: &SqlitePool) -> Result<Self, AppError> {
        let tx = pool.begin_with("BEGIN IMMEDIATE").await?;
        Ok(Self { tx })
    }

    /// Commits the work done in this session. Sessions dropped without commit roll back.
    pub async fn commit(self) -> Result<(), AppError> {
        self.tx.commit().await?;
        Ok(())
    }

    pub async fn insert<T: Record>(&mut self, new: &T::Create) -> Result<T, AppError> {
        T::insert(&mut *self.tx, new).await
    }

    pub async fn get_by_id<T: Record>(&mut self, id: i64) -> Result<T, AppError> {
        let sql = format!("SELECT {} FROM {} WHERE id = ?", T::COLUMNS, T::TABLE);
        sqlx::query_as::<_, T>(&sql)
            .bind(id)
            .fetch_optional(&mut *self.tx)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("{} not found", T::LABEL)))
    }

    pub async fn list<T: Record>(&mut self) -> Result<Vec<T>, AppError> {
        let sql = format!("SELECT {} FROM {} ORDER BY id", T::COLUMNS, T::TABLE);
        let rows = sqlx::query_as::<_, T>(&sql)
            .fetch_all(&mut *self.tx)
            .await?;
        Ok(rows)
    }

    /// Deletes a row; dependent rows go with it through `ON DELETE CASCADE`.
    pub async fn delete_cascading<T: Record>(&mut self, id: i64) -> Result<(), AppError> {
        let sql = format!("DELETE FROM {} WHERE id = ?", T::TABLE);
        let result = sqlx::query(&sql).bind(id).execute(&mut *self.tx).await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("{} not found", T::LABEL)));
        }
        Ok(())
    }
}

/// Fails with `ConstraintViolation` naming `field` when `id` has no row in `T`'s table.
pub async fn ensure_exists<T: Record>(
    conn: &mut SqliteConnection,
    id: i64,
    field: &str,
) -> Result<(), AppError> {
    let sql = format!("SELECT 1 FROM {} WHERE id = ?", T::TABLE);
    let found: Option<i64> = sqlx::query_scalar(&sql)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

    match found {
        Some(_) => Ok(()),
        None => Err(AppError::ConstraintViolation(format!(
            "{} {} does not exist",
            field, id
        ))),
    }
}
