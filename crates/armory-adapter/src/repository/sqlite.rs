//! SQLite Loadout Repository
//!
//! One table, `loadouts`, owned exclusively by this repository. Every
//! method is a single statement, so no explicit transactions are needed.
//!
//! Empty weapon slots are written as `NULL` and `NULL` is read back as
//! `""` (see [`Loadout::restore`]).

use std::str::FromStr;
use std::time::{Duration, SystemTime};

use armory_domain::model::loadout::{Loadout, LoadoutId, NewLoadout};
use armory_domain::model::owner::OwnerId;
use armory_domain::repository::loadout_repository::{LoadoutRepository, RepositoryError};
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::info;

use super::error::DbError;

/// SQL to create the loadouts table.
///
/// `created` is stored as RFC 3339 text with millisecond precision so that
/// it sorts lexically in time order.
pub const CREATE_LOADOUTS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS loadouts (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id TEXT NOT NULL,
        agent TEXT NOT NULL,
        primary_weapon TEXT,
        sidearm TEXT,
        created TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
    )
"#;

/// SQL to index loadouts by owner and creation time.
pub const CREATE_LOADOUTS_OWNER_INDEX: &str = r#"
    CREATE INDEX IF NOT EXISTS idx_loadouts_user_created ON loadouts(user_id, created)
"#;

/// Open a connection pool, creating the database file if it is missing.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, DbError> {
    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| DbError::Configuration(e.to_string()))?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect_with(options)
        .await?;

    info!(database_url, max_connections, "Connected to SQLite");
    Ok(pool)
}

/// Open a private in-memory database.
///
/// Limited to a single connection that is never recycled, since every
/// SQLite in-memory connection is its own database.
pub async fn connect_in_memory() -> Result<SqlitePool, DbError> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await?;
    Ok(pool)
}

/// Create the loadouts table if it doesn't exist yet.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), DbError> {
    sqlx::query(CREATE_LOADOUTS_TABLE).execute(pool).await?;
    sqlx::query(CREATE_LOADOUTS_OWNER_INDEX)
        .execute(pool)
        .await?;
    info!("Loadouts schema ready");
    Ok(())
}

/// SQLite implementation of LoadoutRepository.
#[derive(Debug, Clone)]
pub struct SqliteLoadoutRepository {
    pool: SqlitePool,
}

impl SqliteLoadoutRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

impl LoadoutRepository for SqliteLoadoutRepository {
    async fn create(&self, loadout: &NewLoadout) -> Result<LoadoutId, RepositoryError> {
        let result = sqlx::query(
            r#"
            INSERT INTO loadouts (user_id, agent, primary_weapon, sidearm)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(loadout.owner().as_str())
        .bind(loadout.agent())
        .bind(loadout.primary())
        .bind(loadout.sidearm())
        .execute(&self.pool)
        .await
        .map_err(DbError::from)?;

        Ok(LoadoutId::new(result.last_insert_rowid()))
    }

    async fn list_by_owner(&self, owner: &OwnerId) -> Result<Vec<Loadout>, RepositoryError> {
        let rows: Vec<LoadoutRow> = sqlx::query_as(
            r#"
            SELECT id, agent, primary_weapon, sidearm, created
            FROM loadouts
            WHERE user_id = ?
            ORDER BY created DESC, id DESC
            "#,
        )
        .bind(owner.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(DbError::from)?;

        rows.into_iter()
            .map(|row| row.into_loadout(owner).map_err(RepositoryError::from))
            .collect()
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM loadouts")
            .fetch_one(&self.pool)
            .await
            .map_err(DbError::from)?;

        usize::try_from(count)
            .map_err(|e| RepositoryError::from(DbError::Serialization(e.to_string())))
    }
}

/// Database row for loadouts.
#[derive(sqlx::FromRow)]
struct LoadoutRow {
    id: i64,
    agent: String,
    primary_weapon: Option<String>,
    sidearm: Option<String>,
    created: String,
}

impl LoadoutRow {
    fn into_loadout(self, owner: &OwnerId) -> Result<Loadout, DbError> {
        Ok(Loadout::restore(
            LoadoutId::new(self.id),
            owner.clone(),
            self.agent,
            self.primary_weapon,
            self.sidearm,
            parse_created(&self.created)?,
        ))
    }
}

fn parse_created(raw: &str) -> Result<SystemTime, DbError> {
    let parsed = DateTime::parse_from_rfc3339(raw)
        .map_err(|e| DbError::Serialization(format!("invalid created timestamp {raw:?}: {e}")))?;
    Ok(SystemTime::from(parsed.with_timezone(&Utc)))
}
