//! Repository Implementation

use crate::StorageError;
use serde::{Deserialize, Serialize};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use tracing::{debug, info};

/// A persisted risk record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct RiskRecord {
    pub id: i64,
    pub asset: String,
    pub threat: String,
    pub likelihood: i64,
    pub impact: i64,
    pub score: i64,
    pub level: String,
}

/// A risk record ready for insertion, before an id is assigned
#[derive(Debug, Clone)]
pub struct NewRisk {
    pub asset: String,
    pub threat: String,
    pub likelihood: i64,
    pub impact: i64,
    pub score: i64,
    pub level: String,
}

/// Repository for risk record access, backed by a SQLite pool
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    /// Open (creating if missing) the database file at `path`
    pub async fn connect(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref();
        info!("Opening SQLite database at {}", path.display());

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(options).await?;

        Ok(Self { pool })
    }

    /// In-memory repository for tests. Pinned to a single connection so
    /// the database outlives individual checkouts.
    pub async fn in_memory() -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::new().in_memory(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Create the risks table if it does not exist. Idempotent; must run
    /// once at startup before any insert or list.
    pub async fn initialize(&self) -> Result<(), StorageError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS risks (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                asset TEXT NOT NULL,
                threat TEXT NOT NULL,
                likelihood INTEGER NOT NULL,
                impact INTEGER NOT NULL,
                score INTEGER NOT NULL,
                level TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        info!("Risk table initialized");
        Ok(())
    }

    /// Append a new risk record, returning its assigned id
    pub async fn insert(&self, risk: &NewRisk) -> Result<i64, StorageError> {
        let result = sqlx::query(
            r#"
            INSERT INTO risks (asset, threat, likelihood, impact, score, level)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(&risk.asset)
        .bind(&risk.threat)
        .bind(risk.likelihood)
        .bind(risk.impact)
        .bind(risk.score)
        .bind(&risk.level)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!("Inserted risk record with ID {}", id);
        Ok(id)
    }

    /// Get risk records, newest first, optionally filtered by level.
    /// The filter is a case-sensitive exact match.
    pub async fn list(&self, level: Option<&str>) -> Result<Vec<RiskRecord>, StorageError> {
        let records = match level {
            Some(level) => {
                sqlx::query_as::<_, RiskRecord>(
                    "SELECT * FROM risks WHERE level = ?1 ORDER BY id DESC",
                )
                .bind(level)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, RiskRecord>("SELECT * FROM risks ORDER BY id DESC")
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        Ok(records)
    }

    /// Get total risk record count
    pub async fn count(&self) -> Result<i64, StorageError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM risks")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_repo() -> Repository {
        let repo = Repository::in_memory().await.unwrap();
        repo.initialize().await.unwrap();
        repo
    }

    fn new_risk(asset: &str, score: i64, level: &str) -> NewRisk {
        NewRisk {
            asset: asset.to_string(),
            threat: "Phishing".to_string(),
            likelihood: 3,
            impact: 3,
            score,
            level: level.to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let repo = test_repo().await;

        let first = repo.insert(&new_risk("Mail Server", 9, "Medium")).await.unwrap();
        let second = repo.insert(&new_risk("Database", 9, "Medium")).await.unwrap();

        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_list_returns_newest_first() {
        let repo = test_repo().await;

        for asset in ["A", "B", "C"] {
            repo.insert(&new_risk(asset, 9, "Medium")).await.unwrap();
        }

        let records = repo.list(None).await.unwrap();
        let ids: Vec<i64> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
        assert_eq!(records[0].asset, "C");
    }

    #[tokio::test]
    async fn test_list_filters_by_exact_level() {
        let repo = test_repo().await;

        repo.insert(&new_risk("Workstation", 2, "Low")).await.unwrap();
        repo.insert(&new_risk("Database", 9, "Medium")).await.unwrap();

        let records = repo.list(Some("Medium")).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].asset, "Database");
        assert_eq!(records[0].level, "Medium");
    }

    #[tokio::test]
    async fn test_level_filter_is_case_sensitive() {
        let repo = test_repo().await;

        repo.insert(&new_risk("Database", 9, "Medium")).await.unwrap();

        let records = repo.list(Some("medium")).await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_list_on_empty_store() {
        let repo = test_repo().await;

        let records = repo.list(None).await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_initialize_is_idempotent() {
        let repo = test_repo().await;

        repo.insert(&new_risk("Router", 4, "Low")).await.unwrap();
        repo.initialize().await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_record_fields_round_trip() {
        let repo = test_repo().await;

        let risk = NewRisk {
            asset: "Web Server".to_string(),
            threat: "SQL Injection".to_string(),
            likelihood: 4,
            impact: 5,
            score: 20,
            level: "Critical".to_string(),
        };
        let id = repo.insert(&risk).await.unwrap();

        let records = repo.list(None).await.unwrap();
        assert_eq!(
            records,
            vec![RiskRecord {
                id,
                asset: "Web Server".to_string(),
                threat: "SQL Injection".to_string(),
                likelihood: 4,
                impact: 5,
                score: 20,
                level: "Critical".to_string(),
            }]
        );
    }
}
