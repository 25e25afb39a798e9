//! `SQLite` implementation of [`StoreStatistics`].

use std::future::Future;

use sqlx::SqlitePool;

use gearhub_app::ports::StoreStatistics;
use gearhub_domain::error::GearHubError;
use gearhub_domain::stats::StoreStats;

use crate::error::StorageError;

const COUNT_USERS: &str = "SELECT COUNT(*) FROM users";
const COUNT_DEVICES: &str = "SELECT COUNT(*) FROM devices";
const COUNT_RESERVATIONS: &str = "SELECT COUNT(*) FROM reservations";

/// Counts rows of the `users`, `devices` and `reservations` tables.
pub struct SqliteStoreStatistics {
    pool: SqlitePool,
}

impl SqliteStoreStatistics {
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

async fn count(pool: &SqlitePool, query: &'static str) -> Result<u64, StorageError> {
    let n: i64 = sqlx::query_scalar(query).fetch_one(pool).await?;
    Ok(u64::try_from(n).unwrap_or_default())
}

impl StoreStatistics for SqliteStoreStatistics {
    fn stats(&self) -> impl Future<Output = Result<StoreStats, GearHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            Ok(StoreStats {
                users: count(&pool, COUNT_USERS).await?,
                devices: count(&pool, COUNT_DEVICES).await?,
                reservations: count(&pool, COUNT_RESERVATIONS).await?,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;

    #[tokio::test]
    async fn should_report_zero_counts_on_empty_store() {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        let stats = SqliteStoreStatistics::new(db.pool().clone());

        assert_eq!(stats.stats().await.unwrap(), StoreStats::default());
    }

    #[tokio::test]
    async fn should_count_rows_per_table() {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        for (email, name) in [("a@mci.edu", "A"), ("b@mci.edu", "B")] {
            sqlx::query("INSERT INTO users (email, name) VALUES (?, ?)")
                .bind(email)
                .bind(name)
                .execute(db.pool())
                .await
                .unwrap();
        }
        let stats = SqliteStoreStatistics::new(db.pool().clone());

        let counts = stats.stats().await.unwrap();
        assert_eq!(counts.users, 2);
        assert_eq!(counts.devices, 0);
        assert_eq!(counts.reservations, 0);
    }
}
