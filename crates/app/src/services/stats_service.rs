//! Stats service — per-table record counts.

use gearhub_domain::error::GearHubError;
use gearhub_domain::stats::StoreStats;

use crate::ports::StoreStatistics;

/// Application service reporting how many records each table holds.
pub struct StatsService<S> {
    source: S,
}

impl<S: StoreStatistics> StatsService<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Count the records of every table.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn stats(&self) -> Result<StoreStats, GearHubError> {
        self.source.stats().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedStats(StoreStats);

    impl StoreStatistics for FixedStats {
        async fn stats(&self) -> Result<StoreStats, GearHubError> {
            Ok(self.0)
        }
    }

    #[tokio::test]
    async fn should_return_counts_from_store() {
        let expected = StoreStats {
            users: 4,
            devices: 3,
            reservations: 0,
        };
        let svc = StatsService::new(FixedStats(expected));
        assert_eq!(svc.stats().await.unwrap(), expected);
    }
}
