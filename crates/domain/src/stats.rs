//! Record counts per store table.

use serde::{Deserialize, Serialize};

/// Number of records held in each table of the record store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStats {
    pub users: u64,
    pub devices: u64,
    pub reservations: u64,
}
