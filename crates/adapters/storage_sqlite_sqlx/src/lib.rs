//! # gearhub-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `gearhub-app::ports::storage`
//! - Manage the `SQLite` connection pool lifecycle (one pool per process)
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `gearhub-app` (for port traits) and `gearhub-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod codec;
mod device_repo;
mod error;
mod pool;
mod stats;
mod user_repo;

pub use device_repo::SqliteDeviceRepository;
pub use error::StorageError;
pub use pool::{Config, Database};
pub use stats::SqliteStoreStatistics;
pub use user_repo::SqliteUserRepository;
