//! # gearhub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that storage adapters must implement:
//!   - `UserRepository` — insert, scan, lookup, rename and delete users
//!   - `DeviceRepository` — insert, scan and lookup devices
//!   - `StoreStatistics` — record counts per table
//! - Define the use-cases as service structs:
//!   - `UserService` — register, list, rename, delete
//!   - `DeviceService` — register, list
//!   - `StatsService` — per-table counts
//! - Enforce check ordering and uniqueness on top of domain validation
//!
//! ## Dependency rule
//! Depends on `gearhub-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
