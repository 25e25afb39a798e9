//! # gearhub-domain
//!
//! Pure domain model for the gearhub device-management service.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps and calendar dates
//! - Define **Users** (people responsible for devices, keyed by email)
//! - Define **Devices** (equipment with a maintenance schedule)
//! - Define the **Outcome** contract (`ok` flag plus message) returned to callers
//! - Contain all input validation, normalization and the next-maintenance
//!   computation
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod device;
pub mod outcome;
pub mod stats;
pub mod user;
