//! # gearhub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **JSON API** for programmatic access
//!   (`/api/users`, `/api/devices`, `/api/stats`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map service results into `{ "ok": …, "message": … }` outcomes with a
//!   matching status code
//!
//! ## Dependency rule
//! Depends on `gearhub-app` (for port traits and services) and `gearhub-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
