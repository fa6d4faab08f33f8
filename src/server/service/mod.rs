//! Service layer for business logic.
//!
//! Services validate input, coordinate repositories and convert database models into API
//! DTOs. Dashboard services take the lazily connected database: reads return empty results
//! while the database is unavailable, writes fail with `Error::DatabaseUnavailable`.

pub mod apartment;
pub mod auth;
pub mod fee;
pub mod notification;
pub mod payment;
pub mod report;
pub mod settings;
pub mod user;
