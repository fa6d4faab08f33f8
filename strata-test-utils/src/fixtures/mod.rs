//! Fixtures for database records and mock HTTP endpoints.
//!
//! - `apartment` - apartments, singly or a whole building
//! - `auth` - OAuth token and userinfo endpoints on the mock server
//! - `factory` - in-memory models for tests that never touch the database
//! - `fee` - fee categories and monthly fees
//! - `notification` - notifications
//! - `payment` - payments
//! - `user` - dashboard users

pub mod apartment;
pub mod auth;
pub mod factory;
pub mod fee;
pub mod notification;
pub mod payment;
pub mod user;
