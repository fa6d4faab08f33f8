//! Session data models.
//!
//! Typed wrappers around tower-sessions keys. Each submodule owns one piece of session
//! state and the methods to insert, read and remove it.

pub mod auth;
pub mod user;
