//! Strata: management dashboard backend for a residential building's owners association.
//!
//! The crate is split into [`model`], the JSON request/response types shared with API
//! consumers, and [`server`], the axum application that serves them.

pub mod model;
pub mod server;
