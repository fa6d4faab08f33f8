//! Server application models and type definitions.
//!
//! This module contains data models for the server application: application state, the
//! lazily connected database handle, the OAuth client wrapper, and session data.

pub mod app;
pub mod auth;
pub mod db;
pub mod session;
