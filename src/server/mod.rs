//! Server application core modules.
//!
//! This module contains the server side of Strata: HTTP routing, OAuth authentication,
//! validation, database access and the reporting built on top of it.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
