//! Shared test harness for the Strata workspace.
//!
//! Tests are set up in two phases. [`TestBuilder`] declares the tables, fixtures and mock
//! HTTP endpoints a test needs, then `build()` produces a [`TestContext`] holding an
//! in-memory SQLite database, an in-memory session and a mock OAuth provider.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{fixtures::factory, TestBuilder, TestContext, TestError};
}
