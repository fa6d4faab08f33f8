//! Utility functions shared by controllers and services.
//!
//! - `time` - calendar month parsing and normalization
//! - `validate` - conversion of request bodies into validated repository parameters

pub mod time;
pub mod validate;
