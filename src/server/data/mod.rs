//! Data access layer repositories.
//!
//! One repository per table. Repositories are generic over `ConnectionTrait` so the same
//! code runs against a pooled connection or inside a transaction. Input types here are
//! already validated, see `server::util::validate`.

pub mod apartment;
pub mod fee_category;
pub mod monthly_fee;
pub mod notification;
pub mod payment;
pub mod settings;
pub mod user;
