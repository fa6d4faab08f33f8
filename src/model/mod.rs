//! API request and response models.
//!
//! These are the JSON shapes exchanged with dashboard clients. Database entities are
//! converted into these DTOs before leaving the server so the persisted schema can
//! change without breaking API consumers.

pub mod api;
pub mod apartment;
pub mod fee;
pub mod notification;
pub mod payment;
pub mod report;
pub mod settings;
pub mod user;
