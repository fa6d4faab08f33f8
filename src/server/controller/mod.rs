//! HTTP controller endpoints for the Strata web API.
//!
//! Axum handlers for authentication and the building dashboard. Handlers check the
//! session, delegate to a service and map the result to a JSON response. Every handler is
//! annotated for utoipa so it appears in the OpenAPI document.

pub mod apartment;
pub mod auth;
pub mod fee;
pub mod notification;
pub mod payment;
pub mod report;
pub mod settings;
pub mod util;
