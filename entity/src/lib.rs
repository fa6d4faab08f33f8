//! SeaORM entity definitions for the Strata database schema.

pub mod prelude;

pub mod apartment;
pub mod building_settings;
pub mod fee_category;
pub mod monthly_fee;
pub mod notification;
pub mod payment;
pub mod sea_orm_active_enums;
pub mod user;
