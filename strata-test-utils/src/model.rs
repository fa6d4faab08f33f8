//! Database model type aliases for test utilities.
//!
//! These match the aliases in the main strata crate so fixtures and tests read the same.

pub type UserModel = entity::user::Model;

pub type ApartmentModel = entity::apartment::Model;

pub type FeeCategoryModel = entity::fee_category::Model;

pub type MonthlyFeeModel = entity::monthly_fee::Model;

pub type PaymentModel = entity::payment::Model;

pub type NotificationModel = entity::notification::Model;
