pub use super::apartment::Entity as Apartment;
pub use super::building_settings::Entity as BuildingSettings;
pub use super::fee_category::Entity as FeeCategory;
pub use super::monthly_fee::Entity as MonthlyFee;
pub use super::notification::Entity as Notification;
pub use super::payment::Entity as Payment;
pub use super::user::Entity as User;
