pub use sea_orm_migration::prelude::*;

mod m20260110_000001_user;
mod m20260110_000002_apartment;
mod m20260110_000003_fee_category;
mod m20260110_000004_monthly_fee;
mod m20260110_000005_payment;
mod m20260110_000006_notification;
mod m20260110_000007_building_settings;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260110_000001_user::Migration),
            Box::new(m20260110_000002_apartment::Migration),
            Box::new(m20260110_000003_fee_category::Migration),
            Box::new(m20260110_000004_monthly_fee::Migration),
            Box::new(m20260110_000005_payment::Migration),
            Box::new(m20260110_000006_notification::Migration),
            Box::new(m20260110_000007_building_settings::Migration),
        ]
    }
}
