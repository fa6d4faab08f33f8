use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BuildingSettings::Table)
                    .if_not_exists()
                    .col(pk_auto(BuildingSettings::Id))
                    .col(string_len(BuildingSettings::BuildingName, 255))
                    .col(text(BuildingSettings::Address))
                    .col(string_len_null(BuildingSettings::City, 100))
                    .col(string_len_null(BuildingSettings::Governorate, 100))
                    .col(string_len_null(BuildingSettings::PostalCode, 20))
                    .col(string_len_null(BuildingSettings::PhoneNumber, 20))
                    .col(string_len_null(BuildingSettings::Email, 320))
                    .col(string_len_null(BuildingSettings::ManagerName, 255))
                    .col(integer(BuildingSettings::TotalFloors).default(15))
                    .col(integer(BuildingSettings::UnitsPerFloor).default(4))
                    .col(text_null(BuildingSettings::AdditionalInfo))
                    .col(timestamp(BuildingSettings::CreatedAt))
                    .col(timestamp(BuildingSettings::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BuildingSettings::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum BuildingSettings {
    Table,
    Id,
    BuildingName,
    Address,
    City,
    Governorate,
    PostalCode,
    PhoneNumber,
    Email,
    ManagerName,
    TotalFloors,
    UnitsPerFloor,
    AdditionalInfo,
    CreatedAt,
    UpdatedAt,
}
