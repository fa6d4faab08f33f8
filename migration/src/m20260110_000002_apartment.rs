use sea_orm_migration::{prelude::*, schema::*};

static IDX_APARTMENT_FLOOR_UNIT: &str = "idx_apartment_floor_number_unit_number";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Apartment::Table)
                    .if_not_exists()
                    .col(pk_auto(Apartment::Id))
                    .col(integer(Apartment::FloorNumber))
                    .col(integer(Apartment::UnitNumber))
                    .col(string_len(Apartment::OwnerName, 255))
                    .col(string_len_null(Apartment::OwnerEmail, 320))
                    .col(string_len_null(Apartment::OwnerPhone, 20))
                    .col(string_len(Apartment::Status, 16).default("active"))
                    .col(text_null(Apartment::Notes))
                    .col(timestamp(Apartment::CreatedAt))
                    .col(timestamp(Apartment::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_APARTMENT_FLOOR_UNIT)
                    .table(Apartment::Table)
                    .col(Apartment::FloorNumber)
                    .col(Apartment::UnitNumber)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_APARTMENT_FLOOR_UNIT)
                    .table(Apartment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Apartment::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Apartment {
    Table,
    Id,
    FloorNumber,
    UnitNumber,
    OwnerName,
    OwnerEmail,
    OwnerPhone,
    Status,
    Notes,
    CreatedAt,
    UpdatedAt,
}
