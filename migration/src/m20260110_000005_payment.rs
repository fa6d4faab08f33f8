use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260110_000002_apartment::Apartment;

static IDX_PAYMENT_MONTH: &str = "idx_payment_month";
static IDX_PAYMENT_APARTMENT_ID: &str = "idx_payment_apartment_id";
static FK_PAYMENT_APARTMENT_ID: &str = "fk_payment_apartment_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Payment::Table)
                    .if_not_exists()
                    .col(pk_auto(Payment::Id))
                    .col(integer(Payment::ApartmentId))
                    .col(date(Payment::Month))
                    .col(decimal_len(Payment::Amount, 10, 2))
                    .col(date(Payment::PaymentDate))
                    .col(string_len(Payment::PaymentMethod, 16))
                    .col(string_len_null(Payment::TransactionId, 255))
                    .col(text_null(Payment::Notes))
                    .col(timestamp(Payment::CreatedAt))
                    .col(timestamp(Payment::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PAYMENT_MONTH)
                    .table(Payment::Table)
                    .col(Payment::Month)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PAYMENT_APARTMENT_ID)
                    .table(Payment::Table)
                    .col(Payment::ApartmentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PAYMENT_APARTMENT_ID)
                    .from_tbl(Payment::Table)
                    .from_col(Payment::ApartmentId)
                    .to_tbl(Apartment::Table)
                    .to_col(Apartment::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PAYMENT_APARTMENT_ID)
                    .table(Payment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PAYMENT_APARTMENT_ID)
                    .table(Payment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PAYMENT_MONTH)
                    .table(Payment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Payment::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Payment {
    Table,
    Id,
    ApartmentId,
    Month,
    Amount,
    PaymentDate,
    PaymentMethod,
    TransactionId,
    Notes,
    CreatedAt,
    UpdatedAt,
}
