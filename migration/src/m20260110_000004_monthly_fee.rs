use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260110_000003_fee_category::FeeCategory;

static IDX_MONTHLY_FEE_MONTH: &str = "idx_monthly_fee_month";
static FK_MONTHLY_FEE_FEE_CATEGORY_ID: &str = "fk_monthly_fee_fee_category_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MonthlyFee::Table)
                    .if_not_exists()
                    .col(pk_auto(MonthlyFee::Id))
                    .col(date(MonthlyFee::Month))
                    .col(integer(MonthlyFee::FeeCategoryId))
                    .col(decimal_len(MonthlyFee::Amount, 10, 2))
                    .col(timestamp(MonthlyFee::CreatedAt))
                    .col(timestamp(MonthlyFee::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MONTHLY_FEE_MONTH)
                    .table(MonthlyFee::Table)
                    .col(MonthlyFee::Month)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MONTHLY_FEE_FEE_CATEGORY_ID)
                    .from_tbl(MonthlyFee::Table)
                    .from_col(MonthlyFee::FeeCategoryId)
                    .to_tbl(FeeCategory::Table)
                    .to_col(FeeCategory::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_MONTHLY_FEE_FEE_CATEGORY_ID)
                    .table(MonthlyFee::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MONTHLY_FEE_MONTH)
                    .table(MonthlyFee::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(MonthlyFee::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum MonthlyFee {
    Table,
    Id,
    Month,
    FeeCategoryId,
    Amount,
    CreatedAt,
    UpdatedAt,
}
