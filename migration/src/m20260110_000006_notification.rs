use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260110_000002_apartment::Apartment;

static IDX_NOTIFICATION_IS_READ: &str = "idx_notification_is_read";
static FK_NOTIFICATION_APARTMENT_ID: &str = "fk_notification_apartment_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Notification::Table)
                    .if_not_exists()
                    .col(pk_auto(Notification::Id))
                    .col(string_len(Notification::Kind, 24))
                    .col(string_len(Notification::Title, 255))
                    .col(text(Notification::Content))
                    .col(integer_null(Notification::ApartmentId))
                    .col(boolean(Notification::IsRead).default(false))
                    .col(timestamp(Notification::CreatedAt))
                    .col(timestamp_null(Notification::ReadAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_NOTIFICATION_IS_READ)
                    .table(Notification::Table)
                    .col(Notification::IsRead)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_NOTIFICATION_APARTMENT_ID)
                    .from_tbl(Notification::Table)
                    .from_col(Notification::ApartmentId)
                    .to_tbl(Apartment::Table)
                    .to_col(Apartment::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_NOTIFICATION_APARTMENT_ID)
                    .table(Notification::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_NOTIFICATION_IS_READ)
                    .table(Notification::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Notification::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Notification {
    Table,
    Id,
    Kind,
    Title,
    Content,
    ApartmentId,
    IsRead,
    CreatedAt,
    ReadAt,
}
