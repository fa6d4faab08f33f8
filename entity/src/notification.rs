use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::NotificationType;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "notification")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub kind: NotificationType,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub apartment_id: Option<i32>,
    pub is_read: bool,
    pub created_at: DateTime,
    pub read_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::apartment::Entity",
        from = "Column::ApartmentId",
        to = "super::apartment::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Apartment,
}

impl Related<super::apartment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Apartment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
