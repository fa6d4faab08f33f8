use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::ApartmentStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "apartment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub floor_number: i32,
    pub unit_number: i32,
    pub owner_name: String,
    pub owner_email: Option<String>,
    pub owner_phone: Option<String>,
    pub status: ApartmentStatus,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::payment::Entity")]
    Payment,
    #[sea_orm(has_many = "super::notification::Entity")]
    Notification,
}

impl Related<super::payment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payment.def()
    }
}

impl Related<super::notification::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Notification.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
