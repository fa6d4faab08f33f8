use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "building_settings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub building_name: String,
    #[sea_orm(column_type = "Text")]
    pub address: String,
    pub city: Option<String>,
    pub governorate: Option<String>,
    pub postal_code: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub manager_name: Option<String>,
    pub total_floors: i32,
    pub units_per_floor: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub additional_info: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
