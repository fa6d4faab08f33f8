use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "monthly_fee")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub month: Date,
    pub fee_category_id: i32,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub amount: Decimal,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::fee_category::Entity",
        from = "Column::FeeCategoryId",
        to = "super::fee_category::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    FeeCategory,
}

impl Related<super::fee_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FeeCategory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
