use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

#[derive(Clone, Debug, PartialEq)]
pub struct NewFeeCategory {
    pub name: String,
    pub description: Option<String>,
}

/// Validated partial update, `Some(None)` clears the description.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeeCategoryChanges {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub is_active: Option<bool>,
}

pub struct FeeCategoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FeeCategoryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an active fee category
    pub async fn create(
        &self,
        category: NewFeeCategory,
    ) -> Result<entity::fee_category::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let category = entity::fee_category::ActiveModel {
            name: ActiveValue::Set(category.name),
            description: ActiveValue::Set(category.description),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        category.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::fee_category::Model>, DbErr> {
        entity::prelude::FeeCategory::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Returns active categories ordered by name
    pub async fn get_active(&self) -> Result<Vec<entity::fee_category::Model>, DbErr> {
        entity::prelude::FeeCategory::find()
            .filter(entity::fee_category::Column::IsActive.eq(true))
            .order_by_asc(entity::fee_category::Column::Name)
            .all(self.db)
            .await
    }

    /// Returns `Ok(None)` if the category does not exist
    pub async fn update(
        &self,
        id: i32,
        changes: FeeCategoryChanges,
    ) -> Result<Option<entity::fee_category::Model>, DbErr> {
        let category = match entity::prelude::FeeCategory::find_by_id(id)
            .one(self.db)
            .await?
        {
            Some(category) => category,
            None => return Ok(None),
        };

        let mut category_am = category.into_active_model();

        if let Some(name) = changes.name {
            category_am.name = ActiveValue::Set(name);
        }
        if let Some(description) = changes.description {
            category_am.description = ActiveValue::Set(description);
        }
        if let Some(is_active) = changes.is_active {
            category_am.is_active = ActiveValue::Set(is_active);
        }
        category_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let category = category_am.update(self.db).await?;

        Ok(Some(category))
    }
}
