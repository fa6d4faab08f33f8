use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel,
    QueryOrder,
};

/// Validated replacement for the building settings row.
#[derive(Clone, Debug, PartialEq)]
pub struct BuildingSettingsChanges {
    pub building_name: String,
    pub address: String,
    pub city: Option<String>,
    pub governorate: Option<String>,
    pub postal_code: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub manager_name: Option<String>,
    pub total_floors: i32,
    pub units_per_floor: i32,
    pub additional_info: Option<String>,
}

pub struct BuildingSettingsRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BuildingSettingsRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Returns the settings row, the one with the lowest ID if several exist
    pub async fn get(&self) -> Result<Option<entity::building_settings::Model>, DbErr> {
        entity::prelude::BuildingSettings::find()
            .order_by_asc(entity::building_settings::Column::Id)
            .one(self.db)
            .await
    }

    /// Updates the settings row, inserting it if none exists
    pub async fn upsert(
        &self,
        changes: BuildingSettingsChanges,
    ) -> Result<entity::building_settings::Model, DbErr> {
        let now = Utc::now().naive_utc();

        match self.get().await? {
            Some(settings) => {
                let settings_am = apply_changes(settings.into_active_model(), changes, now);

                settings_am.update(self.db).await
            }
            None => {
                let settings_am = entity::building_settings::ActiveModel {
                    created_at: ActiveValue::Set(now),
                    ..Default::default()
                };

                apply_changes(settings_am, changes, now).insert(self.db).await
            }
        }
    }
}

fn apply_changes(
    mut settings_am: entity::building_settings::ActiveModel,
    changes: BuildingSettingsChanges,
    now: NaiveDateTime,
) -> entity::building_settings::ActiveModel {
    settings_am.building_name = ActiveValue::Set(changes.building_name);
    settings_am.address = ActiveValue::Set(changes.address);
    settings_am.city = ActiveValue::Set(changes.city);
    settings_am.governorate = ActiveValue::Set(changes.governorate);
    settings_am.postal_code = ActiveValue::Set(changes.postal_code);
    settings_am.phone_number = ActiveValue::Set(changes.phone_number);
    settings_am.email = ActiveValue::Set(changes.email);
    settings_am.manager_name = ActiveValue::Set(changes.manager_name);
    settings_am.total_floors = ActiveValue::Set(changes.total_floors);
    settings_am.units_per_floor = ActiveValue::Set(changes.units_per_floor);
    settings_am.additional_info = ActiveValue::Set(changes.additional_info);
    settings_am.updated_at = ActiveValue::Set(now);
    settings_am
}
