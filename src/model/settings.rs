use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct BuildingSettingsDto {
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
    pub updated_at: NaiveDateTime,
}

impl From<entity::building_settings::Model> for BuildingSettingsDto {
    fn from(settings: entity::building_settings::Model) -> Self {
        Self {
            building_name: settings.building_name,
            address: settings.address,
            city: settings.city,
            governorate: settings.governorate,
            postal_code: settings.postal_code,
            phone_number: settings.phone_number,
            email: settings.email,
            manager_name: settings.manager_name,
            total_floors: settings.total_floors,
            units_per_floor: settings.units_per_floor,
            additional_info: settings.additional_info,
            updated_at: settings.updated_at,
        }
    }
}

/// Request body replacing the building's descriptive settings
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateBuildingSettingsDto {
    pub building_name: String,
    pub address: String,
    pub city: Option<String>,
    pub governorate: Option<String>,
    pub postal_code: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub manager_name: Option<String>,
    pub total_floors: Option<i32>,
    pub units_per_floor: Option<i32>,
    pub additional_info: Option<String>,
}
