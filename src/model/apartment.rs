use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::ApartmentStatus;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ApartmentDto {
    pub id: i32,
    pub floor_number: i32,
    pub unit_number: i32,
    pub owner_name: String,
    pub owner_email: Option<String>,
    pub owner_phone: Option<String>,
    pub status: ApartmentStatus,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::apartment::Model> for ApartmentDto {
    fn from(apartment: entity::apartment::Model) -> Self {
        Self {
            id: apartment.id,
            floor_number: apartment.floor_number,
            unit_number: apartment.unit_number,
            owner_name: apartment.owner_name,
            owner_email: apartment.owner_email,
            owner_phone: apartment.owner_phone,
            status: apartment.status,
            notes: apartment.notes,
            created_at: apartment.created_at,
            updated_at: apartment.updated_at,
        }
    }
}

/// Request body for registering an apartment
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateApartmentDto {
    /// Floor number, 1 through 15
    pub floor_number: i32,
    /// Unit number on the floor, 1 through 4
    pub unit_number: i32,
    pub owner_name: String,
    pub owner_email: Option<String>,
    pub owner_phone: Option<String>,
    #[serde(default)]
    pub status: ApartmentStatus,
    pub notes: Option<String>,
}

/// Request body for a partial apartment update, omitted fields are left unchanged
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateApartmentDto {
    pub floor_number: Option<i32>,
    pub unit_number: Option<i32>,
    pub owner_name: Option<String>,
    pub owner_email: Option<String>,
    pub owner_phone: Option<String>,
    pub status: Option<ApartmentStatus>,
    pub notes: Option<String>,
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Text matched against owner name, email and phone
    pub term: String,
}
