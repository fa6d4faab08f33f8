use entity::sea_orm_active_enums::UserRole;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The currently authenticated dashboard user
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub open_id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: UserRole,
}

impl From<entity::user::Model> for UserDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            open_id: user.open_id,
            name: user.name,
            email: user.email,
            role: user.role,
        }
    }
}
