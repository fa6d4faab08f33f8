use chrono::Utc;
use entity::sea_orm_active_enums::ApartmentStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

/// Validated apartment ready for insertion.
#[derive(Clone, Debug, PartialEq)]
pub struct NewApartment {
    pub floor_number: i32,
    pub unit_number: i32,
    pub owner_name: String,
    pub owner_email: Option<String>,
    pub owner_phone: Option<String>,
    pub status: ApartmentStatus,
    pub notes: Option<String>,
}

/// Validated partial update.
///
/// `None` leaves a column unchanged. For nullable columns `Some(None)` clears the value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApartmentChanges {
    pub floor_number: Option<i32>,
    pub unit_number: Option<i32>,
    pub owner_name: Option<String>,
    pub owner_email: Option<Option<String>>,
    pub owner_phone: Option<Option<String>>,
    pub status: Option<ApartmentStatus>,
    pub notes: Option<Option<String>>,
}

pub struct ApartmentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ApartmentRepository<'a, C> {
    /// Creates a new instance of [`ApartmentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        apartment: NewApartment,
    ) -> Result<entity::apartment::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let apartment = entity::apartment::ActiveModel {
            floor_number: ActiveValue::Set(apartment.floor_number),
            unit_number: ActiveValue::Set(apartment.unit_number),
            owner_name: ActiveValue::Set(apartment.owner_name),
            owner_email: ActiveValue::Set(apartment.owner_email),
            owner_phone: ActiveValue::Set(apartment.owner_phone),
            status: ActiveValue::Set(apartment.status),
            notes: ActiveValue::Set(apartment.notes),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        apartment.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::apartment::Model>, DbErr> {
        entity::prelude::Apartment::find_by_id(id).one(self.db).await
    }

    /// Returns every apartment ordered by floor then unit
    pub async fn get_all(&self) -> Result<Vec<entity::apartment::Model>, DbErr> {
        entity::prelude::Apartment::find()
            .order_by_asc(entity::apartment::Column::FloorNumber)
            .order_by_asc(entity::apartment::Column::UnitNumber)
            .all(self.db)
            .await
    }

    pub async fn get_by_floor(
        &self,
        floor_number: i32,
    ) -> Result<Vec<entity::apartment::Model>, DbErr> {
        entity::prelude::Apartment::find()
            .filter(entity::apartment::Column::FloorNumber.eq(floor_number))
            .order_by_asc(entity::apartment::Column::UnitNumber)
            .all(self.db)
            .await
    }

    /// Finds apartments whose owner name, email or phone contains `term`
    pub async fn search(&self, term: &str) -> Result<Vec<entity::apartment::Model>, DbErr> {
        entity::prelude::Apartment::find()
            .filter(
                Condition::any()
                    .add(entity::apartment::Column::OwnerName.contains(term))
                    .add(entity::apartment::Column::OwnerEmail.contains(term))
                    .add(entity::apartment::Column::OwnerPhone.contains(term)),
            )
            .order_by_asc(entity::apartment::Column::FloorNumber)
            .order_by_asc(entity::apartment::Column::UnitNumber)
            .all(self.db)
            .await
    }

    /// Applies `changes` to an apartment
    ///
    /// Returns `Ok(None)` if the apartment does not exist.
    pub async fn update(
        &self,
        id: i32,
        changes: ApartmentChanges,
    ) -> Result<Option<entity::apartment::Model>, DbErr> {
        let apartment = match entity::prelude::Apartment::find_by_id(id)
            .one(self.db)
            .await?
        {
            Some(apartment) => apartment,
            None => return Ok(None),
        };

        let mut apartment_am = apartment.into_active_model();

        if let Some(floor_number) = changes.floor_number {
            apartment_am.floor_number = ActiveValue::Set(floor_number);
        }
        if let Some(unit_number) = changes.unit_number {
            apartment_am.unit_number = ActiveValue::Set(unit_number);
        }
        if let Some(owner_name) = changes.owner_name {
            apartment_am.owner_name = ActiveValue::Set(owner_name);
        }
        if let Some(owner_email) = changes.owner_email {
            apartment_am.owner_email = ActiveValue::Set(owner_email);
        }
        if let Some(owner_phone) = changes.owner_phone {
            apartment_am.owner_phone = ActiveValue::Set(owner_phone);
        }
        if let Some(status) = changes.status {
            apartment_am.status = ActiveValue::Set(status);
        }
        if let Some(notes) = changes.notes {
            apartment_am.notes = ActiveValue::Set(notes);
        }
        apartment_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let apartment = apartment_am.update(self.db).await?;

        Ok(Some(apartment))
    }

    /// Deletes an apartment
    ///
    /// Returns OK regardless of the apartment existing, check
    /// [`DeleteResult::rows_affected`] to confirm the deletion.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Apartment::delete_by_id(id)
            .exec(self.db)
            .await
    }
}
