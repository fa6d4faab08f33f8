use chrono::Utc;
use entity::sea_orm_active_enums::ApartmentStatus;
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{model::ApartmentModel, TestContext, TestError};

impl TestContext {
    pub fn apartment<'a>(&'a self) -> ApartmentFixtures<'a> {
        ApartmentFixtures { setup: self }
    }
}

pub struct ApartmentFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> ApartmentFixtures<'a> {
    /// Inserts an active apartment owned by `Owner {floor}-{unit}`.
    pub async fn insert_mock_apartment(
        &self,
        floor_number: i32,
        unit_number: i32,
    ) -> Result<ApartmentModel, TestError> {
        self.insert_mock_apartment_with_status(floor_number, unit_number, ApartmentStatus::Active)
            .await
    }

    pub async fn insert_mock_apartment_with_status(
        &self,
        floor_number: i32,
        unit_number: i32,
        status: ApartmentStatus,
    ) -> Result<ApartmentModel, TestError> {
        let now = Utc::now().naive_utc();

        let apartment = entity::apartment::ActiveModel {
            floor_number: ActiveValue::Set(floor_number),
            unit_number: ActiveValue::Set(unit_number),
            owner_name: ActiveValue::Set(format!("Owner {}-{}", floor_number, unit_number)),
            owner_email: ActiveValue::Set(Some(format!(
                "owner{}{}@example.com",
                floor_number, unit_number
            ))),
            owner_phone: ActiveValue::Set(Some(format!("05000000{:02}", floor_number * 10 + unit_number))),
            status: ActiveValue::Set(status),
            notes: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(apartment.insert(&self.setup.db).await?)
    }

    /// Inserts one apartment for every unit on every floor, ordered by floor then unit.
    pub async fn insert_building(
        &self,
        floors: i32,
        units_per_floor: i32,
    ) -> Result<Vec<ApartmentModel>, TestError> {
        let mut apartments = Vec::new();

        for floor_number in 1..=floors {
            for unit_number in 1..=units_per_floor {
                apartments.push(self.insert_mock_apartment(floor_number, unit_number).await?);
            }
        }

        Ok(apartments)
    }
}
