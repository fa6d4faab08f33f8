use crate::{
    model::apartment::{ApartmentDto, CreateApartmentDto, UpdateApartmentDto},
    server::{
        data::{apartment::ApartmentRepository, payment::PaymentRepository},
        error::{resource::ResourceError, validation::ValidationError, Error},
        model::db::LazyDatabase,
        util::validate::{validate_floor, Validate},
    },
};

/// Service for the apartment registry.
pub struct ApartmentService<'a> {
    db: &'a LazyDatabase,
}

impl<'a> ApartmentService<'a> {
    pub fn new(db: &'a LazyDatabase) -> Self {
        Self { db }
    }

    /// Lists every apartment ordered by floor then unit.
    pub async fn list(&self) -> Result<Vec<ApartmentDto>, Error> {
        let Some(db) = self.db.connection().await else {
            return Ok(Vec::new());
        };

        let apartments = ApartmentRepository::new(&db).get_all().await?;

        Ok(apartments.into_iter().map(ApartmentDto::from).collect())
    }

    /// # Returns
    /// - `Ok(ApartmentDto)` - Apartment found
    /// - `Err(Error::ResourceError(ResourceError::ApartmentNotFound))` - No apartment with
    ///   that ID, or the database is unavailable
    pub async fn get(&self, id: i32) -> Result<ApartmentDto, Error> {
        let Some(db) = self.db.connection().await else {
            return Err(ResourceError::ApartmentNotFound(id).into());
        };

        match ApartmentRepository::new(&db).get_by_id(id).await? {
            Some(apartment) => Ok(apartment.into()),
            None => Err(ResourceError::ApartmentNotFound(id).into()),
        }
    }

    pub async fn list_by_floor(&self, floor_number: i32) -> Result<Vec<ApartmentDto>, Error> {
        let floor_number = validate_floor(floor_number)?;

        let Some(db) = self.db.connection().await else {
            return Ok(Vec::new());
        };

        let apartments = ApartmentRepository::new(&db)
            .get_by_floor(floor_number)
            .await?;

        Ok(apartments.into_iter().map(ApartmentDto::from).collect())
    }

    /// Finds apartments whose owner name, email or phone contains `term`.
    ///
    /// # Returns
    /// - `Ok(Vec<ApartmentDto>)` - Matching apartments, possibly empty
    /// - `Err(Error::ValidationError)` - Blank search term
    pub async fn search(&self, term: &str) -> Result<Vec<ApartmentDto>, Error> {
        let term = term.trim();
        if term.is_empty() {
            return Err(ValidationError::MissingField("Search term").into());
        }

        let Some(db) = self.db.connection().await else {
            return Ok(Vec::new());
        };

        let apartments = ApartmentRepository::new(&db).search(term).await?;

        Ok(apartments.into_iter().map(ApartmentDto::from).collect())
    }

    pub async fn create(&self, apartment: CreateApartmentDto) -> Result<ApartmentDto, Error> {
        let apartment = apartment.validate()?;
        let db = self.db.require().await?;

        let created = ApartmentRepository::new(&db).create(apartment).await?;

        tracing::info!(
            apartment_id = %created.id,
            floor = %created.floor_number,
            unit = %created.unit_number,
            "Registered apartment"
        );

        Ok(created.into())
    }

    pub async fn update(&self, id: i32, changes: UpdateApartmentDto) -> Result<ApartmentDto, Error> {
        let changes = changes.validate()?;
        let db = self.db.require().await?;

        match ApartmentRepository::new(&db).update(id, changes).await? {
            Some(apartment) => Ok(apartment.into()),
            None => Err(ResourceError::ApartmentNotFound(id).into()),
        }
    }

    /// Deletes an apartment with no recorded payments.
    ///
    /// # Returns
    /// - `Ok(())` - Apartment deleted
    /// - `Err(Error::ResourceError(ResourceError::ApartmentHasPayments))` - Payments reference it
    /// - `Err(Error::ResourceError(ResourceError::ApartmentNotFound))` - No apartment with that ID
    /// - `Err(Error::DatabaseUnavailable)` - Database could not be reached
    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let db = self.db.require().await?;

        if PaymentRepository::new(&db).count_by_apartment(id).await? > 0 {
            return Err(ResourceError::ApartmentHasPayments(id).into());
        }

        let result = ApartmentRepository::new(&db).delete(id).await?;
        if result.rows_affected == 0 {
            return Err(ResourceError::ApartmentNotFound(id).into());
        }

        tracing::info!(apartment_id = %id, "Deleted apartment");

        Ok(())
    }
}
