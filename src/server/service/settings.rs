use crate::{
    model::settings::{BuildingSettingsDto, UpdateBuildingSettingsDto},
    server::{
        data::settings::BuildingSettingsRepository, error::Error, model::db::LazyDatabase,
        util::validate::Validate,
    },
};

pub struct SettingsService<'a> {
    db: &'a LazyDatabase,
}

impl<'a> SettingsService<'a> {
    pub fn new(db: &'a LazyDatabase) -> Self {
        Self { db }
    }

    /// Returns the building settings, `None` if they were never saved.
    pub async fn get(&self) -> Result<Option<BuildingSettingsDto>, Error> {
        let Some(db) = self.db.connection().await else {
            return Ok(None);
        };

        let settings = BuildingSettingsRepository::new(&db).get().await?;

        Ok(settings.map(BuildingSettingsDto::from))
    }

    /// Replaces the building settings, creating them on first save.
    pub async fn update(
        &self,
        settings: UpdateBuildingSettingsDto,
    ) -> Result<BuildingSettingsDto, Error> {
        let settings = settings.validate()?;
        let db = self.db.require().await?;

        let saved = BuildingSettingsRepository::new(&db).upsert(settings).await?;

        tracing::info!(building_name = %saved.building_name, "Updated building settings");

        Ok(saved.into())
    }
}
