use chrono::NaiveDate;

use crate::{
    model::fee::{
        CreateFeeCategoryDto, CreateMonthlyFeeDto, FeeCategoryDto, MonthlyFeeDto,
        UpdateFeeCategoryDto, UpdateMonthlyFeeDto,
    },
    server::{
        data::{fee_category::FeeCategoryRepository, monthly_fee::MonthlyFeeRepository},
        error::{resource::ResourceError, Error},
        model::db::LazyDatabase,
        util::validate::Validate,
    },
};

/// Service for fee categories and the monthly amounts charged for them.
pub struct FeeService<'a> {
    db: &'a LazyDatabase,
}

impl<'a> FeeService<'a> {
    pub fn new(db: &'a LazyDatabase) -> Self {
        Self { db }
    }

    /// Lists active fee categories.
    pub async fn list_categories(&self) -> Result<Vec<FeeCategoryDto>, Error> {
        let Some(db) = self.db.connection().await else {
            return Ok(Vec::new());
        };

        let categories = FeeCategoryRepository::new(&db).get_active().await?;

        Ok(categories.into_iter().map(FeeCategoryDto::from).collect())
    }

    pub async fn create_category(
        &self,
        category: CreateFeeCategoryDto,
    ) -> Result<FeeCategoryDto, Error> {
        let category = category.validate()?;
        let db = self.db.require().await?;

        let created = FeeCategoryRepository::new(&db).create(category).await?;

        Ok(created.into())
    }

    pub async fn update_category(
        &self,
        id: i32,
        changes: UpdateFeeCategoryDto,
    ) -> Result<FeeCategoryDto, Error> {
        let changes = changes.validate()?;
        let db = self.db.require().await?;

        match FeeCategoryRepository::new(&db).update(id, changes).await? {
            Some(category) => Ok(category.into()),
            None => Err(ResourceError::FeeCategoryNotFound(id).into()),
        }
    }

    /// Lists the fees charged for `month`, which must be the first day of the month.
    pub async fn monthly_fees(&self, month: NaiveDate) -> Result<Vec<MonthlyFeeDto>, Error> {
        let Some(db) = self.db.connection().await else {
            return Ok(Vec::new());
        };

        let fees = MonthlyFeeRepository::new(&db).get_by_month(month).await?;

        Ok(fees.into_iter().map(MonthlyFeeDto::from).collect())
    }

    /// Sets the amount charged for a fee category in a month.
    ///
    /// # Returns
    /// - `Ok(MonthlyFeeDto)` - Fee created
    /// - `Err(Error::ValidationError)` - Malformed month or amount
    /// - `Err(Error::ResourceError(ResourceError::FeeCategoryNotFound))` - Unknown category
    pub async fn create_monthly_fee(
        &self,
        fee: CreateMonthlyFeeDto,
    ) -> Result<MonthlyFeeDto, Error> {
        let fee = fee.validate()?;
        let db = self.db.require().await?;

        if FeeCategoryRepository::new(&db)
            .get_by_id(fee.fee_category_id)
            .await?
            .is_none()
        {
            return Err(ResourceError::FeeCategoryNotFound(fee.fee_category_id).into());
        }

        let created = MonthlyFeeRepository::new(&db).create(fee).await?;

        Ok(created.into())
    }

    pub async fn update_monthly_fee(
        &self,
        id: i32,
        changes: UpdateMonthlyFeeDto,
    ) -> Result<MonthlyFeeDto, Error> {
        let amount = changes.validate()?;
        let db = self.db.require().await?;

        match MonthlyFeeRepository::new(&db).update_amount(id, amount).await? {
            Some(fee) => Ok(fee.into()),
            None => Err(ResourceError::MonthlyFeeNotFound(id).into()),
        }
    }
}
