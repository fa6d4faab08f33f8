use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{
    model::{FeeCategoryModel, MonthlyFeeModel},
    TestContext, TestError,
};

impl TestContext {
    pub fn fee<'a>(&'a self) -> FeeFixtures<'a> {
        FeeFixtures { setup: self }
    }
}

pub struct FeeFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> FeeFixtures<'a> {
    /// Inserts an active fee category.
    pub async fn insert_mock_fee_category(&self, name: &str) -> Result<FeeCategoryModel, TestError> {
        self.insert_fee_category(name, true).await
    }

    pub async fn insert_inactive_fee_category(
        &self,
        name: &str,
    ) -> Result<FeeCategoryModel, TestError> {
        self.insert_fee_category(name, false).await
    }

    async fn insert_fee_category(
        &self,
        name: &str,
        is_active: bool,
    ) -> Result<FeeCategoryModel, TestError> {
        let now = Utc::now().naive_utc();

        let category = entity::fee_category::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            description: ActiveValue::Set(None),
            is_active: ActiveValue::Set(is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(category.insert(&self.setup.db).await?)
    }

    /// Inserts a monthly fee, `month` must already be the first day of the month.
    pub async fn insert_mock_monthly_fee(
        &self,
        fee_category_id: i32,
        month: NaiveDate,
        amount: Decimal,
    ) -> Result<MonthlyFeeModel, TestError> {
        let now = Utc::now().naive_utc();

        let fee = entity::monthly_fee::ActiveModel {
            month: ActiveValue::Set(month),
            fee_category_id: ActiveValue::Set(fee_category_id),
            amount: ActiveValue::Set(amount),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(fee.insert(&self.setup.db).await?)
    }
}
