use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

/// Validated monthly fee, `month` is the first day of the month.
#[derive(Clone, Debug, PartialEq)]
pub struct NewMonthlyFee {
    pub month: NaiveDate,
    pub fee_category_id: i32,
    pub amount: Decimal,
}

pub struct MonthlyFeeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MonthlyFeeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, fee: NewMonthlyFee) -> Result<entity::monthly_fee::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let fee = entity::monthly_fee::ActiveModel {
            month: ActiveValue::Set(fee.month),
            fee_category_id: ActiveValue::Set(fee.fee_category_id),
            amount: ActiveValue::Set(fee.amount),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        fee.insert(self.db).await
    }

    pub async fn get_by_month(
        &self,
        month: NaiveDate,
    ) -> Result<Vec<entity::monthly_fee::Model>, DbErr> {
        entity::prelude::MonthlyFee::find()
            .filter(entity::monthly_fee::Column::Month.eq(month))
            .order_by_asc(entity::monthly_fee::Column::FeeCategoryId)
            .all(self.db)
            .await
    }

    /// Sets a new amount, returns `Ok(None)` if the fee does not exist
    pub async fn update_amount(
        &self,
        id: i32,
        amount: Decimal,
    ) -> Result<Option<entity::monthly_fee::Model>, DbErr> {
        let fee = match entity::prelude::MonthlyFee::find_by_id(id)
            .one(self.db)
            .await?
        {
            Some(fee) => fee,
            None => return Ok(None),
        };

        let mut fee_am = fee.into_active_model();
        fee_am.amount = ActiveValue::Set(amount);
        fee_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let fee = fee_am.update(self.db).await?;

        Ok(Some(fee))
    }
}
