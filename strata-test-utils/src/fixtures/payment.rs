use chrono::{NaiveDate, Utc};
use entity::sea_orm_active_enums::PaymentMethod;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{model::PaymentModel, TestContext, TestError};

impl TestContext {
    pub fn payment<'a>(&'a self) -> PaymentFixtures<'a> {
        PaymentFixtures { setup: self }
    }
}

pub struct PaymentFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> PaymentFixtures<'a> {
    /// Inserts a cash payment paid on the first day of `month`.
    ///
    /// No notification is created, use the payment service for that.
    pub async fn insert_mock_payment(
        &self,
        apartment_id: i32,
        month: NaiveDate,
        amount: Decimal,
    ) -> Result<PaymentModel, TestError> {
        let now = Utc::now().naive_utc();

        let payment = entity::payment::ActiveModel {
            apartment_id: ActiveValue::Set(apartment_id),
            month: ActiveValue::Set(month),
            amount: ActiveValue::Set(amount),
            payment_date: ActiveValue::Set(month),
            payment_method: ActiveValue::Set(PaymentMethod::Cash),
            transaction_id: ActiveValue::Set(None),
            notes: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(payment.insert(&self.setup.db).await?)
    }
}
