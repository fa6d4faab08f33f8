use chrono::{NaiveDate, Utc};
use entity::sea_orm_active_enums::PaymentMethod;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

/// Validated payment, `month` is the first day of the month the payment covers.
#[derive(Clone, Debug, PartialEq)]
pub struct NewPayment {
    pub apartment_id: i32,
    pub month: NaiveDate,
    pub amount: Decimal,
    pub payment_date: NaiveDate,
    pub payment_method: PaymentMethod,
    pub transaction_id: Option<String>,
    pub notes: Option<String>,
}

pub struct PaymentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PaymentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a payment
    ///
    /// # Notes
    /// - The apartment must exist due to the foreign key constraint
    /// - Pass a transaction as the connection to insert alongside a notification
    pub async fn create(&self, payment: NewPayment) -> Result<entity::payment::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let payment = entity::payment::ActiveModel {
            apartment_id: ActiveValue::Set(payment.apartment_id),
            month: ActiveValue::Set(payment.month),
            amount: ActiveValue::Set(payment.amount),
            payment_date: ActiveValue::Set(payment.payment_date),
            payment_method: ActiveValue::Set(payment.payment_method),
            transaction_id: ActiveValue::Set(payment.transaction_id),
            notes: ActiveValue::Set(payment.notes),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        payment.insert(self.db).await
    }

    /// Returns an apartment's payments, newest month first
    pub async fn get_by_apartment(
        &self,
        apartment_id: i32,
    ) -> Result<Vec<entity::payment::Model>, DbErr> {
        entity::prelude::Payment::find()
            .filter(entity::payment::Column::ApartmentId.eq(apartment_id))
            .order_by_desc(entity::payment::Column::Month)
            .order_by_desc(entity::payment::Column::PaymentDate)
            .all(self.db)
            .await
    }

    /// Returns payments covering `month`, most recently paid first
    pub async fn get_by_month(
        &self,
        month: NaiveDate,
    ) -> Result<Vec<entity::payment::Model>, DbErr> {
        entity::prelude::Payment::find()
            .filter(entity::payment::Column::Month.eq(month))
            .order_by_desc(entity::payment::Column::PaymentDate)
            .order_by_asc(entity::payment::Column::ApartmentId)
            .all(self.db)
            .await
    }

    pub async fn count_by_apartment(&self, apartment_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Payment::find()
            .filter(entity::payment::Column::ApartmentId.eq(apartment_id))
            .count(self.db)
            .await
    }
}
