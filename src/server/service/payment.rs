use chrono::NaiveDate;
use entity::sea_orm_active_enums::NotificationType;
use sea_orm::TransactionTrait;

use crate::{
    model::payment::{CreatePaymentDto, PaymentDto},
    server::{
        data::{
            apartment::ApartmentRepository,
            notification::{NewNotification, NotificationRepository},
            payment::PaymentRepository,
        },
        error::{resource::ResourceError, Error},
        model::db::LazyDatabase,
        util::{time::format_month, validate::Validate},
    },
};

pub struct PaymentService<'a> {
    db: &'a LazyDatabase,
}

impl<'a> PaymentService<'a> {
    pub fn new(db: &'a LazyDatabase) -> Self {
        Self { db }
    }

    /// Lists an apartment's payments, newest month first.
    pub async fn by_apartment(&self, apartment_id: i32) -> Result<Vec<PaymentDto>, Error> {
        let Some(db) = self.db.connection().await else {
            return Ok(Vec::new());
        };

        let payments = PaymentRepository::new(&db)
            .get_by_apartment(apartment_id)
            .await?;

        Ok(payments.into_iter().map(PaymentDto::from).collect())
    }

    pub async fn by_month(&self, month: NaiveDate) -> Result<Vec<PaymentDto>, Error> {
        let Some(db) = self.db.connection().await else {
            return Ok(Vec::new());
        };

        let payments = PaymentRepository::new(&db).get_by_month(month).await?;

        Ok(payments.into_iter().map(PaymentDto::from).collect())
    }

    /// Records a payment and a `payment_received` notification for the same apartment.
    ///
    /// Both rows are inserted in one transaction, neither exists if either insert fails.
    ///
    /// # Returns
    /// - `Ok(PaymentDto)` - Payment recorded
    /// - `Err(Error::ValidationError)` - Malformed month or amount
    /// - `Err(Error::ResourceError(ResourceError::ApartmentNotFound))` - Unknown apartment
    /// - `Err(Error::DatabaseUnavailable)` - Database could not be reached
    pub async fn create(&self, payment: CreatePaymentDto) -> Result<PaymentDto, Error> {
        let payment = payment.validate()?;
        let db = self.db.require().await?;

        let txn = db.begin().await?;

        let Some(apartment) = ApartmentRepository::new(&txn)
            .get_by_id(payment.apartment_id)
            .await?
        else {
            txn.rollback().await?;

            return Err(ResourceError::ApartmentNotFound(payment.apartment_id).into());
        };

        let created = PaymentRepository::new(&txn).create(payment).await?;

        NotificationRepository::new(&txn)
            .create(NewNotification {
                kind: NotificationType::PaymentReceived,
                title: "Payment received".to_string(),
                content: format!(
                    "Payment of {} received from {} for {}",
                    created.amount,
                    apartment.owner_name,
                    format_month(created.month)
                ),
                apartment_id: Some(apartment.id),
            })
            .await?;

        txn.commit().await?;

        tracing::info!(
            payment_id = %created.id,
            apartment_id = %apartment.id,
            amount = %created.amount,
            "Recorded payment"
        );

        Ok(created.into())
    }
}
