use chrono::{NaiveDate, NaiveDateTime};
use entity::sea_orm_active_enums::PaymentMethod;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct PaymentDto {
    pub id: i32,
    pub apartment_id: i32,
    /// First day of the month the payment covers
    pub month: NaiveDate,
    pub amount: Decimal,
    pub payment_date: NaiveDate,
    pub payment_method: PaymentMethod,
    pub transaction_id: Option<String>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::payment::Model> for PaymentDto {
    fn from(payment: entity::payment::Model) -> Self {
        Self {
            id: payment.id,
            apartment_id: payment.apartment_id,
            month: payment.month,
            amount: payment.amount,
            payment_date: payment.payment_date,
            payment_method: payment.payment_method,
            transaction_id: payment.transaction_id,
            notes: payment.notes,
            created_at: payment.created_at,
            updated_at: payment.updated_at,
        }
    }
}

/// Request body for recording a payment
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatePaymentDto {
    pub apartment_id: i32,
    /// `YYYY-MM` or `YYYY-MM-DD`, stored as the first day of the month
    pub month: String,
    /// Decimal string with at most two fractional digits, e.g. `500.00`
    pub amount: String,
    pub payment_date: NaiveDate,
    pub payment_method: PaymentMethod,
    pub transaction_id: Option<String>,
    pub notes: Option<String>,
}
