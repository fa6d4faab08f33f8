//! In-memory models with fixed timestamps for tests of pure functions.

use chrono::{NaiveDate, NaiveDateTime};
use entity::sea_orm_active_enums::{ApartmentStatus, PaymentMethod};
use rust_decimal::Decimal;

use crate::model::{ApartmentModel, MonthlyFeeModel, PaymentModel};

fn timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

/// Active apartment owned by `Owner {floor}-{unit}`.
pub fn mock_apartment(id: i32, floor_number: i32, unit_number: i32) -> ApartmentModel {
    ApartmentModel {
        id,
        floor_number,
        unit_number,
        owner_name: format!("Owner {}-{}", floor_number, unit_number),
        owner_email: None,
        owner_phone: None,
        status: ApartmentStatus::Active,
        notes: None,
        created_at: timestamp(),
        updated_at: timestamp(),
    }
}

/// Cash payment recorded on the first day of `month`.
pub fn mock_payment(id: i32, apartment_id: i32, month: NaiveDate, amount: Decimal) -> PaymentModel {
    PaymentModel {
        id,
        apartment_id,
        month,
        amount,
        payment_date: month,
        payment_method: PaymentMethod::Cash,
        transaction_id: None,
        notes: None,
        created_at: timestamp(),
        updated_at: timestamp(),
    }
}

pub fn mock_monthly_fee(id: i32, fee_category_id: i32, month: NaiveDate, amount: Decimal) -> MonthlyFeeModel {
    MonthlyFeeModel {
        id,
        month,
        fee_category_id,
        amount,
        created_at: timestamp(),
        updated_at: timestamp(),
    }
}
