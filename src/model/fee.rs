use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct FeeCategoryDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::fee_category::Model> for FeeCategoryDto {
    fn from(category: entity::fee_category::Model) -> Self {
        Self {
            id: category.id,
            name: category.name,
            description: category.description,
            is_active: category.is_active,
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateFeeCategoryDto {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateFeeCategoryDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

/// Amount charged to every apartment for one fee category in one month
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct MonthlyFeeDto {
    pub id: i32,
    /// First day of the month the fee applies to
    pub month: NaiveDate,
    pub fee_category_id: i32,
    pub amount: Decimal,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::monthly_fee::Model> for MonthlyFeeDto {
    fn from(fee: entity::monthly_fee::Model) -> Self {
        Self {
            id: fee.id,
            month: fee.month,
            fee_category_id: fee.fee_category_id,
            amount: fee.amount,
            created_at: fee.created_at,
            updated_at: fee.updated_at,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateMonthlyFeeDto {
    /// `YYYY-MM` or `YYYY-MM-DD`, stored as the first day of the month
    pub month: String,
    pub fee_category_id: i32,
    /// Decimal string with at most two fractional digits, e.g. `250.00`
    pub amount: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateMonthlyFeeDto {
    pub amount: Option<String>,
}
