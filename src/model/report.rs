use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Payments received for a month
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct MonthlyRevenueDto {
    pub month: NaiveDate,
    pub total: Decimal,
    pub count: u64,
}

/// Share of the month's expected fee revenue that has been collected
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CollectionRateDto {
    pub month: NaiveDate,
    pub collected: Decimal,
    pub expected: Decimal,
    /// Percentage rounded to two decimal places
    pub rate: Decimal,
}

/// Dashboard summary for the current month
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct BuildingOverviewDto {
    pub month: NaiveDate,
    pub total_apartments: u64,
    pub active_apartments: u64,
    pub vacant_apartments: u64,
    pub monthly_revenue: Decimal,
    pub collection_count: u64,
    pub collection_rate: Decimal,
    pub outstanding_count: u64,
}
