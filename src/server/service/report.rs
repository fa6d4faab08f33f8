//! Financial reports derived from apartments, monthly fees and payments.
//!
//! Each report loads the month's rows once and aggregates them in memory with `Decimal`
//! arithmetic. Months are the first day of the month.

use std::collections::HashSet;

use chrono::NaiveDate;
use entity::sea_orm_active_enums::ApartmentStatus;
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        apartment::ApartmentDto,
        report::{BuildingOverviewDto, CollectionRateDto, MonthlyRevenueDto},
    },
    server::{
        data::{
            apartment::ApartmentRepository, monthly_fee::MonthlyFeeRepository,
            payment::PaymentRepository,
        },
        error::Error,
        model::db::{ApartmentModel, LazyDatabase, MonthlyFeeModel, PaymentModel},
        util::time::current_month,
    },
};

/// Sums payment amounts.
pub fn total_paid(payments: &[PaymentModel]) -> Decimal {
    payments.iter().map(|payment| payment.amount).sum()
}

/// Revenue expected for a month: every fee is charged once per apartment.
pub fn expected_revenue(fees: &[MonthlyFeeModel], apartment_count: usize) -> Decimal {
    let per_apartment: Decimal = fees.iter().map(|fee| fee.amount).sum();

    per_apartment * Decimal::from(apartment_count)
}

/// Percentage of `expected` that was `collected`, rounded to two decimal places.
///
/// Returns zero when nothing was expected.
pub fn collection_rate(collected: Decimal, expected: Decimal) -> Decimal {
    if expected.is_zero() {
        return Decimal::ZERO;
    }

    (collected / expected * Decimal::ONE_HUNDRED).round_dp(2)
}

/// Apartments without a payment in `payments`, keeping the input order.
pub fn outstanding_apartments(
    apartments: Vec<ApartmentModel>,
    payments: &[PaymentModel],
) -> Vec<ApartmentModel> {
    let paid: HashSet<i32> = payments.iter().map(|payment| payment.apartment_id).collect();

    apartments
        .into_iter()
        .filter(|apartment| !paid.contains(&apartment.id))
        .collect()
}

/// Rows a month's reports are computed from.
struct MonthData {
    apartments: Vec<ApartmentModel>,
    fees: Vec<MonthlyFeeModel>,
    payments: Vec<PaymentModel>,
}

impl MonthData {
    async fn load(db: &DatabaseConnection, month: NaiveDate) -> Result<Self, Error> {
        Ok(Self {
            apartments: ApartmentRepository::new(db).get_all().await?,
            fees: MonthlyFeeRepository::new(db).get_by_month(month).await?,
            payments: PaymentRepository::new(db).get_by_month(month).await?,
        })
    }

    fn empty() -> Self {
        Self {
            apartments: Vec::new(),
            fees: Vec::new(),
            payments: Vec::new(),
        }
    }

    fn collection_rate(&self, month: NaiveDate) -> CollectionRateDto {
        let collected = total_paid(&self.payments);
        let expected = expected_revenue(&self.fees, self.apartments.len());

        CollectionRateDto {
            month,
            collected,
            expected,
            rate: collection_rate(collected, expected),
        }
    }

    fn count_status(&self, status: ApartmentStatus) -> u64 {
        self.apartments
            .iter()
            .filter(|apartment| apartment.status == status)
            .count() as u64
    }
}

pub struct ReportService<'a> {
    db: &'a LazyDatabase,
}

impl<'a> ReportService<'a> {
    pub fn new(db: &'a LazyDatabase) -> Self {
        Self { db }
    }

    async fn load(&self, month: NaiveDate) -> Result<MonthData, Error> {
        match self.db.connection().await {
            Some(db) => MonthData::load(&db, month).await,
            None => Ok(MonthData::empty()),
        }
    }

    pub async fn monthly_revenue(&self, month: NaiveDate) -> Result<MonthlyRevenueDto, Error> {
        let payments = match self.db.connection().await {
            Some(db) => PaymentRepository::new(&db).get_by_month(month).await?,
            None => Vec::new(),
        };

        Ok(MonthlyRevenueDto {
            month,
            total: total_paid(&payments),
            count: payments.len() as u64,
        })
    }

    pub async fn collection_rate(&self, month: NaiveDate) -> Result<CollectionRateDto, Error> {
        let data = self.load(month).await?;

        Ok(data.collection_rate(month))
    }

    /// Apartments with no payment recorded for `month`, ordered by floor then unit.
    pub async fn outstanding_payments(&self, month: NaiveDate) -> Result<Vec<ApartmentDto>, Error> {
        let data = self.load(month).await?;

        let outstanding = outstanding_apartments(data.apartments, &data.payments);

        Ok(outstanding.into_iter().map(ApartmentDto::from).collect())
    }

    /// Dashboard summary for the current month.
    pub async fn overview(&self) -> Result<BuildingOverviewDto, Error> {
        let month = current_month();
        let data = self.load(month).await?;

        let collection = data.collection_rate(month);
        let outstanding_count = outstanding_apartments(data.apartments.clone(), &data.payments).len();

        Ok(BuildingOverviewDto {
            month,
            total_apartments: data.apartments.len() as u64,
            active_apartments: data.count_status(ApartmentStatus::Active),
            vacant_apartments: data.count_status(ApartmentStatus::Vacant),
            monthly_revenue: collection.collected,
            collection_count: data.payments.len() as u64,
            collection_rate: collection.rate,
            outstanding_count: outstanding_count as u64,
        })
    }
}
