//! Request validation.
//!
//! Request bodies arrive as loosely typed DTOs (amounts and months as strings, optional
//! free text). [`Validate`] turns each DTO into the parameter type its repository expects,
//! so nothing reaches storage without passing these checks.

use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

use crate::{
    model::{
        apartment::{CreateApartmentDto, UpdateApartmentDto},
        fee::{CreateFeeCategoryDto, CreateMonthlyFeeDto, UpdateFeeCategoryDto, UpdateMonthlyFeeDto},
        payment::CreatePaymentDto,
        settings::UpdateBuildingSettingsDto,
    },
    server::{
        data::{
            apartment::{ApartmentChanges, NewApartment},
            fee_category::{FeeCategoryChanges, NewFeeCategory},
            monthly_fee::NewMonthlyFee,
            payment::NewPayment,
            settings::BuildingSettingsChanges,
        },
        error::validation::ValidationError,
        util::time::parse_month,
    },
};

pub const MIN_FLOOR: i32 = 1;
pub const MAX_FLOOR: i32 = 15;
pub const MIN_UNIT: i32 = 1;
pub const MAX_UNIT: i32 = 4;

pub const DEFAULT_TOTAL_FLOORS: i32 = 15;
pub const DEFAULT_UNITS_PER_FLOOR: i32 = 4;

static AMOUNT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+(\.\d{1,2})?$").expect("invalid amount regex"));
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("invalid email regex"));
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{10,}$").expect("invalid phone regex"));

/// Converts request input into a validated value.
pub trait Validate {
    type Output;

    fn validate(self) -> Result<Self::Output, ValidationError>;
}

pub fn validate_floor(floor_number: i32) -> Result<i32, ValidationError> {
    if (MIN_FLOOR..=MAX_FLOOR).contains(&floor_number) {
        Ok(floor_number)
    } else {
        Err(ValidationError::FloorOutOfRange(floor_number))
    }
}

pub fn validate_unit(unit_number: i32) -> Result<i32, ValidationError> {
    if (MIN_UNIT..=MAX_UNIT).contains(&unit_number) {
        Ok(unit_number)
    } else {
        Err(ValidationError::UnitOutOfRange(unit_number))
    }
}

/// Parses a non-negative decimal amount with at most two fractional digits.
pub fn parse_amount(input: &str) -> Result<Decimal, ValidationError> {
    let trimmed = input.trim();
    let invalid = || ValidationError::InvalidAmount(input.to_string());

    if !AMOUNT_RE.is_match(trimmed) {
        return Err(invalid());
    }

    let amount = Decimal::from_str(trimmed).map_err(|_| invalid())?;
    // NUMERIC(10, 2) upper bound
    if amount > Decimal::new(9_999_999_999, 2) {
        return Err(invalid());
    }

    Ok(amount)
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail(email.to_string()))
    }
}

pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if PHONE_RE.is_match(phone) {
        Ok(())
    } else {
        Err(ValidationError::InvalidPhone(phone.to_string()))
    }
}

/// Trims a required text field, rejecting blank values.
pub fn required(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Trims optional text, treating blank values as absent.
fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn optional_email(email: Option<String>) -> Result<Option<String>, ValidationError> {
    let email = optional(email);
    if let Some(email) = &email {
        validate_email(email)?;
    }

    Ok(email)
}

fn optional_phone(phone: Option<String>) -> Result<Option<String>, ValidationError> {
    let phone = optional(phone);
    if let Some(phone) = &phone {
        validate_phone(phone)?;
    }

    Ok(phone)
}

fn at_least_one(field: &'static str, value: i32) -> Result<i32, ValidationError> {
    if value >= 1 {
        Ok(value)
    } else {
        Err(ValidationError::NotPositive { field, value })
    }
}

impl Validate for CreateApartmentDto {
    type Output = NewApartment;

    fn validate(self) -> Result<NewApartment, ValidationError> {
        Ok(NewApartment {
            floor_number: validate_floor(self.floor_number)?,
            unit_number: validate_unit(self.unit_number)?,
            owner_name: required("Owner name", &self.owner_name)?,
            owner_email: optional_email(self.owner_email)?,
            owner_phone: optional_phone(self.owner_phone)?,
            status: self.status,
            notes: optional(self.notes),
        })
    }
}

/// A blank email, phone or notes value clears the stored value.
impl Validate for UpdateApartmentDto {
    type Output = ApartmentChanges;

    fn validate(self) -> Result<ApartmentChanges, ValidationError> {
        Ok(ApartmentChanges {
            floor_number: self.floor_number.map(validate_floor).transpose()?,
            unit_number: self.unit_number.map(validate_unit).transpose()?,
            owner_name: self
                .owner_name
                .map(|name| required("Owner name", &name))
                .transpose()?,
            owner_email: match self.owner_email {
                Some(email) => Some(optional_email(Some(email))?),
                None => None,
            },
            owner_phone: match self.owner_phone {
                Some(phone) => Some(optional_phone(Some(phone))?),
                None => None,
            },
            status: self.status,
            notes: self.notes.map(|notes| optional(Some(notes))),
        })
    }
}

impl Validate for CreateFeeCategoryDto {
    type Output = NewFeeCategory;

    fn validate(self) -> Result<NewFeeCategory, ValidationError> {
        Ok(NewFeeCategory {
            name: required("Name", &self.name)?,
            description: optional(self.description),
        })
    }
}

impl Validate for UpdateFeeCategoryDto {
    type Output = FeeCategoryChanges;

    fn validate(self) -> Result<FeeCategoryChanges, ValidationError> {
        Ok(FeeCategoryChanges {
            name: self.name.map(|name| required("Name", &name)).transpose()?,
            description: self.description.map(|d| optional(Some(d))),
            is_active: self.is_active,
        })
    }
}

impl Validate for CreateMonthlyFeeDto {
    type Output = NewMonthlyFee;

    fn validate(self) -> Result<NewMonthlyFee, ValidationError> {
        Ok(NewMonthlyFee {
            month: parse_month(&self.month)?,
            fee_category_id: self.fee_category_id,
            amount: parse_amount(&self.amount)?,
        })
    }
}

impl Validate for UpdateMonthlyFeeDto {
    type Output = Decimal;

    fn validate(self) -> Result<Decimal, ValidationError> {
        match self.amount.as_deref() {
            Some(amount) => parse_amount(amount),
            None => Err(ValidationError::MissingField("Amount")),
        }
    }
}

impl Validate for CreatePaymentDto {
    type Output = NewPayment;

    fn validate(self) -> Result<NewPayment, ValidationError> {
        Ok(NewPayment {
            apartment_id: self.apartment_id,
            month: parse_month(&self.month)?,
            amount: parse_amount(&self.amount)?,
            payment_date: self.payment_date,
            payment_method: self.payment_method,
            transaction_id: optional(self.transaction_id),
            notes: optional(self.notes),
        })
    }
}

impl Validate for UpdateBuildingSettingsDto {
    type Output = BuildingSettingsChanges;

    fn validate(self) -> Result<BuildingSettingsChanges, ValidationError> {
        Ok(BuildingSettingsChanges {
            building_name: required("Building name", &self.building_name)?,
            address: required("Address", &self.address)?,
            city: optional(self.city),
            governorate: optional(self.governorate),
            postal_code: optional(self.postal_code),
            phone_number: optional(self.phone_number),
            email: optional_email(self.email)?,
            manager_name: optional(self.manager_name),
            total_floors: at_least_one(
                "Total floors",
                self.total_floors.unwrap_or(DEFAULT_TOTAL_FLOORS),
            )?,
            units_per_floor: at_least_one(
                "Units per floor",
                self.units_per_floor.unwrap_or(DEFAULT_UNITS_PER_FLOOR),
            )?,
            additional_info: optional(self.additional_info),
        })
    }
}
