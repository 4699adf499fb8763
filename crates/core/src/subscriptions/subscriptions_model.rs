//! Subscription domain models.

use std::str::FromStr;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{MONTHS_PER_YEAR, WEEKS_PER_YEAR};
use crate::subscriptions::subscriptions_constants::{NAME_MAX_LENGTH, NAME_MIN_LENGTH};
use crate::{errors::ValidationError, Error, Result};

/// Billing cadence of a subscription - determines cost normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Recurrence {
    /// Billed every week
    Weekly,
    /// Billed every month
    #[default]
    Monthly,
    /// Billed twice a year
    Semiannual,
    /// Billed once a year
    Yearly,
}

impl Recurrence {
    pub fn as_str(&self) -> &'static str {
        use crate::subscriptions::subscriptions_constants::*;
        match self {
            Recurrence::Weekly => RECURRENCE_WEEKLY,
            Recurrence::Monthly => RECURRENCE_MONTHLY,
            Recurrence::Semiannual => RECURRENCE_SEMIANNUAL,
            Recurrence::Yearly => RECURRENCE_YEARLY,
        }
    }

    /// Parses a stored tag leniently. Unrecognized tags count as monthly so
    /// a record with a bad tag still yields figures instead of an error.
    pub fn parse(s: &str) -> Recurrence {
        Recurrence::from_str(s).unwrap_or_default()
    }

    /// Cost per month for an amount billed at this cadence.
    pub fn monthly_amount(&self, amount: Decimal) -> Decimal {
        match self {
            Recurrence::Weekly => amount * weeks_per_month(),
            Recurrence::Monthly => amount,
            Recurrence::Semiannual => amount / dec!(6),
            Recurrence::Yearly => amount / weeks_per_month(),
        }
    }

    /// Cost per year for an amount billed at this cadence.
    pub fn annual_amount(&self, amount: Decimal) -> Decimal {
        match self {
            Recurrence::Weekly => amount * WEEKS_PER_YEAR,
            Recurrence::Monthly => amount * MONTHS_PER_YEAR,
            Recurrence::Semiannual => amount * dec!(2),
            Recurrence::Yearly => amount,
        }
    }
}

impl FromStr for Recurrence {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        use crate::subscriptions::subscriptions_constants::*;
        let tag = s.trim().to_uppercase();
        match tag.as_str() {
            t if t == RECURRENCE_WEEKLY => Ok(Recurrence::Weekly),
            t if t == RECURRENCE_MONTHLY => Ok(Recurrence::Monthly),
            t if t == RECURRENCE_SEMIANNUAL => Ok(Recurrence::Semiannual),
            t if t == RECURRENCE_YEARLY => Ok(Recurrence::Yearly),
            _ => Err(format!("Unknown recurrence: {}", s)),
        }
    }
}

/// Average weeks per month; also the yearly-to-monthly divisor.
fn weeks_per_month() -> Decimal {
    WEEKS_PER_YEAR / MONTHS_PER_YEAR
}

/// Returns true when `code` is a plausible ISO 4217 currency code
/// (exactly three letters).
pub fn is_valid_currency_code(code: &str) -> bool {
    code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic())
}

/// Domain model representing a tracked subscription.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: String,
    pub name: String,
    /// Amount charged per billing cycle, in `currency`
    pub amount: Decimal,
    /// ISO 4217 code the subscription is billed in
    pub currency: String,
    /// Date of the next expected charge
    pub next_payment: NaiveDate,
    /// Billing cadence tag (one of `RECURRENCE_TAGS`)
    pub recurrence: String,
}

/// Input model for creating a new subscription.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSubscription {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub amount: Decimal,
    pub currency: String,
    pub next_payment: NaiveDate,
    pub recurrence: String,
}

impl NewSubscription {
    /// Validates the new subscription data.
    pub fn validate(&self) -> Result<()> {
        validate_fields(
            &self.name,
            self.amount,
            &self.currency,
            self.next_payment,
            &self.recurrence,
        )
    }

    /// Consumes the input and mints a subscription record.
    ///
    /// Callers are expected to [`validate`](Self::validate) first; the
    /// conversion itself only normalizes casing and fills in a generated id.
    pub fn into_subscription(self) -> Subscription {
        Subscription {
            id: self
                .id
                .filter(|id| !id.trim().is_empty())
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            name: self.name.trim().to_string(),
            amount: self.amount,
            currency: self.currency.trim().to_uppercase(),
            next_payment: self.next_payment,
            recurrence: Recurrence::parse(&self.recurrence).as_str().to_string(),
        }
    }
}

/// Input model for updating an existing subscription.
///
/// Updates are whole-record: every field is posted back and `id` selects
/// the record to replace.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionUpdate {
    pub id: Option<String>,
    pub name: String,
    pub amount: Decimal,
    pub currency: String,
    pub next_payment: NaiveDate,
    pub recurrence: String,
}

impl SubscriptionUpdate {
    /// Validates the subscription update data.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_none() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Subscription ID is required for updates".to_string(),
            )));
        }
        validate_fields(
            &self.name,
            self.amount,
            &self.currency,
            self.next_payment,
            &self.recurrence,
        )
    }

    /// Applies the update in place, preserving the record id.
    pub fn apply(self, subscription: &mut Subscription) {
        subscription.name = self.name.trim().to_string();
        subscription.amount = self.amount;
        subscription.currency = self.currency.trim().to_uppercase();
        subscription.next_payment = self.next_payment;
        subscription.recurrence = Recurrence::parse(&self.recurrence).as_str().to_string();
    }
}

/// Shared field checks for create and update inputs.
fn validate_fields(
    name: &str,
    amount: Decimal,
    currency: &str,
    next_payment: NaiveDate,
    recurrence: &str,
) -> Result<()> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::Validation(ValidationError::MissingField(
            "name".to_string(),
        )));
    }
    let name_length = name.chars().count();
    if name_length < NAME_MIN_LENGTH || name_length > NAME_MAX_LENGTH {
        return Err(Error::Validation(ValidationError::InvalidInput(format!(
            "Subscription name must be between {} and {} characters",
            NAME_MIN_LENGTH, NAME_MAX_LENGTH
        ))));
    }
    if amount <= Decimal::ZERO {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Amount must be greater than zero".to_string(),
        )));
    }
    if !is_valid_currency_code(currency.trim()) {
        return Err(Error::Validation(ValidationError::InvalidInput(format!(
            "Invalid currency code: {}",
            currency
        ))));
    }
    if next_payment < Utc::now().date_naive() {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Next payment date cannot be in the past".to_string(),
        )));
    }
    Recurrence::from_str(recurrence)
        .map_err(|e| Error::Validation(ValidationError::InvalidInput(e)))?;
    Ok(())
}
