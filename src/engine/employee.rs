use std::str::FromStr;

use super::error::RecordError;
use super::Decimal;
use serde::Deserialize;

/// Raw employee row as parsed from CSV input.
/// This is the unvalidated form that needs conversion to an `Employee`.
///
/// `rate` is filled from whichever pay-rate alias the header resolved to.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct EmployeeRecord {
    pub id: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub department: Option<String>,
    pub hours_worked: Option<String>,
    pub rate: Option<String>,
}

impl std::fmt::Display for EmployeeRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let field = |value: &Option<String>| value.as_deref().unwrap_or("").to_owned();
        write!(
            f,
            "id={} name={} department={} hours_worked={} rate={}",
            field(&self.id),
            field(&self.name),
            field(&self.department),
            field(&self.hours_worked),
            field(&self.rate)
        )
    }
}

/// A validated employee ready for aggregation.
///
/// All text fields are non-empty, `hours_worked` and `rate` are non-negative
/// and their product fits in a `Decimal`.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    id: String,
    email: String,
    name: String,
    department: String,
    hours_worked: Decimal,
    rate: Decimal,
    payout: Decimal,
}

impl Employee {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn hours_worked(&self) -> Decimal {
        self.hours_worked
    }

    pub fn rate(&self) -> Decimal {
        self.rate
    }

    /// Hours worked multiplied by the pay rate.
    pub fn payout(&self) -> Decimal {
        self.payout
    }
}

impl TryFrom<EmployeeRecord> for Employee {
    type Error = RecordError;

    fn try_from(record: EmployeeRecord) -> Result<Self, Self::Error> {
        let id = required_text("id", record.id)?;
        let email = required_text("email", record.email)?;
        let name = required_text("name", record.name)?;
        let department = required_text("department", record.department)?;
        let hours_worked = non_negative("hours_worked", record.hours_worked)?;
        let rate = non_negative("rate", record.rate)?;
        let payout = hours_worked
            .checked_mul(rate)
            .ok_or(RecordError::Overflow { field: "payout" })?
            .normalize();

        Ok(Employee {
            id,
            email,
            name,
            department,
            hours_worked,
            rate,
            payout,
        })
    }
}

fn required_text(field: &'static str, value: Option<String>) -> Result<String, RecordError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_owned()),
        _ => Err(RecordError::MissingField { field }),
    }
}

fn non_negative(field: &'static str, value: Option<String>) -> Result<Decimal, RecordError> {
    let text = required_text(field, value)?;
    let number = match Decimal::from_str(&text).or_else(|_| Decimal::from_scientific(&text)) {
        Ok(number) => number,
        Err(_) => return Err(unrepresentable(field, text)),
    };

    if number.is_sign_negative() && !number.is_zero() {
        return Err(RecordError::Negative { field, value: text });
    }
    Ok(number.normalize())
}

/// Classify text `Decimal` could not parse: a finite float is a real number
/// outside the decimal range, anything else is malformed.
fn unrepresentable(field: &'static str, text: String) -> RecordError {
    match text.parse::<f64>() {
        Ok(float) if float.is_finite() && float < 0.0 => {
            RecordError::Negative { field, value: text }
        }
        Ok(float) if float.is_finite() => RecordError::OutOfRange { field, value: text },
        _ => RecordError::InvalidNumber { field, value: text },
    }
}
