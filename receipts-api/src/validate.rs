//! Explicit field validation for receipt submissions.
//!
//! The field set is fixed and known at build time, so validation is an
//! enumerated walk over the DTO that returns structured
//! (field, violation kind) pairs. No reflection, no validator framework.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

use receipts_core::types::{DATE_FORMAT, TIME_FORMAT};
use receipts_core::{Item, Receipt};

use crate::dto::ProcessReceiptRequest;

/// How a field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// Field absent from the request body.
    Required,
    /// Field present but empty.
    Empty,
    /// Field present but not in the expected format.
    Malformed,
    /// Amount negative or carrying more than two fractional digits.
    OutOfRange,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ViolationKind::Required => "is required",
            ViolationKind::Empty => "must not be empty",
            ViolationKind::Malformed => "is not a valid value",
            ViolationKind::OutOfRange => "is out of range",
        };
        f.write_str(s)
    }
}

/// A single validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub kind: ViolationKind,
}

impl FieldViolation {
    fn new(field: impl Into<String>, kind: ViolationKind) -> Self {
        Self {
            field: field.into(),
            kind,
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.kind)
    }
}

/// Validate a submission and parse it into a core [`Receipt`].
///
/// All violations are collected in one pass so the caller can report every
/// offending field at once.
pub fn parse_receipt(req: &ProcessReceiptRequest) -> Result<Receipt, Vec<FieldViolation>> {
    let mut violations = Vec::new();

    let retailer = match &req.retailer {
        None => {
            violations.push(FieldViolation::new("retailer", ViolationKind::Required));
            None
        }
        Some(s) if s.trim().is_empty() => {
            violations.push(FieldViolation::new("retailer", ViolationKind::Empty));
            None
        }
        Some(s) => Some(s.clone()),
    };

    let purchase_date = parse_temporal(
        req.purchase_date.as_deref(),
        "purchaseDate",
        &mut violations,
        |s| NaiveDate::parse_from_str(s, DATE_FORMAT).ok(),
    );
    let purchase_time = parse_temporal(
        req.purchase_time.as_deref(),
        "purchaseTime",
        &mut violations,
        |s| NaiveTime::parse_from_str(s, TIME_FORMAT).ok(),
    );

    let items = match &req.items {
        None => {
            violations.push(FieldViolation::new("items", ViolationKind::Required));
            None
        }
        Some(v) if v.is_empty() => {
            violations.push(FieldViolation::new("items", ViolationKind::Empty));
            None
        }
        Some(v) => {
            let before = violations.len();
            let mut parsed = Vec::with_capacity(v.len());

            for (i, item) in v.iter().enumerate() {
                let description = match &item.short_description {
                    None => {
                        violations.push(FieldViolation::new(
                            format!("items[{i}].shortDescription"),
                            ViolationKind::Required,
                        ));
                        None
                    }
                    Some(s) if s.trim().is_empty() => {
                        violations.push(FieldViolation::new(
                            format!("items[{i}].shortDescription"),
                            ViolationKind::Empty,
                        ));
                        None
                    }
                    Some(s) => Some(s.clone()),
                };

                let price = validate_amount(
                    item.price.as_deref(),
                    &format!("items[{i}].price"),
                    &mut violations,
                );

                if let (Some(short_description), Some(price)) = (description, price) {
                    parsed.push(Item {
                        short_description,
                        price,
                    });
                }
            }

            // Only usable when every item passed.
            (violations.len() == before).then_some(parsed)
        }
    };

    let total = validate_amount(req.total.as_deref(), "total", &mut violations);

    match (retailer, purchase_date, purchase_time, items, total) {
        (Some(retailer), Some(purchase_date), Some(purchase_time), Some(items), Some(total)) => {
            Ok(Receipt {
                retailer,
                purchase_date,
                purchase_time,
                items,
                total,
            })
        }
        _ => Err(violations),
    }
}

fn parse_temporal<T>(
    value: Option<&str>,
    field: &str,
    violations: &mut Vec<FieldViolation>,
    parse: impl Fn(&str) -> Option<T>,
) -> Option<T> {
    match value {
        None => {
            violations.push(FieldViolation::new(field, ViolationKind::Required));
            None
        }
        Some(s) => match parse(s) {
            Some(t) => Some(t),
            None => {
                violations.push(FieldViolation::new(field, ViolationKind::Malformed));
                None
            }
        },
    }
}

/// A monetary field must parse as a non-negative decimal with at most two
/// fractional digits. Returns the original text on success so the core sees
/// exactly what was submitted.
fn validate_amount(
    value: Option<&str>,
    field: &str,
    violations: &mut Vec<FieldViolation>,
) -> Option<String> {
    let raw = match value {
        None => {
            violations.push(FieldViolation::new(field, ViolationKind::Required));
            return None;
        }
        Some(s) => s,
    };

    match Decimal::from_str(raw) {
        Err(_) => {
            violations.push(FieldViolation::new(field, ViolationKind::Malformed));
            None
        }
        Ok(d) if d.is_sign_negative() && !d.is_zero() => {
            violations.push(FieldViolation::new(field, ViolationKind::OutOfRange));
            None
        }
        Ok(d) if d.scale() > 2 => {
            violations.push(FieldViolation::new(field, ViolationKind::OutOfRange));
            None
        }
        Ok(_) => Some(raw.to_string()),
    }
}
