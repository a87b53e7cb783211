//! Input validation at the boundary between raw user input and the stores.
//!
//! Stores trust their callers; everything that reaches a store is built from
//! the typed values returned here.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::types::{Choice, Expiry, Price};

/// Date format accepted when none is configured.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Returns the trimmed text, rejecting empty input.
pub fn required_text(field: &'static str, raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(trimmed.to_string())
}

/// Parses a whole number, rejecting negatives.
pub fn non_negative_u32(field: &'static str, raw: &str) -> Result<u32, ValidationError> {
    let value = signed_integer(field, raw)?;
    if value < 0 {
        return Err(ValidationError::Negative {
            field,
            value: value.to_string(),
        });
    }
    u32::try_from(value).map_err(|_| ValidationError::Overflow { field })
}

/// Parses a signed whole number.
pub fn signed_integer(field: &'static str, raw: &str) -> Result<i64, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    trimmed.parse().map_err(|_| ValidationError::NotANumber {
        field,
        value: raw.to_string(),
    })
}

/// Parses a non-negative price.
pub fn price(field: &'static str, raw: &str) -> Result<Price, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    let amount: f64 = trimmed.parse().map_err(|_| ValidationError::NotANumber {
        field,
        value: raw.to_string(),
    })?;
    Price::new(field, amount)
}

/// Parses a calendar date in the given `chrono` format.
pub fn date(field: &'static str, raw: &str, format: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(raw.trim(), format).map_err(|_| ValidationError::MalformedDate {
        field,
        value: raw.to_string(),
    })
}

/// Parses an expiry date, accepting "N/A" (any case) for items that never expire.
pub fn expiry(field: &'static str, raw: &str, format: &str) -> Result<Expiry, ValidationError> {
    if raw.trim().eq_ignore_ascii_case(Expiry::NOT_APPLICABLE) {
        return Ok(Expiry::NotApplicable);
    }
    date(field, raw, format).map(Expiry::Date)
}

/// Parses one value of an enumerated field.
pub fn choice<C: Choice>(raw: &str) -> Result<C, ValidationError> {
    C::from_label(raw)
}

/// Splits comma-separated tasks, trimming each and dropping blanks.
pub fn task_list(field: &'static str, raw: &str) -> Result<Vec<String>, ValidationError> {
    let tasks: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|task| !task.is_empty())
        .map(str::to_string)
        .collect();
    if tasks.is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(tasks)
}

/// Raw field values as submitted by a form or command line.
///
/// Missing fields read as empty text, so required fields fail with
/// `EmptyField` rather than a lookup error.
#[derive(Debug, Clone)]
pub struct Form {
    values: BTreeMap<String, String>,
    date_format: String,
}

impl Form {
    /// Creates an empty form that parses dates with `date_format`.
    pub fn new(date_format: impl Into<String>) -> Self {
        Self {
            values: BTreeMap::new(),
            date_format: date_format.into(),
        }
    }

    /// Adds or replaces a field value.
    pub fn with(mut self, field: &str, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Sets a field value.
    pub fn set(&mut self, field: &str, value: impl Into<String>) {
        self.values.insert(normalize_field(field), value.into());
    }

    /// Builds a form from `field=value` pairs.
    ///
    /// Field names are matched case-insensitively, with spaces and dashes
    /// treated as underscores.
    pub fn from_pairs<'a, I>(date_format: impl Into<String>, pairs: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut form = Self::new(date_format);
        for pair in pairs {
            let (field, value) = pair.split_once('=').ok_or_else(|| {
                ValidationError::MalformedPair {
                    value: pair.to_string(),
                }
            })?;
            form.set(field, value);
        }
        Ok(form)
    }

    /// Returns the submitted fields in name order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(field, value)| (field.as_str(), value.as_str()))
    }

    /// Returns the configured date format.
    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    /// Raw text of a field, empty if it was not submitted.
    pub fn raw(&self, field: &str) -> &str {
        self.values
            .get(&normalize_field(field))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Returns true if the field was submitted.
    pub fn has(&self, field: &str) -> bool {
        self.values.contains_key(&normalize_field(field))
    }

    pub fn text(&self, field: &'static str) -> Result<String, ValidationError> {
        required_text(field, self.raw(field))
    }

    pub fn whole(&self, field: &'static str) -> Result<u32, ValidationError> {
        non_negative_u32(field, self.raw(field))
    }

    pub fn price(&self, field: &'static str) -> Result<Price, ValidationError> {
        price(field, self.raw(field))
    }

    pub fn date(&self, field: &'static str) -> Result<NaiveDate, ValidationError> {
        date(field, self.raw(field), &self.date_format)
    }

    pub fn expiry(&self, field: &'static str) -> Result<Expiry, ValidationError> {
        expiry(field, self.raw(field), &self.date_format)
    }

    pub fn choice<C: Choice>(&self) -> Result<C, ValidationError> {
        choice(self.raw(C::FIELD))
    }

    pub fn tasks(&self, field: &'static str) -> Result<Vec<String>, ValidationError> {
        task_list(field, self.raw(field))
    }
}

/// Canonical spelling of a field name: lower case, underscores for separators.
pub fn normalize_field(field: &str) -> String {
    field
        .trim()
        .chars()
        .map(|c| match c {
            ' ' | '-' => '_',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}
