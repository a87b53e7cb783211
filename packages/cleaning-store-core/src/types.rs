//! Value types shared by the record schemas.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Non-negative, finite monetary amount.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    /// Zero cost.
    pub const ZERO: Price = Price(0.0);

    /// Creates a price, rejecting negative and non-finite amounts.
    pub fn new(field: &'static str, amount: f64) -> Result<Self, ValidationError> {
        if !amount.is_finite() {
            return Err(ValidationError::NotANumber {
                field,
                value: amount.to_string(),
            });
        }
        if amount < 0.0 {
            return Err(ValidationError::Negative {
                field,
                value: format!("{:.2}", amount),
            });
        }
        Ok(Price(amount))
    }

    /// Returns the amount.
    pub fn amount(self) -> f64 {
        self.0
    }

    /// Value of `quantity` units at this price.
    pub fn times(self, quantity: u32) -> f64 {
        self.0 * f64::from(quantity)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Expiry date of a supply item, or the "N/A" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expiry {
    /// Item does not expire
    NotApplicable,
    /// Item expires on the given date
    Date(NaiveDate),
}

impl Expiry {
    /// Label used for items that do not expire.
    pub const NOT_APPLICABLE: &'static str = "N/A";

    /// Returns true if the item has expired on or before `today`.
    pub fn is_expired(self, today: NaiveDate) -> bool {
        match self {
            Expiry::NotApplicable => false,
            Expiry::Date(date) => date <= today,
        }
    }
}

impl fmt::Display for Expiry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expiry::NotApplicable => f.write_str(Self::NOT_APPLICABLE),
            Expiry::Date(date) => write!(f, "{}", date),
        }
    }
}

/// Enumerated field drawn from a small fixed set of labels.
pub trait Choice: Copy + Sized + 'static {
    /// Field name used in validation errors.
    const FIELD: &'static str;
    /// Every allowed value, in display order.
    const ALL: &'static [Self];

    /// Display label of this value.
    fn label(self) -> &'static str;

    /// Parses a label, ignoring case and surrounding whitespace.
    fn from_label(raw: &str) -> Result<Self, ValidationError> {
        let wanted = raw.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|choice| choice.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ValidationError::UnknownVariant {
                field: Self::FIELD,
                value: raw.to_string(),
                allowed: Self::ALL
                    .iter()
                    .map(|choice| choice.label())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

/// Declares a fieldless enum implementing [`Choice`], `Display` and `FromStr`.
macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        $name:ident, field = $field:literal {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $crate::types::Choice for $name {
            const FIELD: &'static str = $field;
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::types::Choice::label(*self))
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::ValidationError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                <Self as $crate::types::Choice>::from_label(raw)
            }
        }
    };
}

pub(crate) use choice_enum;
