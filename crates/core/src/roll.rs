//! Roll identity and roll-id validation.
//!
//! Roll ids arrive from several representations (path segments, JSON
//! numbers, integers from other services). Every one of them goes through
//! [`RollId`] before any data access happens.

use std::fmt;

use serde::Serialize;

use crate::error::CoreError;
use crate::types::DbId;

/// Message carried by every roll-id validation failure.
pub const INVALID_ROLL_ID: &str = "Invalid roll ID. Must be a positive integer.";

// ---------------------------------------------------------------------------
// RollId
// ---------------------------------------------------------------------------

/// A validated roll identifier: always a positive integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RollId(DbId);

impl RollId {
    pub fn get(self) -> DbId {
        self.0
    }
}

impl fmt::Display for RollId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn invalid() -> CoreError {
    CoreError::Validation(INVALID_ROLL_ID.to_string())
}

impl TryFrom<i64> for RollId {
    type Error = CoreError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value > 0 {
            Ok(RollId(value))
        } else {
            Err(invalid())
        }
    }
}

impl TryFrom<f64> for RollId {
    type Error = CoreError;

    /// Accepts only finite, integral, positive values that fit in an `i64`.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        // `i64::MAX as f64` rounds up to 2^63, so the bound is exclusive.
        if !value.is_finite() || value.fract() != 0.0 || value <= 0.0 || value >= i64::MAX as f64 {
            return Err(invalid());
        }
        Ok(RollId(value as i64))
    }
}

/// Whether `raw` is a plain decimal number: an optional sign, digits, and an
/// optional fractional part. Exponents, `inf` and `NaN` do not qualify.
pub fn is_decimal_literal(raw: &str) -> bool {
    let unsigned = raw.strip_prefix(&['+', '-'][..]).unwrap_or(raw);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };
    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    all_digits(whole) && fraction.map_or(true, all_digits)
}

impl TryFrom<&str> for RollId {
    type Error = CoreError;

    /// Integral strings are parsed exactly; other decimal strings go
    /// through the `f64` rules so `"1.5"` and `"2.0"` are judged by value.
    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        let raw = raw.trim();
        if !is_decimal_literal(raw) {
            return Err(invalid());
        }
        if let Ok(value) = raw.parse::<i64>() {
            return RollId::try_from(value);
        }
        match raw.parse::<f64>() {
            Ok(value) => RollId::try_from(value),
            Err(_) => Err(invalid()),
        }
    }
}

// ---------------------------------------------------------------------------
// RollIdentity
// ---------------------------------------------------------------------------

/// The roll fields carried into every aggregated response.
#[derive(Debug, Clone, PartialEq)]
pub struct RollIdentity {
    pub id: DbId,
    pub roll_code: String,
    pub material: String,
    pub length_m: f64,
}
