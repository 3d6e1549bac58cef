//! Parsing of free-text calculator fields.

use tracing::trace;

use crate::errors::{InvalidReason, SolveError};
use crate::solver::KnownValues;
use crate::units::{validate, Quantity};

/// Keystroke filter for a field: digits with at most one decimal point.
/// A lone `.` is rejected, as are signs and exponents.
pub fn is_acceptable_entry(text: &str) -> bool {
    if text.is_empty() {
        return true;
    }
    text != "."
        && text.chars().all(|c| c.is_ascii_digit() || c == '.')
        && text.matches('.').count() <= 1
}

/// Parses one field. Blank text (or a bare `.`) means the field is unknown.
pub fn parse_field(quantity: Quantity, text: &str) -> Result<Option<f64>, SolveError> {
    let text = text.trim();
    if text.is_empty() || text == "." {
        return Ok(None);
    }
    let unparseable = || {
        trace!(%quantity, text, "rejected field text");
        SolveError::invalid(quantity, InvalidReason::Unparseable(text.to_string()))
    };
    if !is_acceptable_entry(text) {
        return Err(unparseable());
    }
    let value: f64 = text.parse().map_err(|_| unparseable())?;
    validate(quantity, value).map(Some)
}

/// Raw text of the four calculator fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldInputs {
    pub voltage: String,
    pub current: String,
    pub resistance: String,
    pub power: String,
}

impl FieldInputs {
    pub fn field(&self, quantity: Quantity) -> &str {
        match quantity {
            Quantity::Voltage => &self.voltage,
            Quantity::Current => &self.current,
            Quantity::Resistance => &self.resistance,
            Quantity::Power => &self.power,
        }
    }

    pub fn to_known(&self) -> Result<KnownValues, SolveError> {
        Quantity::ALL
            .into_iter()
            .try_fold(KnownValues::new(), |known, quantity| {
                Ok(match parse_field(quantity, self.field(quantity))? {
                    Some(value) => known.with(quantity, value),
                    None => known,
                })
            })
    }
}
