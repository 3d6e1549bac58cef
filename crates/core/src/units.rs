use std::fmt;

use serde::Serialize;

use crate::errors::{InvalidReason, SolveError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Quantity {
    Voltage,
    Current,
    Resistance,
    Power,
}

impl Quantity {
    pub const ALL: [Quantity; 4] = [
        Quantity::Voltage,
        Quantity::Current,
        Quantity::Resistance,
        Quantity::Power,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Voltage => "voltage",
            Self::Current => "current",
            Self::Resistance => "resistance",
            Self::Power => "power",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Voltage => "V",
            Self::Current => "I",
            Self::Resistance => "R",
            Self::Power => "P",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Self::Voltage => "V",
            Self::Current => "A",
            Self::Resistance => "Ω",
            Self::Power => "W",
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Checks that `value` is a usable magnitude for `quantity`: strictly
/// positive and finite. Zero gets its own reason so callers can tell the
/// user exactly what went wrong.
pub fn validate(quantity: Quantity, value: f64) -> Result<f64, SolveError> {
    match value {
        v if v > 0.0 && v.is_finite() => Ok(v),
        v if v == 0.0 => Err(SolveError::invalid(quantity, InvalidReason::Zero)),
        _ => Err(SolveError::invalid(quantity, InvalidReason::NotPositive)),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Voltage(f64);

impl Voltage {
    pub fn new(volts: f64) -> Result<Self, SolveError> {
        validate(Quantity::Voltage, volts).map(Self)
    }
}

impl From<Voltage> for f64 {
    fn from(value: Voltage) -> f64 {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Current(f64);

impl Current {
    pub fn new(amps: f64) -> Result<Self, SolveError> {
        validate(Quantity::Current, amps).map(Self)
    }
}

impl From<Current> for f64 {
    fn from(value: Current) -> f64 {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Resistance(f64);

impl Resistance {
    pub fn new(ohms: f64) -> Result<Self, SolveError> {
        validate(Quantity::Resistance, ohms).map(Self)
    }
}

impl From<Resistance> for f64 {
    fn from(value: Resistance) -> f64 {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Power(f64);

impl Power {
    pub fn new(watts: f64) -> Result<Self, SolveError> {
        validate(Quantity::Power, watts).map(Self)
    }
}

impl From<Power> for f64 {
    fn from(value: Power) -> f64 {
        value.0
    }
}
