use serde::Serialize;
use tracing::{debug, trace};

use crate::errors::SolveError;
use crate::units::{Current, Power, Quantity, Resistance, Voltage};

/// A partial assignment of the four quantities. Absent fields are unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct KnownValues {
    pub voltage: Option<f64>,
    pub current: Option<f64>,
    pub resistance: Option<f64>,
    pub power: Option<f64>,
}

impl KnownValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn voltage(mut self, volts: f64) -> Self {
        self.voltage = Some(volts);
        self
    }

    pub fn current(mut self, amps: f64) -> Self {
        self.current = Some(amps);
        self
    }

    pub fn resistance(mut self, ohms: f64) -> Self {
        self.resistance = Some(ohms);
        self
    }

    pub fn power(mut self, watts: f64) -> Self {
        self.power = Some(watts);
        self
    }

    pub fn with(self, quantity: Quantity, value: f64) -> Self {
        match quantity {
            Quantity::Voltage => self.voltage(value),
            Quantity::Current => self.current(value),
            Quantity::Resistance => self.resistance(value),
            Quantity::Power => self.power(value),
        }
    }

    pub fn get(&self, quantity: Quantity) -> Option<f64> {
        match quantity {
            Quantity::Voltage => self.voltage,
            Quantity::Current => self.current,
            Quantity::Resistance => self.resistance,
            Quantity::Power => self.power,
        }
    }

    pub fn count(&self) -> usize {
        Quantity::ALL.iter().filter(|q| self.get(**q).is_some()).count()
    }
}

/// The two quantities a solution was derived from, in resolution priority
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KnownPair {
    VoltageCurrent,
    VoltageResistance,
    CurrentResistance,
    VoltagePower,
    CurrentPower,
    ResistancePower,
}

impl KnownPair {
    pub const PRIORITY: [KnownPair; 6] = [
        KnownPair::VoltageCurrent,
        KnownPair::VoltageResistance,
        KnownPair::CurrentResistance,
        KnownPair::VoltagePower,
        KnownPair::CurrentPower,
        KnownPair::ResistancePower,
    ];

    /// First pair in priority order whose members are both present.
    pub fn select(known: &KnownValues) -> Option<Self> {
        Self::PRIORITY
            .into_iter()
            .find(|pair| pair.known().iter().all(|q| known.get(*q).is_some()))
    }

    pub fn known(self) -> [Quantity; 2] {
        match self {
            Self::VoltageCurrent => [Quantity::Voltage, Quantity::Current],
            Self::VoltageResistance => [Quantity::Voltage, Quantity::Resistance],
            Self::CurrentResistance => [Quantity::Current, Quantity::Resistance],
            Self::VoltagePower => [Quantity::Voltage, Quantity::Power],
            Self::CurrentPower => [Quantity::Current, Quantity::Power],
            Self::ResistancePower => [Quantity::Resistance, Quantity::Power],
        }
    }

    pub fn derived(self) -> [Quantity; 2] {
        match self {
            Self::VoltageCurrent => [Quantity::Resistance, Quantity::Power],
            Self::VoltageResistance => [Quantity::Current, Quantity::Power],
            Self::CurrentResistance => [Quantity::Voltage, Quantity::Power],
            Self::VoltagePower => [Quantity::Current, Quantity::Resistance],
            Self::CurrentPower => [Quantity::Voltage, Quantity::Resistance],
            Self::ResistancePower => [Quantity::Voltage, Quantity::Current],
        }
    }

    /// All four quantities, in [`Quantity::ALL`] order, from the values of
    /// this pair's two known quantities given in `known()` order.
    pub fn derive(self, x: f64, y: f64) -> [f64; 4] {
        match self {
            Self::VoltageCurrent => [x, y, x / y, x * y],
            Self::VoltageResistance => [x, x / y, y, x * x / y],
            Self::CurrentResistance => [x * y, x, y, x * x * y],
            Self::VoltagePower => [x, y / x, x * x / y, y],
            Self::CurrentPower => [y / x, x, y / (x * x), y],
            Self::ResistancePower => [(x * y).sqrt(), (y / x).sqrt(), x, y],
        }
    }

    /// Formulas used for the derived quantities, in `derived()` order.
    pub fn formulas(self) -> [&'static str; 2] {
        match self {
            Self::VoltageCurrent => ["R = V / I", "P = V × I"],
            Self::VoltageResistance => ["I = V / R", "P = V² / R"],
            Self::CurrentResistance => ["V = I × R", "P = I² × R"],
            Self::VoltagePower => ["I = P / V", "R = V² / P"],
            Self::CurrentPower => ["V = P / I", "R = P / I²"],
            Self::ResistancePower => ["V = √(P × R)", "I = √(P / R)"],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Solution {
    pub voltage: f64,
    pub current: f64,
    pub resistance: f64,
    pub power: f64,
    pub derived_from: KnownPair,
}

impl Solution {
    pub fn get(&self, quantity: Quantity) -> f64 {
        match quantity {
            Quantity::Voltage => self.voltage,
            Quantity::Current => self.current,
            Quantity::Resistance => self.resistance,
            Quantity::Power => self.power,
        }
    }

    /// True when `V = I·R` and `P = V·I` hold within `max_relative`.
    /// Over-specified inputs are copied through unchecked, so this can be
    /// false for a solution `solve` returned.
    pub fn is_consistent(&self, max_relative: f64) -> bool {
        let close = |a: f64, b: f64| (a - b).abs() <= max_relative * a.abs().max(b.abs());
        close(self.voltage, self.current * self.resistance)
            && close(self.power, self.voltage * self.current)
    }
}

/// Derives all four quantities from at least two known ones.
///
/// Every supplied value is validated first, so a zero or negative field is
/// reported even when too few fields were given. Supplied values are copied
/// into the result as-is; only the missing ones are computed, from the first
/// pair in [`KnownPair::PRIORITY`] that is fully known.
pub fn solve(known: &KnownValues) -> Result<Solution, SolveError> {
    let validated = KnownValues {
        voltage: known.voltage.map(Voltage::new).transpose()?.map(f64::from),
        current: known.current.map(Current::new).transpose()?.map(f64::from),
        resistance: known.resistance.map(Resistance::new).transpose()?.map(f64::from),
        power: known.power.map(Power::new).transpose()?.map(f64::from),
    };

    let supplied = validated.count();
    let Some(derived_from) = KnownPair::select(&validated) else {
        trace!(supplied, "not enough known quantities");
        return Err(SolveError::InsufficientInputs { supplied });
    };
    let [first, second] = derived_from.known();
    let (Some(x), Some(y)) = (validated.get(first), validated.get(second)) else {
        return Err(SolveError::InsufficientInputs { supplied });
    };

    let mut values = derived_from.derive(x, y);
    for (slot, quantity) in values.iter_mut().zip(Quantity::ALL) {
        if let Some(given) = validated.get(quantity) {
            *slot = given;
        }
    }
    let [voltage, current, resistance, power] = values;

    debug!(?derived_from, supplied, "solved for missing quantities");
    Ok(Solution {
        voltage,
        current,
        resistance,
        power,
        derived_from,
    })
}
