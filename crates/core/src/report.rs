use serde::Serialize;

use crate::classify::{Advisory, CurrentBand, PowerBand, WireGauge};
use crate::format::format_quantity;
use crate::solver::Solution;
use crate::units::Quantity;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormattedValue {
    pub quantity: Quantity,
    pub value: f64,
    pub display: String,
    pub unit: &'static str,
}

/// Everything a front end shows after a successful solve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub solution: Solution,
    pub values: Vec<FormattedValue>,
    pub current_band: Option<CurrentBand>,
    pub power_band: Option<PowerBand>,
    pub wire_gauge: Option<WireGauge>,
    pub advisories: Vec<Advisory>,
}

impl Report {
    pub fn new(solution: &Solution) -> Self {
        let values = Quantity::ALL
            .into_iter()
            .map(|quantity| {
                let value = solution.get(quantity);
                FormattedValue {
                    quantity,
                    value,
                    display: format_quantity(Some(value)),
                    unit: quantity.unit(),
                }
            })
            .collect();

        Self {
            solution: *solution,
            values,
            current_band: CurrentBand::classify(solution.current),
            power_band: PowerBand::classify(solution.power),
            wire_gauge: WireGauge::recommend(solution.current),
            advisories: Advisory::for_solution(solution),
        }
    }
}
