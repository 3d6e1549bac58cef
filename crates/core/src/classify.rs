//! Display-oriented classification of solved quantities.

use std::fmt;

use serde::Serialize;

use crate::solver::Solution;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CurrentBand {
    Microelectronics,
    LowCurrent,
    Electronics,
    Residential,
    Commercial,
    Industrial,
    HeavyIndustrial,
    Utility,
}

impl CurrentBand {
    pub fn classify(amps: f64) -> Option<Self> {
        if amps.is_nan() || amps <= 0.0 {
            return None;
        }
        let band = match amps {
            a if a < 0.001 => Self::Microelectronics,
            a if a < 0.1 => Self::LowCurrent,
            a if a < 1.0 => Self::Electronics,
            a if a <= 15.0 => Self::Residential,
            a if a <= 50.0 => Self::Commercial,
            a if a <= 100.0 => Self::Industrial,
            a if a <= 400.0 => Self::HeavyIndustrial,
            _ => Self::Utility,
        };
        Some(band)
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Microelectronics => "Microelectronics level - PCB traces",
            Self::LowCurrent => "Low current - sensors and control circuits",
            Self::Electronics => "Electronics level - LED circuits, small devices",
            Self::Residential => "Residential level - standard household circuits",
            Self::Commercial => "Commercial level - appliances and equipment",
            Self::Industrial => "Industrial level - motors and heavy equipment",
            Self::HeavyIndustrial => "Heavy industrial level - large motors and machinery",
            Self::Utility => "Utility level - transmission and distribution",
        }
    }
}

impl fmt::Display for CurrentBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerBand {
    VeryLow,
    Low,
    Moderate,
    Medium,
    High,
    VeryHigh,
    Industrial,
    Utility,
}

impl PowerBand {
    pub fn classify(watts: f64) -> Option<Self> {
        if watts.is_nan() || watts <= 0.0 {
            return None;
        }
        let band = match watts {
            w if w < 0.1 => Self::VeryLow,
            w if w < 1.0 => Self::Low,
            w if w <= 50.0 => Self::Moderate,
            w if w <= 500.0 => Self::Medium,
            w if w <= 2_000.0 => Self::High,
            w if w <= 10_000.0 => Self::VeryHigh,
            w if w <= 50_000.0 => Self::Industrial,
            _ => Self::Utility,
        };
        Some(band)
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::VeryLow => "Very low power - microelectronics",
            Self::Low => "Low power - electronic components, LEDs",
            Self::Moderate => "Moderate power - small appliances, chargers",
            Self::Medium => "Medium power - household appliances",
            Self::High => "High power - major appliances, tools",
            Self::VeryHigh => "Very high power - HVAC, industrial equipment",
            Self::Industrial => "Industrial power - large motors, machinery",
            Self::Utility => "Utility scale power - substations, transmission",
        }
    }
}

impl fmt::Display for PowerBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Ampacity table for 75 °C copper THWN, upper bounds inclusive.
pub const WIRE_GAUGE_TABLE: [(f64, &str); 23] = [
    (0.5, "18 AWG (0.5A max)"),
    (1.0, "16 AWG (1A max)"),
    (15.0, "14 AWG (15A circuit)"),
    (20.0, "12 AWG (20A circuit)"),
    (30.0, "10 AWG (30A circuit)"),
    (40.0, "8 AWG (50A circuit)"),
    (55.0, "6 AWG (65A circuit)"),
    (75.0, "4 AWG (85A circuit)"),
    (95.0, "3 AWG (100A circuit)"),
    (110.0, "2 AWG (115A circuit)"),
    (125.0, "1 AWG (130A circuit)"),
    (145.0, "1/0 AWG (150A circuit)"),
    (165.0, "2/0 AWG (175A circuit)"),
    (195.0, "3/0 AWG (200A circuit)"),
    (225.0, "4/0 AWG (230A circuit)"),
    (260.0, "250 MCM (255A circuit)"),
    (290.0, "300 MCM (285A circuit)"),
    (320.0, "350 MCM (310A circuit)"),
    (350.0, "400 MCM (335A circuit)"),
    (380.0, "500 MCM (380A circuit)"),
    (420.0, "600 MCM (420A circuit)"),
    (460.0, "750 MCM (475A circuit)"),
    (520.0, "1000 MCM (545A circuit)"),
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WireGauge {
    Table(&'static str),
    /// Beyond the table; sizing needs an engineer.
    Consult { amps: f64 },
}

impl WireGauge {
    pub fn recommend(amps: f64) -> Option<Self> {
        if amps.is_nan() || amps <= 0.0 {
            return None;
        }
        let gauge = WIRE_GAUGE_TABLE
            .iter()
            .find(|(limit, _)| amps <= *limit)
            .map_or(Self::Consult { amps }, |(_, label)| Self::Table(label));
        Some(gauge)
    }
}

impl fmt::Display for WireGauge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table(label) => f.write_str(label),
            Self::Consult { amps } => write!(
                f,
                "{}A - Consult electrical engineer for proper sizing",
                amps.ceil()
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Advisory {
    HighCurrent,
    HeatDissipation,
    ProfessionalInstallation,
}

impl Advisory {
    pub fn message(self) -> &'static str {
        match self {
            Self::HighCurrent => "High current - requires specialized installation",
            Self::HeatDissipation => "Consider heat dissipation requirements",
            Self::ProfessionalInstallation => "High power - professional installation required",
        }
    }

    pub fn for_solution(solution: &Solution) -> Vec<Self> {
        let mut advisories = Vec::new();
        if solution.current > 100.0 {
            advisories.push(Self::HighCurrent);
        }
        if solution.power > 50.0 {
            advisories.push(Self::HeatDissipation);
        }
        if solution.power > 2_000.0 {
            advisories.push(Self::ProfessionalInstallation);
        }
        advisories
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
