//! Ohm's law solver for voltage, current, resistance and power.
//!
//! Any two known quantities determine the other two through `V = I·R` and
//! `P = V·I`. Results can be classified into current and power bands, sized
//! against a wire gauge table and formatted for display.
//!
//! ```rust
//! use ohm_solve_core::solver::{solve, KnownValues};
//!
//! let known = KnownValues::new().voltage(12.0).current(0.02);
//! let solution = solve(&known).unwrap();
//! assert!((solution.resistance - 600.0).abs() < 1e-9);
//! ```

pub mod classify;
pub mod errors;
pub mod format;
pub mod input;
pub mod report;
pub mod solver;
pub mod units;
