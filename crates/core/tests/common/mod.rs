use approx::assert_relative_eq;
use ohm_solve_core::solver::Solution;
use ohm_solve_core::units::Quantity;

pub mod strategies;

/// Relative tolerance for values derived through one or two float operations.
pub const EPSILON_STRICT: f64 = 1e-9;

/// Asserts that `V = I·R` and `P = V·I` hold for a solution.
pub fn assert_ohms_law(solution: &Solution, epsilon: f64) {
    assert_relative_eq!(
        solution.voltage,
        solution.current * solution.resistance,
        max_relative = epsilon
    );
    assert_relative_eq!(
        solution.power,
        solution.voltage * solution.current,
        max_relative = epsilon
    );
}

/// Asserts every quantity of `actual` matches `expected` within `epsilon`.
pub fn assert_solution_eq(actual: &Solution, expected: &Solution, epsilon: f64) {
    for quantity in Quantity::ALL {
        assert_relative_eq!(
            actual.get(quantity),
            expected.get(quantity),
            max_relative = epsilon
        );
    }
}
