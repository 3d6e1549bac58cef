use ohm_solve_core::solver::{KnownPair, KnownValues};
use proptest::prelude::*;

/// Magnitudes spanning milli- to kilo-range, where derived values stay well
/// inside f64 precision.
pub fn magnitude() -> impl Strategy<Value = f64> {
    1e-3_f64..1e3_f64
}

pub fn known_pair() -> impl Strategy<Value = KnownPair> {
    prop::sample::select(KnownPair::PRIORITY.to_vec())
}

/// A pair together with the two known values for it.
pub fn pair_inputs() -> impl Strategy<Value = (KnownPair, KnownValues)> {
    (known_pair(), magnitude(), magnitude()).prop_map(|(pair, a, b)| {
        let [first, second] = pair.known();
        (pair, KnownValues::new().with(first, a).with(second, b))
    })
}

/// Values that can never be accepted as a quantity.
pub fn invalid_magnitude() -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(0.0),
        Just(-0.0),
        -1e6_f64..0.0,
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
    ]
}
