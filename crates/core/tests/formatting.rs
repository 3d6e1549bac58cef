use ohm_solve_core::format::*;
use ohm_solve_core::units::Quantity;

#[test]
fn test_millions() {
    assert_eq!(format_quantity(Some(1_500_000.0)), "1.50M");
    assert_eq!(format_quantity(Some(1e6)), "1.00M");
}

#[test]
fn test_thousands() {
    assert_eq!(format_quantity(Some(2500.0)), "2.50k");
    assert_eq!(format_quantity(Some(999_999.0)), "1000.00k");
}

#[test]
fn test_small_values_use_scientific_notation() {
    assert_eq!(format_quantity(Some(0.0005)), "5.00e-4");
    assert_eq!(format_quantity(Some(1.234e-7)), "1.23e-7");
}

#[test]
fn test_fixed_three_decimals() {
    assert_eq!(format_quantity(Some(3.14159)), "3.142");
    assert_eq!(format_quantity(Some(0.001)), "0.001");
    assert_eq!(format_quantity(Some(600.0)), "600.000");
}

#[test]
fn test_absent_is_empty() {
    assert_eq!(format_quantity(None), "");
}

#[test]
fn test_with_unit() {
    assert_eq!(format_with_unit(Quantity::Resistance, 4700.0), "4.70k Ω");
    assert_eq!(format_with_unit(Quantity::Current, 0.02), "0.020 A");
}
