use crate::units::Quantity;

/// Formats a value for display: millions and thousands get an `M` or `k`
/// suffix with two decimals, values below one thousandth use scientific
/// notation, everything else three decimals. `None` formats as empty.
pub fn format_quantity(value: Option<f64>) -> String {
    let Some(value) = value else {
        return String::new();
    };
    match value {
        v if v >= 1e6 => format!("{:.2}M", v / 1e6),
        v if v >= 1e3 => format!("{:.2}k", v / 1e3),
        v if v < 1e-3 => format!("{v:.2e}"),
        v => format!("{v:.3}"),
    }
}

pub fn format_with_unit(quantity: Quantity, value: f64) -> String {
    format!("{} {}", format_quantity(Some(value)), quantity.unit())
}
