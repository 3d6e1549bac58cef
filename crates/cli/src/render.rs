use ohm_solve_core::format::format_with_unit;
use ohm_solve_core::report::Report;

pub fn lines(items: impl IntoIterator<Item = String>) -> String {
    items.into_iter().collect::<Vec<_>>().join("\n")
}

pub fn report(report: &Report) -> String {
    let values = report.values.iter().map(|value| {
        format!(
            "{:<11} {}",
            format!("{}:", value.quantity),
            format_with_unit(value.quantity, value.value)
        )
    });

    let pair = report.solution.derived_from;
    let formulas = format!("\nFormulas applied: {}", pair.formulas().join(", "));

    let analysis = [
        report.current_band.map(|band| format!("Current: {band}")),
        report.wire_gauge.map(|gauge| format!("Recommended wire: {gauge}")),
        report.power_band.map(|band| format!("Power: {band}")),
    ];
    let warnings = report
        .advisories
        .iter()
        .map(|advisory| format!("Warning: {advisory}"));

    lines(
        values
            .chain(std::iter::once(formulas))
            .chain(analysis.into_iter().flatten())
            .chain(warnings),
    )
}
