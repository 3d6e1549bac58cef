use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command};
use ohm_solve_core::classify::{CurrentBand, PowerBand, WireGauge};
use ohm_solve_core::errors::{InvalidReason, SolveError};
use ohm_solve_core::input::{parse_field, FieldInputs};
use ohm_solve_core::report::Report;
use ohm_solve_core::solver::solve;
use ohm_solve_core::units::Quantity;
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod render;

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Solve(#[from] SolveError),
    #[error("Failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}

fn command() -> Command {
    let field = |quantity: Quantity, short: char| {
        Arg::new(quantity.name())
            .long(quantity.name())
            .short(short)
            .value_name("VALUE")
            .help(format!(
                "Known {} ({}) in {}",
                quantity.name(),
                quantity.symbol(),
                quantity.unit()
            ))
    };

    Command::new("ohm-solve")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Ohm's law calculator: enter any two values to calculate the others")
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .env("OHM_SOLVE_LOG")
                .default_value("warn")
                .global(true)
                .help("Log filter used when RUST_LOG is unset"),
        )
        .subcommand_required(true)
        .subcommand(
            Command::new("solve")
                .about("Solve for the missing quantities")
                .arg(field(Quantity::Voltage, 'v'))
                .arg(field(Quantity::Current, 'i'))
                .arg(field(Quantity::Resistance, 'r'))
                .arg(field(Quantity::Power, 'p'))
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print the report as JSON"),
                ),
        )
        .subcommand(
            Command::new("gauge")
                .about("Recommend a wire gauge for a current")
                .arg(Arg::new("amps").required(true).help("Current in A")),
        )
        .subcommand(
            Command::new("classify-power")
                .about("Classify a power level")
                .arg(Arg::new("watts").required(true).help("Power in W")),
        )
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn text<'a>(matches: &'a ArgMatches, id: &str) -> &'a str {
    matches.get_one::<String>(id).map(String::as_str).unwrap_or_default()
}

fn run_solve(matches: &ArgMatches) -> Result<String, CliError> {
    let fields = FieldInputs {
        voltage: text(matches, "voltage").to_string(),
        current: text(matches, "current").to_string(),
        resistance: text(matches, "resistance").to_string(),
        power: text(matches, "power").to_string(),
    };
    let known = fields.to_known()?;
    debug!(supplied = known.count(), "parsed fields");
    let report = Report::new(&solve(&known)?);

    if matches.get_flag("json") {
        Ok(serde_json::to_string_pretty(&report)?)
    } else {
        Ok(render::report(&report))
    }
}

/// Parses a single-value argument, where a blank field is invalid rather
/// than unknown.
fn required_value(quantity: Quantity, text: &str) -> Result<f64, SolveError> {
    parse_field(quantity, text)?.ok_or_else(|| {
        SolveError::invalid(quantity, InvalidReason::Unparseable(text.to_string()))
    })
}

fn run_gauge(matches: &ArgMatches) -> Result<String, CliError> {
    let amps = required_value(Quantity::Current, text(matches, "amps"))?;
    let band = CurrentBand::classify(amps).map(|b| b.to_string());
    let gauge = WireGauge::recommend(amps).map(|g| g.to_string());
    Ok(render::lines([band, gauge].into_iter().flatten()))
}

fn run_classify_power(matches: &ArgMatches) -> Result<String, CliError> {
    let watts = required_value(Quantity::Power, text(matches, "watts"))?;
    Ok(PowerBand::classify(watts).map(|b| b.to_string()).unwrap_or_default())
}

fn dispatch(matches: &ArgMatches) -> Result<String, CliError> {
    match matches.subcommand() {
        Some(("solve", sub)) => run_solve(sub),
        Some(("gauge", sub)) => run_gauge(sub),
        Some(("classify-power", sub)) => run_classify_power(sub),
        _ => unreachable!("subcommand_required is set"),
    }
}

fn main() -> ExitCode {
    let matches = command().get_matches();
    init_tracing(text(&matches, "log-level"));

    match dispatch(&matches) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            debug!(?err, "calculation failed");
            eprintln!("{err}");
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> Result<String, CliError> {
        dispatch(&command().try_get_matches_from(args).unwrap())
    }

    #[test]
    fn command_is_well_formed() {
        command().debug_assert();
    }

    #[test]
    fn solve_prints_derived_values() {
        let out = run(&["ohm-solve", "solve", "-v", "12", "-i", "0.02"]).unwrap();
        assert!(out.contains("600.000 Ω"), "{out}");
        assert!(out.contains("0.240 W"), "{out}");
    }

    #[test]
    fn solve_json_has_solution() {
        let out = run(&["ohm-solve", "solve", "--resistance", "15", "--power", "3840", "--json"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["solution"]["derived_from"], "resistance_power");
        assert_eq!(value["current_band"], "commercial");
    }

    #[test]
    fn solve_with_one_field_fails() {
        let err = run(&["ohm-solve", "solve", "-v", "12"]).unwrap_err();
        assert_eq!(err.to_string(), "Please enter at least 2 values to calculate the others.");
    }

    #[test]
    fn blank_single_value_is_invalid() {
        for args in [["ohm-solve", "gauge", ""], ["ohm-solve", "classify-power", "."]] {
            let err = run(&args).unwrap_err();
            assert!(
                matches!(err, CliError::Solve(SolveError::InvalidValue { .. })),
                "{err:?}"
            );
            assert_eq!(
                err.to_string(),
                "All values must be positive numbers greater than zero."
            );
        }
    }

    #[test]
    fn help_names_symbol_and_unit() {
        let mut solve = command().find_subcommand("solve").unwrap().clone();
        let help = solve.render_help().to_string();
        assert!(help.contains("Known current (I) in A"), "{help}");
        assert!(help.contains("Known resistance (R) in Ω"), "{help}");
    }

    #[test]
    fn gauge_beyond_table() {
        let out = run(&["ohm-solve", "gauge", "600"]).unwrap();
        assert!(out.contains("600A - Consult electrical engineer"), "{out}");
    }
}
