mod args;

use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use shunt_components::electrical::damped_filter::{
    CapacitorBank, FilterAnalysis, FilterError, FilterReport, FilterStudy,
};
use thiserror::Error;

use args::Cli;

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Filter(#[from] FilterError),
    #[error("failed to encode results as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Everything `--json` prints: the formatted tables plus the raw numbers.
#[derive(Serialize)]
struct JsonOutput<'a> {
    report: FilterReport,
    analysis: &'a FilterAnalysis,
    bank: &'a CapacitorBank,
}

fn run(cli: &Cli) -> Result<String, CliError> {
    let study = FilterStudy::run(
        &cli.circuit_parameters(),
        cli.line_voltage(),
        &cli.cell_arrangement()?,
    )?;

    tracing::info!(
        cells = study.bank.cell_count,
        "filter solved and capacitor bank sized"
    );

    if cli.json {
        let output = JsonOutput {
            report: study.report(),
            analysis: &study.analysis,
            bank: &study.bank,
        };
        Ok(serde_json::to_string_pretty(&output)?)
    } else {
        Ok(format!("{}\n{}", study.summary(), study.report()))
    }
}

/// The single line printed to stderr when a run fails.
fn failure_message(error: &CliError) -> String {
    format!("Error: {error}")
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", failure_message(&e));
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_output_has_summary_then_tables() {
        let output = run(&Cli::parse_from(["shunt"])).unwrap();

        let summary = output.find("================ Filter").unwrap();
        let tables = output.find("=== Impedancia ===").unwrap();
        assert!(summary < tables);
        assert!(output.contains("Tuning frequency: 294.0 Hz"));
    }

    #[test]
    fn json_output_carries_report_and_numbers() {
        let output = run(&Cli::parse_from(["shunt", "--json"])).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["report"]["Potencia"]["Filtro"], "0.02-4.00j MVA");
        assert_eq!(json["bank"]["cell_count"], 12);
        assert!(json["analysis"]["tuning_frequency"].is_number());
    }

    #[test]
    fn invalid_input_is_reported() {
        let err = run(&Cli::parse_from(["shunt", "--capacitance", "0"])).unwrap_err();
        assert!(matches!(
            err,
            CliError::Filter(FilterError::InvalidComponentValue { .. })
        ));
    }

    #[test]
    fn failure_is_one_line() {
        let err = run(&Cli::parse_from(["shunt", "--series", "0"])).unwrap_err();
        let message = failure_message(&err);
        assert_eq!(
            message,
            "Error: invalid capacitor cell series count: value must not be zero"
        );
        assert_eq!(message.lines().count(), 1);
    }
}
