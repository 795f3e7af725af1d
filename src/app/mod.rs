// Application layer: turns parsed commands into reports for the binary to print.

pub mod report;

pub use report::{FormatReport, GenerateReport, Report, ValidationReport};

use crate::config::Settings;
use crate::core::generator::Generator;

/// Generates `settings.count` identifiers, seeded when `settings.seed` is set.
pub fn run_generate(settings: &Settings) -> GenerateReport {
    let cpfs = match settings.seed {
        Some(seed) => {
            tracing::info!(seed, count = settings.count, "Generating seeded identifiers");
            Generator::seeded(seed).generate_many(settings.count, settings.form)
        }
        None => {
            tracing::info!(count = settings.count, "Generating identifiers");
            Generator::from_entropy().generate_many(settings.count, settings.form)
        }
    };
    GenerateReport { cpfs }
}

pub fn run_validate(input: &str) -> ValidationReport {
    tracing::info!("Validating input of {} characters", input.chars().count());
    ValidationReport::for_input(input)
}

#[cfg(feature = "cli")]
pub fn execute(command: &crate::config::Command, settings: &Settings) -> Report {
    use crate::config::Command;

    match command {
        Command::Generate { .. } => Report::Generate(run_generate(settings)),
        Command::Validate { cpf } => Report::Validation(run_validate(cpf)),
        Command::Format { cpf } => Report::Format(FormatReport::punctuated(cpf)),
        Command::Unformat { cpf } => Report::Format(FormatReport::raw(cpf)),
    }
}
