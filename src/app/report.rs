use crate::config::OutputFormat;
use crate::core::format::{format_input, strip_non_digits};
use crate::core::validator::check;
use crate::utils::error::Result;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateReport {
    pub cpfs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub input: String,
    /// Punctuated when the input holds exactly 11 digits, otherwise the input as given.
    pub display: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormatReport {
    pub input: String,
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Report {
    Generate(GenerateReport),
    Validation(ValidationReport),
    Format(FormatReport),
}

impl ValidationReport {
    pub fn for_input(input: &str) -> Self {
        let outcome = check(input);
        Self {
            input: input.to_string(),
            display: format_input(input).unwrap_or_else(|| input.to_string()),
            valid: outcome.is_ok(),
            reason: outcome.err().map(|rejection| rejection.to_string()),
        }
    }
}

impl FormatReport {
    pub fn punctuated(input: &str) -> Self {
        let output = format_input(input);
        let reason = match output {
            Some(_) => None,
            None => Some(format!(
                "expected 11 digits, found {}",
                strip_non_digits(input).len()
            )),
        };
        Self {
            input: input.to_string(),
            output,
            reason,
        }
    }

    pub fn raw(input: &str) -> Self {
        Self {
            input: input.to_string(),
            output: Some(strip_non_digits(input)),
            reason: None,
        }
    }
}

impl Report {
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Text => Ok(self.render_text()),
        }
    }

    fn render_text(&self) -> String {
        match self {
            Report::Generate(report) => report
                .cpfs
                .iter()
                .map(|cpf| format!("Generated CPF: {}", cpf))
                .collect::<Vec<_>>()
                .join("\n"),
            Report::Validation(report) if report.valid => {
                format!("CPF {} is valid.", report.display)
            }
            Report::Validation(report) => match &report.reason {
                Some(reason) => format!("CPF {} is invalid: {}.", report.display, reason),
                None => format!("CPF {} is invalid.", report.display),
            },
            Report::Format(report) => match (&report.output, &report.reason) {
                (Some(output), _) => output.clone(),
                (None, Some(reason)) => format!("Cannot format '{}': {}", report.input, reason),
                (None, None) => format!("Cannot format '{}'", report.input),
            },
        }
    }
}
