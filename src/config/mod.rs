#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};

use crate::domain::model::CanonicalForm;
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, Validate};
use serde::{Deserialize, Serialize};

/// Upper bound on identifiers produced by one `generate` call.
pub const MAX_COUNT: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 2] = ["text", "json"];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Effective settings after merging command-line flags, the config file and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub form: CanonicalForm,
    pub count: usize,
    pub seed: Option<u64>,
    pub output: OutputFormat,
    pub verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            form: CanonicalForm::Punctuated,
            count: 1,
            seed: None,
            output: OutputFormat::Text,
            verbose: false,
        }
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_range("generate.count", self.count, 1, MAX_COUNT)
    }
}
