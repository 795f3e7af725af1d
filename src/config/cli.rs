use crate::config::toml_config::TomlConfig;
use crate::config::{OutputFormat, Settings};
use crate::domain::model::CanonicalForm;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "cpf")]
#[command(about = "Generate and validate Brazilian CPF numbers")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (defaults to the config file, then text)
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Generate valid CPF numbers
    Generate {
        /// Print only the 11 digits, without punctuation
        #[arg(long)]
        raw: bool,

        /// Number of identifiers to generate
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Validate a CPF number, punctuated or not
    Validate {
        cpf: String,
    },

    /// Print a CPF number as DDD.DDD.DDD-DD
    Format {
        cpf: String,
    },

    /// Strip everything but the digits from a CPF number
    Unformat {
        cpf: String,
    },
}

impl CliConfig {
    /// Loads the config file, if one was given, and validates it.
    pub fn load_file_config(&self) -> Result<Option<TomlConfig>> {
        let Some(path) = &self.config else {
            return Ok(None);
        };

        tracing::info!("Loading configuration from: {}", path.display());
        let file_config = TomlConfig::from_file(path)?;
        file_config.validate()?;
        Ok(Some(file_config))
    }

    /// Merges flags over the config file over defaults.
    pub fn resolve(&self, file_config: Option<&TomlConfig>) -> Result<Settings> {
        let defaults = Settings::default();
        let file_config = file_config.cloned().unwrap_or_default();

        let (raw, count, seed) = match &self.command {
            Command::Generate { raw, count, seed } => (*raw, *count, *seed),
            _ => (false, None, None),
        };

        let form = if raw {
            CanonicalForm::Raw
        } else {
            file_config
                .formatted()
                .map(CanonicalForm::from_formatted)
                .unwrap_or(defaults.form)
        };

        let settings = Settings {
            form,
            count: count.or(file_config.count()).unwrap_or(defaults.count),
            seed: seed.or(file_config.seed()),
            output: self
                .output
                .or(file_config.output_format())
                .unwrap_or(defaults.output),
            verbose: self.verbose || file_config.verbose(),
        };

        settings.validate()?;
        tracing::debug!("Resolved settings: {:?}", settings);
        Ok(settings)
    }
}
