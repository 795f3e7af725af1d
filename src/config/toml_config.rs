use crate::config::OutputFormat;
use crate::utils::error::{CpfError, Result};
use crate::utils::validation::{validate_one_of, validate_range, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TomlConfig {
    pub generate: Option<GenerateConfig>,
    pub output: Option<OutputConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerateConfig {
    pub formatted: Option<bool>,
    pub count: Option<usize>,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CpfError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration from a TOML string, expanding `${VAR}` references first.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| CpfError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    // Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn formatted(&self) -> Option<bool> {
        self.generate.as_ref().and_then(|g| g.formatted)
    }

    pub fn count(&self) -> Option<usize> {
        self.generate.as_ref().and_then(|g| g.count)
    }

    pub fn seed(&self) -> Option<u64> {
        self.generate.as_ref().and_then(|g| g.seed)
    }

    /// Output format named in the file. Call after [`Validate::validate`].
    pub fn output_format(&self) -> Option<OutputFormat> {
        self.output
            .as_ref()
            .and_then(|o| o.format.as_deref())
            .and_then(OutputFormat::from_name)
    }

    pub fn verbose(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.verbose)
            .unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(count) = self.count() {
            validate_range("generate.count", count, 1, crate::config::MAX_COUNT)?;
        }

        if let Some(format) = self.output.as_ref().and_then(|o| o.format.as_deref()) {
            validate_one_of("output.format", format, &OutputFormat::NAMES)?;
        }

        tracing::debug!("configuration file validation passed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[generate]
formatted = false
count = 25
seed = 42

[output]
format = "json"

[logging]
verbose = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.formatted(), Some(false));
        assert_eq!(config.count(), Some(25));
        assert_eq!(config.seed(), Some(42));
        assert_eq!(config.output_format(), Some(OutputFormat::Json));
        assert!(config.verbose());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config, TomlConfig::default());
        assert_eq!(config.formatted(), None);
        assert_eq!(config.output_format(), None);
        assert!(!config.verbose());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("CPF_TOOL_TEST_OUTPUT_FORMAT", "json");

        let toml_content = r#"
[output]
format = "${CPF_TOOL_TEST_OUTPUT_FORMAT}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.output_format(), Some(OutputFormat::Json));

        std::env::remove_var("CPF_TOOL_TEST_OUTPUT_FORMAT");
    }

    #[test]
    fn test_unset_env_var_is_kept_and_rejected() {
        let toml_content = r#"
[output]
format = "${CPF_TOOL_TEST_UNSET_VARIABLE}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str("[generate]\ncount = 0\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(CpfError::InvalidConfigValueError { .. })
        ));

        let config = TomlConfig::from_toml_str("[output]\nformat = \"xml\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml() {
        let err = TomlConfig::from_toml_str("[generate\ncount = 1").unwrap_err();
        assert!(matches!(err, CpfError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[generate]\nformatted = true\ncount = 3\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.formatted(), Some(true));
        assert_eq!(config.count(), Some(3));
    }

    #[test]
    fn test_missing_file() {
        let err = TomlConfig::from_file("/definitely/not/here/cpf.toml").unwrap_err();
        assert!(matches!(err, CpfError::IoError(_)));
    }
}
