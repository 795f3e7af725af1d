use thiserror::Error;

#[derive(Error, Debug)]
pub enum CpfError {
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Invalid base: {message}")]
    InvalidBase { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration validation error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl CpfError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            CpfError::InvalidInput { .. } | CpfError::InvalidBase { .. } => {
                format!("Could not compute check digits: {}", self)
            }
            CpfError::IoError(e) => format!("Could not read file: {}", e),
            CpfError::SerializationError(e) => format!("Could not render output: {}", e),
            CpfError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            CpfError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid value for '{}': {}", value, field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CpfError::InvalidInput { .. } => "Pass only the digits 0-9",
            CpfError::InvalidBase { .. } => {
                "Pass exactly 9 digits that are not all the same digit"
            }
            CpfError::IoError(_) => "Check that the file exists and is readable",
            CpfError::SerializationError(_) => "Retry with --output text",
            CpfError::ConfigValidationError { .. } => {
                "Check the TOML syntax of the configuration file"
            }
            CpfError::InvalidConfigValueError { .. } => {
                "Fix the value in the configuration file or override it on the command line"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CpfError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message() {
        let err = CpfError::InvalidInput {
            message: "'x' at position 3 is not a decimal digit".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid input: 'x' at position 3 is not a decimal digit"
        );
        assert_eq!(err.recovery_suggestion(), "Pass only the digits 0-9");
    }

    #[test]
    fn test_config_value_error_is_user_friendly() {
        let err = CpfError::InvalidConfigValueError {
            field: "generate.count".to_string(),
            value: "0".to_string(),
            reason: "Value must be between 1 and 10000".to_string(),
        };
        let message = err.user_friendly_message();
        assert!(message.contains("generate.count"));
        assert!(message.contains("between 1 and 10000"));
    }

    #[test]
    fn test_toml_parse_error_points_at_syntax() {
        let err = CpfError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: "TOML parsing error: expected `]`".to_string(),
        };
        assert_eq!(
            err.recovery_suggestion(),
            "Check the TOML syntax of the configuration file"
        );
        assert!(err.user_friendly_message().contains("toml_parsing"));
    }
}
