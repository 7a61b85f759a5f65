use thiserror::Error;

/// Input rejected by the ledger. Both kinds are recoverable.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("no grade selected")]
    MissingGrade,

    #[error("credit hours must be a positive number")]
    InvalidCredits,
}

impl ValidationError {
    /// Prompt shown to the person entering the course.
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::MissingGrade => "Please select a grade.",
            ValidationError::InvalidCredits => "Please enter a positive number for credit hours.",
        }
    }
}

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Invalid course input: {0}")]
    Validation(#[from] ValidationError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Import failed at line {line}: {message}")]
    ImportError { line: u64, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Io,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl LedgerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LedgerError::Validation(_) => ErrorCategory::Input,
            LedgerError::TomlError(_)
            | LedgerError::ConfigError { .. }
            | LedgerError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            LedgerError::IoError(_) => ErrorCategory::Io,
            LedgerError::CsvError(_)
            | LedgerError::SerializationError(_)
            | LedgerError::ImportError { .. } => ErrorCategory::Data,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Data => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            LedgerError::Validation(e) => e.user_message().to_string(),
            LedgerError::IoError(e) => format!("Could not access a file: {}", e),
            LedgerError::CsvError(e) => format!("The course file could not be read: {}", e),
            LedgerError::SerializationError(e) => format!("Could not produce the report: {}", e),
            LedgerError::TomlError(e) => format!("The configuration file is not valid TOML: {}", e),
            LedgerError::ConfigError { message } => format!("Configuration problem: {}", message),
            LedgerError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            LedgerError::ImportError { line, message } => {
                format!("Line {} of the course file is malformed: {}", line, message)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            LedgerError::Validation(ValidationError::MissingGrade) => {
                "Pick one of the letters listed by the `grades` command"
            }
            LedgerError::Validation(ValidationError::InvalidCredits) => {
                "Enter credit hours as a number greater than zero and at most 1000000"
            }
            LedgerError::IoError(_) => "Check that the path exists and is readable/writable",
            LedgerError::CsvError(_) | LedgerError::ImportError { .. } => {
                "Make sure the file has a `name,grade,credits` header and three fields per row"
            }
            LedgerError::SerializationError(_) => "Retry with `--format text`",
            LedgerError::TomlError(_)
            | LedgerError::ConfigError { .. }
            | LedgerError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or run without `--config`"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_are_low_severity_input() {
        let err: LedgerError = ValidationError::InvalidCredits.into();
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(
            err.user_friendly_message(),
            "Please enter a positive number for credit hours."
        );
    }

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = LedgerError::InvalidConfigValueError {
            field: "ledger.precision".to_string(),
            value: "9".to_string(),
            reason: "Value must be between 0 and 4".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.user_friendly_message().contains("ledger.precision"));
    }
}
