use crate::core::ledger::DEFAULT_PLACEHOLDER_NAME;
use crate::core::{ConfigProvider, GradeEntry, GradeTable};
use crate::utils::error::{LedgerError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_non_negative, validate_range, validate_unique_labels,
    Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_PRECISION: usize = 2;
pub const MAX_PRECISION: usize = 4;
pub const MAX_GRADE_POINTS: f64 = 100.0;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub ledger: LedgerSection,
    pub grades: Option<Vec<GradeEntry>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LedgerSection {
    pub placeholder_name: Option<String>,
    pub precision: Option<usize>,
}

impl TomlConfig {
    /// Reads and parses a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(LedgerError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` references with environment values.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").map_err(|e| {
            LedgerError::ConfigError {
                message: format!("Regex error: {}", e),
            }
        })?;

        let mut result = String::with_capacity(content.len());
        let mut last = 0;
        for caps in re.captures_iter(content) {
            let whole = caps.get(0).map(|m| m.range()).unwrap_or(0..0);
            let var_name = &caps[1];
            let value = std::env::var(var_name).map_err(|_| LedgerError::ConfigError {
                message: format!("Environment variable '{}' is not set", var_name),
            })?;
            result.push_str(&content[last..whole.start]);
            result.push_str(&value);
            last = whole.end;
        }
        result.push_str(&content[last..]);
        Ok(result)
    }

    /// CLI override for display precision.
    pub fn with_precision(mut self, precision: Option<usize>) -> Self {
        if precision.is_some() {
            self.ledger.precision = precision;
        }
        self
    }

    fn validate_config(&self) -> Result<()> {
        if let Some(placeholder) = &self.ledger.placeholder_name {
            validate_non_empty_string("ledger.placeholder_name", placeholder)?;
        }

        validate_range("ledger.precision", self.precision(), 0, MAX_PRECISION)?;

        if let Some(grades) = &self.grades {
            if grades.is_empty() {
                return Err(LedgerError::InvalidConfigValueError {
                    field: "grades".to_string(),
                    value: "[]".to_string(),
                    reason: "Grade table cannot be empty".to_string(),
                });
            }
            for entry in grades {
                validate_non_empty_string("grades.label", &entry.label)?;
                let field = format!("grades.{}.points", entry.label);
                validate_non_negative(&field, entry.points)?;
                validate_range(&field, entry.points, 0.0, MAX_GRADE_POINTS)?;
            }
            validate_unique_labels("grades.label", grades.iter().map(|g| g.label.as_str()))?;
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn grade_table(&self) -> GradeTable {
        match &self.grades {
            Some(grades) => GradeTable::new(
                grades
                    .iter()
                    .map(|g| GradeEntry::new(g.label.trim(), g.points))
                    .collect(),
            ),
            None => GradeTable::standard(),
        }
    }

    fn placeholder_name(&self) -> &str {
        self.ledger
            .placeholder_name
            .as_deref()
            .unwrap_or(DEFAULT_PLACEHOLDER_NAME)
    }

    fn precision(&self) -> usize {
        self.ledger.precision.unwrap_or(DEFAULT_PRECISION)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.placeholder_name(), "N/A");
        assert_eq!(config.precision(), 2);
        assert_eq!(config.grade_table(), GradeTable::standard());
    }

    #[test]
    fn test_parse_custom_grade_table() {
        let toml_content = r#"
[ledger]
placeholder_name = "Unnamed"
precision = 3

[[grades]]
label = "H"
points = 4.0

[[grades]]
label = "P"
points = 2.0
"#;
        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.placeholder_name(), "Unnamed");
        assert_eq!(config.precision(), 3);

        let table = config.grade_table();
        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup("p").unwrap().points, 2.0);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("GPA_LEDGER_TEST_PLACEHOLDER", "TBD");

        let toml_content = r#"
[ledger]
placeholder_name = "${GPA_LEDGER_TEST_PLACEHOLDER}"
"#;
        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.placeholder_name(), "TBD");

        std::env::remove_var("GPA_LEDGER_TEST_PLACEHOLDER");
    }

    #[test]
    fn test_unset_env_var_is_config_error() {
        let toml_content = r#"
[ledger]
placeholder_name = "${GPA_LEDGER_TEST_DEFINITELY_UNSET}"
"#;
        let err = TomlConfig::from_toml_str(toml_content).unwrap_err();
        assert!(matches!(err, LedgerError::ConfigError { .. }));
    }

    #[test]
    fn test_config_validation() {
        let duplicate = r#"
[[grades]]
label = "A"
points = 4.0

[[grades]]
label = "a"
points = 3.0
"#;
        assert!(TomlConfig::from_toml_str(duplicate).unwrap().validate().is_err());

        let negative = r#"
[[grades]]
label = "A"
points = -1.0
"#;
        assert!(TomlConfig::from_toml_str(negative).unwrap().validate().is_err());

        let huge = r#"
[[grades]]
label = "A"
points = 1e300
"#;
        assert!(TomlConfig::from_toml_str(huge).unwrap().validate().is_err());

        let precision = "[ledger]\nprecision = 7\n";
        assert!(TomlConfig::from_toml_str(precision).unwrap().validate().is_err());

        let empty_table = "grades = []\n";
        assert!(TomlConfig::from_toml_str(empty_table).unwrap().validate().is_err());
    }

    #[test]
    fn test_precision_override() {
        let config = TomlConfig::default().with_precision(Some(1));
        assert_eq!(config.precision(), 1);
        let config = config.with_precision(None);
        assert_eq!(config.precision(), 1);
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[ledger]\nplaceholder_name = \"Elective\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.placeholder_name(), "Elective");
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let err = TomlConfig::from_toml_str("[ledger\n").unwrap_err();
        assert!(matches!(err, LedgerError::TomlError(_)));
    }
}
