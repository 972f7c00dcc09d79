use crate::core::{Calculation, Evaluator};
use crate::utils::error::{MathError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_not_empty, validate_unique_names, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationFile {
    pub suite: SuiteConfig,
    #[serde(default)]
    pub calculations: Vec<Calculation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteConfig {
    pub name: String,
    pub description: Option<String>,
}

impl CalculationFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(MathError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| MathError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn into_evaluator(self) -> Evaluator {
        Evaluator::new(self.calculations)
    }
}

impl Validate for CalculationFile {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("suite.name", &self.suite.name)?;
        validate_not_empty("calculations", &self.calculations)?;

        for (index, calculation) in self.calculations.iter().enumerate() {
            if let Some(name) = &calculation.name {
                validate_non_empty_string(&format!("calculations[{}].name", index), name)?;
            }
            calculation.check_range()?;
        }

        validate_unique_names(
            "calculations.name",
            self.calculations.iter().map(|c| c.name.as_deref()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operation;

    const SAMPLE: &str = r#"
[suite]
name = "smoke"
description = "basic checks"

[[calculations]]
name = "two plus three"
op = "add"
a = 2
b = 3
expected = 5

[[calculations]]
op = "sub"
a = 0
b = -10
expected = 10
"#;

    #[test]
    fn test_parse_sample() {
        let file = CalculationFile::from_toml_str(SAMPLE).unwrap();
        assert_eq!(file.suite.name, "smoke");
        assert_eq!(file.suite.description.as_deref(), Some("basic checks"));
        assert_eq!(file.calculations.len(), 2);
        assert_eq!(
            file.calculations[1],
            Calculation::new(Operation::Subtract, 0, -10).expecting(10)
        );
        assert!(file.validate().is_ok());
    }

    #[test]
    fn test_parse_error_is_config_error() {
        let err = CalculationFile::from_toml_str("[suite\nname = 1").unwrap_err();
        assert!(matches!(err, MathError::ConfigError { .. }));
    }

    #[test]
    fn test_unknown_operation_is_rejected() {
        let content = r#"
[suite]
name = "bad"

[[calculations]]
op = "multiply"
a = 1
b = 2
"#;
        assert!(CalculationFile::from_toml_str(content).is_err());
    }

    #[test]
    fn test_validate_requires_calculations() {
        let file = CalculationFile::from_toml_str("[suite]\nname = \"empty\"\n").unwrap();
        let err = file.validate().unwrap_err();
        assert!(matches!(err, MathError::ValidationError { ref field, .. } if field == "calculations"));
    }

    #[test]
    fn test_validate_rejects_duplicate_names() {
        let content = r#"
[suite]
name = "dupes"

[[calculations]]
name = "same"
op = "add"
a = 1
b = 1

[[calculations]]
name = "same"
op = "subtract"
a = 1
b = 1
"#;
        let file = CalculationFile::from_toml_str(content).unwrap();
        assert!(file.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_overflowing_calculation() {
        let content = r#"
[suite]
name = "edges"

[[calculations]]
op = "subtract"
a = 9223372036854775807
b = -1
"#;
        let file = CalculationFile::from_toml_str(content).unwrap();
        let err = file.validate().unwrap_err();
        assert!(matches!(err, MathError::Overflow { .. }));
    }

    #[test]
    fn test_validate_rejects_blank_suite_name() {
        let content = "[suite]\nname = \" \"\n\n[[calculations]]\nop = \"add\"\na = 1\nb = 2\n";
        let file = CalculationFile::from_toml_str(content).unwrap();
        assert!(file.validate().is_err());
    }
}
