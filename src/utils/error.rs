use thiserror::Error;

#[derive(Error, Debug)]
pub enum MathError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Validation error in '{field}': {message}")]
    ValidationError { field: String, message: String },

    #[error("Unknown operation: '{input}'")]
    UnknownOperation { input: String },

    #[error("Result of {expression} does not fit in a 64-bit integer")]
    Overflow { expression: String },
}

impl MathError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            MathError::IoError(e) => format!("Could not read or write a file: {}", e),
            MathError::SerializationError(e) => format!("Could not render output: {}", e),
            MathError::ConfigError { message } => {
                format!("The calculation file is not valid TOML: {}", message)
            }
            MathError::ValidationError { field, message } => {
                format!("Invalid value for '{}': {}", field, message)
            }
            MathError::UnknownOperation { input } => {
                format!("'{}' is not a supported operation", input)
            }
            MathError::Overflow { expression } => {
                format!("{} is out of range for 64-bit integers", expression)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            MathError::IoError(_) => "Check that the path exists and is readable",
            MathError::SerializationError(_) => "Retry without --json",
            MathError::ConfigError { .. } => {
                "Check the file against the [suite] / [[calculations]] layout"
            }
            MathError::ValidationError { .. } => "Fix the reported field and run again",
            MathError::UnknownOperation { .. } => {
                "Use one of: add, plus, +, subtract, sub, minus, -"
            }
            MathError::Overflow { .. } => "Use operands whose result stays within i64 range",
        }
    }
}

pub type Result<T> = std::result::Result<T, MathError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_operation_message() {
        let err = MathError::UnknownOperation {
            input: "mul".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown operation: 'mul'");
        assert!(err.user_friendly_message().contains("mul"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: MathError = io.into();
        assert!(matches!(err, MathError::IoError(_)));
    }
}
