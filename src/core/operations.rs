use crate::utils::error::MathError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Returns `a + b`.
pub const fn add(a: i64, b: i64) -> i64 {
    a + b
}

/// Returns `a - b`.
pub const fn subtract(a: i64, b: i64) -> i64 {
    a - b
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Operation {
    Add,
    Subtract,
}

impl Operation {
    pub fn apply(self, a: i64, b: i64) -> i64 {
        match self {
            Operation::Add => add(a, b),
            Operation::Subtract => subtract(a, b),
        }
    }

    /// `None` when the result does not fit in an `i64`.
    pub fn checked_apply(self, a: i64, b: i64) -> Option<i64> {
        match self {
            Operation::Add => a.checked_add(b),
            Operation::Subtract => a.checked_sub(b),
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" | "plus" | "+" => Ok(Operation::Add),
            "subtract" | "sub" | "minus" | "-" => Ok(Operation::Subtract),
            _ => Err(MathError::UnknownOperation {
                input: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Operation {
    type Error = MathError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
