pub mod config;
pub mod core;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::CalculationFile;
pub use core::{add, subtract, Calculation, EvaluationReport, Evaluator, Operation};
pub use utils::error::{MathError, Result};
