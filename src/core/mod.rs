pub mod evaluator;
pub mod operations;

pub use evaluator::{Calculation, CalculationOutcome, EvaluationReport, Evaluator};
pub use operations::{add, subtract, Operation};
