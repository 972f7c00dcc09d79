use crate::core::operations::Operation;
use crate::utils::error::{MathError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calculation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub op: Operation,
    pub a: i64,
    pub b: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected: Option<i64>,
}

impl Calculation {
    pub fn new(op: Operation, a: i64, b: i64) -> Self {
        Self {
            name: None,
            op,
            a,
            b,
            expected: None,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn expecting(mut self, expected: i64) -> Self {
        self.expected = Some(expected);
        self
    }

    /// `"a <symbol> b"`, with negative operands parenthesised on the right.
    pub fn expression(&self) -> String {
        if self.b < 0 {
            format!("{} {} ({})", self.a, self.op.symbol(), self.b)
        } else {
            format!("{} {} {}", self.a, self.op.symbol(), self.b)
        }
    }

    /// Rejects operands whose result would overflow `i64`.
    pub fn check_range(&self) -> Result<()> {
        match self.op.checked_apply(self.a, self.b) {
            Some(_) => Ok(()),
            None => Err(MathError::Overflow {
                expression: self.expression(),
            }),
        }
    }

    pub fn evaluate(&self) -> CalculationOutcome {
        let result = self.op.apply(self.a, self.b);
        let passed = self.expected.map_or(true, |expected| expected == result);
        CalculationOutcome {
            calculation: self.clone(),
            result,
            passed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationOutcome {
    #[serde(flatten)]
    pub calculation: Calculation,
    pub result: i64,
    pub passed: bool,
}

impl CalculationOutcome {
    pub fn label(&self) -> String {
        match &self.calculation.name {
            Some(name) => name.clone(),
            None => self.calculation.expression(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub outcomes: Vec<CalculationOutcome>,
}

impl EvaluationReport {
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &CalculationOutcome> {
        self.outcomes.iter().filter(|o| !o.passed)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[derive(Debug, Clone)]
pub struct Evaluator {
    calculations: Vec<Calculation>,
}

impl Evaluator {
    pub fn new(calculations: Vec<Calculation>) -> Self {
        Self { calculations }
    }

    pub fn run(&self) -> EvaluationReport {
        let mut report = EvaluationReport::default();

        for calculation in &self.calculations {
            let outcome = calculation.evaluate();
            if outcome.passed {
                tracing::debug!(
                    "{} = {} ({})",
                    calculation.expression(),
                    outcome.result,
                    outcome.label()
                );
                report.passed += 1;
            } else {
                tracing::warn!(
                    "{}: {} = {}, expected {:?}",
                    outcome.label(),
                    calculation.expression(),
                    outcome.result,
                    calculation.expected
                );
                report.failed += 1;
            }
            report.outcomes.push(outcome);
        }

        report.total = report.outcomes.len();
        tracing::info!(
            "Evaluated {} calculations: {} passed, {} failed",
            report.total,
            report.passed,
            report.failed
        );
        report
    }
}
