use crate::core::{Calculation, Operation};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "math-ops")]
#[command(about = "Add or subtract two integers")]
#[command(allow_negative_numbers = true)]
pub struct CliConfig {
    /// Operation: add, plus, +, subtract, sub, minus, -
    pub op: Operation,

    /// Left operand
    pub a: i64,

    /// Right operand
    pub b: i64,

    /// Fail unless the result equals this value
    #[arg(long)]
    pub expect: Option<i64>,

    #[arg(long, help = "Print the outcome as JSON")]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn calculation(&self) -> Calculation {
        let calculation = Calculation::new(self.op, self.a, self.b);
        match self.expect {
            Some(expected) => calculation.expecting(expected),
            None => calculation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positional_negative_operands() {
        let config = CliConfig::try_parse_from(["math-ops", "sub", "-5", "-3"]).unwrap();
        assert_eq!(config.op, Operation::Subtract);
        assert_eq!(config.a, -5);
        assert_eq!(config.b, -3);
        assert_eq!(config.calculation().evaluate().result, -2);
    }

    #[test]
    fn test_parse_flags() {
        let config =
            CliConfig::try_parse_from(["math-ops", "--json", "-v", "add", "2", "3", "--expect", "5"])
                .unwrap();
        assert!(config.json);
        assert!(config.verbose);
        assert!(config.calculation().evaluate().passed);
    }

    #[test]
    fn test_parse_rejects_unknown_operation() {
        assert!(CliConfig::try_parse_from(["math-ops", "times", "2", "3"]).is_err());
    }
}
