use anyhow::Context;
use clap::Parser;
use math_ops::config::toml_config::CalculationFile;
use math_ops::utils::{logger, validation::Validate};
use math_ops::EvaluationReport;

#[derive(Parser)]
#[command(name = "toml-calc")]
#[command(about = "Evaluate a TOML file of add/subtract calculations")]
struct Args {
    /// Path to TOML calculation file
    #[arg(short, long, default_value = "calculations.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Validate and list the calculations without evaluating them
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("Loading calculations from: {}", args.config);

    let file = match CalculationFile::from_file(&args.config) {
        Ok(file) => file,
        Err(e) => {
            tracing::error!("Failed to load '{}': {}", args.config, e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if let Err(e) = file.validate() {
        tracing::error!("Validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    tracing::info!(
        "Suite '{}' with {} calculations",
        file.suite.name,
        file.calculations.len()
    );
    if let Some(description) = &file.suite.description {
        tracing::debug!("Description: {}", description);
    }

    if args.dry_run {
        for calculation in &file.calculations {
            println!("{}", calculation.expression());
        }
        return Ok(());
    }

    let report = file.into_evaluator().run();

    if args.json {
        let rendered = report.to_json_pretty().context("failed to render report")?;
        println!("{}", rendered);
    } else {
        print_report(&report);
    }

    if !report.all_passed() {
        std::process::exit(2);
    }

    Ok(())
}

fn print_report(report: &EvaluationReport) {
    for outcome in &report.outcomes {
        let mark = if outcome.passed { "✅" } else { "❌" };
        match outcome.calculation.expected {
            Some(expected) if !outcome.passed => println!(
                "{} {}: {} = {} (expected {})",
                mark,
                outcome.label(),
                outcome.calculation.expression(),
                outcome.result,
                expected
            ),
            _ => println!(
                "{} {}: {} = {}",
                mark,
                outcome.label(),
                outcome.calculation.expression(),
                outcome.result
            ),
        }
    }
    println!(
        "📊 {} total, {} passed, {} failed",
        report.total, report.passed, report.failed
    );
}
