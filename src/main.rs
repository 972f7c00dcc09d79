use clap::Parser;
use math_ops::utils::logger;
use math_ops::CliConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    if config.json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    let calculation = config.calculation();
    if let Err(e) = calculation.check_range() {
        tracing::error!("{}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let outcome = calculation.evaluate();

    if config.json {
        println!("{}", outcome.to_json()?);
    } else {
        println!("{} = {}", outcome.calculation.expression(), outcome.result);
    }

    if !outcome.passed {
        tracing::error!(
            "Result {} does not match expected {:?}",
            outcome.result,
            outcome.calculation.expected
        );
        std::process::exit(2);
    }

    Ok(())
}
