use std::io::IsTerminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log targets of the library and of each binary in this package.
const TARGETS: [&str; 2] = ["math_ops", "toml_calc"];

/// Filter used when `RUST_LOG` is unset. Verbose mode also lets other
/// crates through at `info`.
pub fn default_directives(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    let mut directives: Vec<String> =
        TARGETS.iter().map(|t| format!("{}={}", t, level)).collect();
    if verbose {
        directives.push("info".to_string());
    }
    directives.join(",")
}

fn json_directives() -> String {
    TARGETS
        .iter()
        .map(|t| format!("{}=warn", t))
        .collect::<Vec<_>>()
        .join(",")
}

/// Compact log lines on stderr, so stdout only carries results.
pub fn init_cli_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
                .without_time()
                .compact(),
        )
        .init();
}

/// JSON log lines on stderr; stdout carries the `--json` payload.
pub fn init_json_logger() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(json_directives()));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .json(),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_cover_binaries() {
        assert_eq!(default_directives(false), "math_ops=info,toml_calc=info");
        assert_eq!(default_directives(true), "math_ops=debug,toml_calc=debug,info");
        assert_eq!(json_directives(), "math_ops=warn,toml_calc=warn");
    }

    #[test]
    fn test_directives_parse() {
        assert!(EnvFilter::try_new(default_directives(false)).is_ok());
        assert!(EnvFilter::try_new(default_directives(true)).is_ok());
        assert!(EnvFilter::try_new(json_directives()).is_ok());
    }
}
