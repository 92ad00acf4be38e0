use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

/// Initialize logging with optional verbose mode.
///
/// Logs are JSON lines on stderr so stdout stays clean for callers.
/// When `verbose` is true, debug-level events are emitted; otherwise the level
/// comes from `CODEOPEN_LOG_LEVEL`, defaulting to info.
pub fn init_logging(verbose: bool) {
    let runtime = Config::new();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(
            EnvFilter::from_default_env().add_directive(
                default_directive(verbose, &runtime.log_level)
                    .parse()
                    .expect("Invalid log directive"),
            ),
        )
        .init();
}

fn default_directive(verbose: bool, log_level: &str) -> String {
    if verbose {
        return "codeopen=debug".to_string();
    }

    match log_level.trim().to_ascii_lowercase().as_str() {
        level @ ("trace" | "debug" | "info" | "warn" | "error" | "off") => {
            format!("codeopen={}", level)
        }
        _ => "codeopen=info".to_string(),
    }
}
