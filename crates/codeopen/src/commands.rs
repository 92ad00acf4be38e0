use std::ffi::OsString;

use clap::ArgMatches;
use tracing::{error, info, warn};

use codeopen_core::config::{CodeOpenConfig, Config};
use codeopen_core::events;
use codeopen_core::opener_ops;
use codeopen_core::{AppleScriptAutomation, OpenRequest, ReuseCheck, VSCodeBackend};

/// Load configuration with warning on errors.
///
/// Falls back to defaults if config loading fails, but notifies the user via:
/// - stderr message for immediate visibility
/// - structured log event `cli.config.load_failed` for debugging
fn load_config_with_warning() -> CodeOpenConfig {
    match CodeOpenConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.codeopen/config.toml and ./.codeopen/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            CodeOpenConfig::default()
        }
    }
}

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    let config = load_config_with_warning().with_runtime_overrides(&Config::new());
    let editor = VSCodeBackend::from_config(&config.editor);
    let automation = AppleScriptAutomation::new();

    if matches.get_flag("check") {
        handle_check_command(matches, &config, &editor, &automation)
    } else {
        handle_open_command(matches, &config, &editor, &automation)
    }
}

fn handle_open_command(
    matches: &ArgMatches,
    config: &CodeOpenConfig,
    editor: &VSCodeBackend,
    automation: &AppleScriptAutomation,
) -> Result<(), Box<dyn std::error::Error>> {
    let files: Vec<OsString> = matches
        .get_many::<OsString>("files")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    let request = match OpenRequest::new(files) {
        Ok(request) => request,
        Err(e) => {
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    info!(
        event = "cli.open_started",
        file_count = request.files().len()
    );

    let result = opener_ops::open_files(&request, editor, automation, config);

    if result.launched {
        info!(
            event = "cli.open_completed",
            mode = %result.mode,
            reason = %result.reason
        );
    } else {
        // Launcher failures do not change the exit code
        eprintln!(
            "Failed to launch '{}' ({}). See logs for details.",
            editor.command(),
            result.mode
        );
        error!(
            event = "cli.open_failed",
            mode = %result.mode,
            reason = %result.reason
        );
    }

    Ok(())
}

fn handle_check_command(
    matches: &ArgMatches,
    config: &CodeOpenConfig,
    editor: &VSCodeBackend,
    automation: &AppleScriptAutomation,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    info!(event = "cli.check_started", json_output = json_output);

    let check = opener_ops::check_reusable(editor, automation, config);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&check)?);
    } else {
        println!("{}", format_check(&check));
    }

    info!(
        event = "cli.check_completed",
        running = check.running,
        reusable = check.reusable
    );

    Ok(())
}

fn format_check(check: &ReuseCheck) -> String {
    if !check.running {
        return "Editor not running: files would open in a new window.".to_string();
    }

    match (check.reusable, check.window_title.as_deref()) {
        (true, Some(title)) => format!("Reusable window: {}", title),
        (true, None) => "Reusable window: (untitled)".to_string(),
        (false, _) => "No reusable window: files would open in a new window.".to_string(),
    }
}
