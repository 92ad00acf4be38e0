use std::ffi::OsString;

use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};

pub fn build_cli() -> Command {
    Command::new("codeopen")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Open files in VS Code, reusing a window that has no folder open")
        .long_about("codeopen opens files as tabs in an existing file-only VS Code window when one exists, so scratch files do not land in a project window. When no such window can be raised, the files open in a new window.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("files")
                .help("Files to open, passed to the editor unchanged")
                .num_args(1..)
                .index(1)
                .value_parser(value_parser!(OsString))
                // File names such as `-draft.txt` are files, not flags
                .allow_hyphen_values(true),
        )
        .arg(
            Arg::new("check")
                .long("check")
                .help("Report whether a reusable window exists without opening anything")
                .action(ArgAction::SetTrue)
                .conflicts_with("files"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Output the --check result in JSON format")
                .action(ArgAction::SetTrue)
                .conflicts_with("files"),
        )
}

/// Whether the invocation names files to open or asks for a check.
///
/// `--json` on its own is not work: it only shapes `--check` output.
pub fn has_work(matches: &ArgMatches) -> bool {
    matches.get_flag("check") || matches.contains_id("files")
}
