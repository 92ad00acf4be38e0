use codeopen_core::init_logging;

mod app;
mod commands;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = app::build_cli();
    let matches = app.clone().get_matches();

    // Extract verbose flag before initializing logging
    let verbose = matches.get_flag("verbose");
    init_logging(verbose);

    if !app::has_work(&matches) {
        println!("{}", app.render_usage());
        std::process::exit(1);
    }

    commands::run_command(&matches)?;

    Ok(())
}
