use std::env;
use std::process::ExitCode;

mod cli;
mod clipboard;
mod entropy;
mod error;
mod exits;
mod pass;
mod settings;
mod terminal;
mod tui;

use settings::Settings;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    exits::install_handlers();
    exits::disable_core_dumps();

    let args: Vec<String> = env::args().collect();

    let result = if args.len() == 1 {
        let settings = Settings::load_from_file().unwrap_or_else(|e| {
            log::warn!("using default settings: {e}");
            Settings::default()
        });
        tui::run(settings)
    } else {
        cli::run(args)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            cli::prompts::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
