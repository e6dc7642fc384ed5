mod app;
mod paths;
mod settings;

use std::fs::{self, File};
use std::process::ExitCode;

use log::{error, info, warn, LevelFilter};
use regions::Terminal;
use simplelog::{Config, WriteLogger};

use crate::app::App;
use crate::settings::Settings;

/// Log file used when the cache directory is unavailable.
const FALLBACK_LOG: &str = "regions-tui.log";

fn main() -> ExitCode {
    let settings = match settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(settings.log_level);
    info!("starting regions-tui");

    // The terminal is restored before anything is printed.
    match run(&settings) {
        Ok(()) => {
            info!("exiting");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("fatal: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(settings: &Settings) -> regions::Result<()> {
    let mut app = App::new(settings)?;
    let mut terminal = Terminal::new()?;
    app.run(&mut terminal)?;
    info!(
        "active region on exit: {}",
        app.picker().list().state().current_label
    );
    Ok(())
}

/// Log to a file; the terminal belongs to the UI while the app runs.
fn init_logging(level: LevelFilter) {
    paths::rotate_logs();

    let (file, fell_back) = match open_log_file() {
        Some(file) => (file, false),
        None => match File::create(FALLBACK_LOG) {
            Ok(file) => (file, true),
            Err(e) => {
                eprintln!("Warning: logging disabled, cannot create {}: {}", FALLBACK_LOG, e);
                return;
            }
        },
    };

    if let Err(e) = WriteLogger::init(level, Config::default(), file) {
        eprintln!("Warning: failed to initialize logger: {}", e);
        return;
    }
    if fell_back {
        warn!("cache directory unavailable, logging to {}", FALLBACK_LOG);
    }
}

fn open_log_file() -> Option<File> {
    let path = paths::log_file()?;
    fs::create_dir_all(path.parent()?).ok()?;
    File::create(&path).ok()
}
