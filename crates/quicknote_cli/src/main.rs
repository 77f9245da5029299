//! Terminal host for quicknote capture.
//!
//! # Responsibility
//! - Parse capture commands and run one workflow invocation per process.
//! - Wire the terminal host, settings store, and extension scan into core.

mod extensions;
mod settings;
mod terminal;

use clap::{Parser, Subcommand};
use quicknote_core::{default_log_level, init_logging, CaptureOutcome, CaptureService};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "quicknote",
    version,
    about = "Capture dated notes into a configured directory"
)]
struct Cli {
    /// Configuration directory holding settings.json and extensions/.
    #[arg(long, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Directory for diagnostic log files; logging is off when unset.
    #[arg(long, value_name = "DIR")]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a plain-text note for the current instant.
    New,
    /// Pick a language from installed contributions, then create a note.
    NewWithLanguage,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        if let Err(message) = init_logging(default_log_level(), &log_dir.to_string_lossy()) {
            eprintln!("warning: {message}");
        }
    }

    let Some(home_dir) = settings::home_dir() else {
        eprintln!("error: no home directory set (HOME or USERPROFILE)");
        return ExitCode::FAILURE;
    };
    let config_dir = cli
        .config_dir
        .unwrap_or_else(|| settings::default_config_dir(&home_dir));

    let settings_path = config_dir.join(settings::SETTINGS_FILE_NAME);
    let mut service = CaptureService::new(
        settings::FileSettings::new(settings_path.clone()),
        extensions::ExtensionDirScan::new(config_dir.join("extensions")),
        terminal::TerminalHost::new(settings_path),
        home_dir,
    );

    let outcome = match cli.command {
        Command::New => service.new_note(),
        Command::NewWithLanguage => service.new_note_with_language(),
    };
    match outcome {
        CaptureOutcome::Created(_) => ExitCode::SUCCESS,
        CaptureOutcome::Aborted => ExitCode::FAILURE,
    }
}
