//! termnotes entry point.
//!
//! # Responsibility
//! - Resolve startup config, start logging and open note storage.
//! - Run the interactive menu on stdin/stdout.
//! - Exit with status 0 on normal exit and on Ctrl+C.

mod presenter;

use log::{error, info, warn};
use presenter::TerminalPresenter;
use std::process::ExitCode;
use termnotes_core::{
    core_version, flush_logging, init_logging, AppConfig, Controller, SqliteNoteRepository,
};

fn main() -> ExitCode {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("termnotes: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = init_logging(&config.log_level, &config.log_dir) {
        eprintln!("termnotes: logging disabled: {err}");
    }

    info!(
        "event=cli_start module=cli status=ok core_version={}",
        core_version()
    );

    if let Err(err) = ctrlc::set_handler(|| {
        println!("\nGoodbye.");
        flush_logging();
        std::process::exit(0);
    }) {
        warn!("event=interrupt_handler module=cli status=error error={err}");
    }

    let repo = match SqliteNoteRepository::try_new(&config.storage_path) {
        Ok(repo) => {
            info!(
                "event=storage_init module=cli status=ok path={}",
                repo.path().display()
            );
            repo
        }
        Err(err) => {
            error!(
                "event=storage_init module=cli status=error path={} error={err}",
                config.storage_path.display()
            );
            eprintln!("termnotes: {err}");
            flush_logging();
            return ExitCode::FAILURE;
        }
    };

    Controller::new(repo, TerminalPresenter::stdio()).run();
    flush_logging();
    ExitCode::SUCCESS
}
