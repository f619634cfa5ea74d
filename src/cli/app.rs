//! Command dispatcher
//!
//! Parses arguments, loads configuration, runs the selected command and maps
//! its outcome to a process exit code.

use std::ffi::OsString;
use std::io;
use std::path::Path;
use std::process::ExitCode;

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{CommandFactory, Parser};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::application::ports::{ClipboardBackend, ConfigStore};
use crate::application::{
    check_status, ClipboardAdapter, CommandError, CopyUseCase, PasteUseCase,
};
use crate::domain::config::AppConfig;
use crate::infrastructure::clipboard::{create_backend, BackendPreference};
use crate::infrastructure::XdgConfigStore;

use super::args::{normalize_args, Cli, Commands};
use super::config_cmd::handle_config_command;
use super::presenter::{Presenter, INSTALL_HINT};

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;

/// Run fclip with the given process arguments (including the program name)
pub fn run<I, T>(args: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let presenter = Presenter::new();

    let cli = match Cli::try_parse_from(normalize_args(args)) {
        Ok(cli) => cli,
        Err(err) => return ExitCode::from(handle_parse_error(err, &presenter)),
    };

    init_logging(cli.verbose);

    let store = config_store(cli.config.as_deref());

    let Some(command) = cli.command else {
        let _ = Cli::command().print_help();
        return ExitCode::from(EXIT_ERROR);
    };

    if let Commands::Config { action } = command {
        if let Err(e) = handle_config_command(action, &store, &presenter) {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
        return ExitCode::from(EXIT_SUCCESS);
    }

    let cli_config = AppConfig {
        backend: cli.backend.map(|b| b.to_string()),
        color: if cli.no_color { Some(false) } else { None },
    };
    let config = load_merged_config(&store, cli_config, &presenter);

    if !config.color_or_default() {
        colored::control::set_override(false);
    }

    let preference = match config.backend_or_default().parse::<BackendPreference>() {
        Ok(preference) => preference,
        Err(e) => {
            presenter.warn(&format!("{}; falling back to auto", e));
            BackendPreference::Auto
        }
    };
    let clipboard = ClipboardAdapter::new(create_backend(preference));

    let code = match command {
        Commands::Copy => run_copy(&clipboard, &presenter),
        Commands::Paste => run_paste(&clipboard, &presenter),
        Commands::Status => run_status(&clipboard, &presenter),
        Commands::Config { .. } => unreachable!(), // Handled above
    };

    ExitCode::from(code)
}

/// Map clap's outcome for unparsable arguments onto exit codes
fn handle_parse_error(err: clap::Error, presenter: &Presenter) -> u8 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
            EXIT_SUCCESS
        }
        ErrorKind::InvalidSubcommand => {
            let command = match err.get(ContextKind::InvalidSubcommand) {
                Some(ContextValue::String(command)) => command.clone(),
                _ => String::new(),
            };
            presenter.error(&format!("Unknown command: {}", command));
            presenter.info("Use 'fclip help' to see available commands");
            EXIT_ERROR
        }
        _ => {
            let _ = err.print();
            EXIT_ERROR
        }
    }
}

fn run_copy<B: ClipboardBackend>(clipboard: &ClipboardAdapter<B>, presenter: &Presenter) -> u8 {
    match CopyUseCase::new(clipboard).execute(io::stdin().lock()) {
        Ok(output) => {
            debug!(bytes = output.bytes, "copy finished");
            EXIT_SUCCESS
        }
        Err(e) => report_failure("Copy failed", &e, presenter),
    }
}

fn run_paste<B: ClipboardBackend>(clipboard: &ClipboardAdapter<B>, presenter: &Presenter) -> u8 {
    match PasteUseCase::new(clipboard).execute(io::stdout().lock()) {
        Ok(_) => EXIT_SUCCESS,
        Err(e) => report_failure("Paste failed", &e, presenter),
    }
}

fn run_status<B: ClipboardBackend>(clipboard: &ClipboardAdapter<B>, presenter: &Presenter) -> u8 {
    presenter.status(&check_status(clipboard));
    EXIT_SUCCESS
}

fn report_failure(prefix: &str, err: &CommandError, presenter: &Presenter) -> u8 {
    presenter.error(&format!("{}: {}", prefix, err));
    if matches!(err, CommandError::Unavailable(_)) {
        presenter.info(INSTALL_HINT);
    }
    EXIT_ERROR
}

fn config_store(path: Option<&Path>) -> XdgConfigStore {
    match path {
        Some(path) => XdgConfigStore::with_path(path),
        None => XdgConfigStore::new(),
    }
}

/// Load and merge configuration from file and CLI/env.
///
/// A broken config file is reported and ignored so that `status` keeps working.
pub fn load_merged_config<S: ConfigStore>(
    store: &S,
    cli_config: AppConfig,
    presenter: &Presenter,
) -> AppConfig {
    let file_config = match store.load() {
        Ok(config) => config,
        Err(e) => {
            debug!(path = %store.path().display(), error = %e, "ignoring config file");
            presenter.warn(&format!("Ignoring config file: {}", e));
            AppConfig::empty()
        }
    };

    // Merge: defaults < file < env/cli
    AppConfig::defaults().merge(file_config).merge(cli_config)
}

/// Install the stderr log subscriber. `RUST_LOG` overrides the default filter.
fn init_logging(verbose: bool) {
    let filter = if verbose { "fclip=debug" } else { "fclip=warn" };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
