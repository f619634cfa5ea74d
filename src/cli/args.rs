//! CLI argument definitions using Clap

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::infrastructure::clipboard::BackendPreference;

const EXAMPLES: &str = "\
Examples:
  echo 'Hello' | fclip copy
  fclip paste > file.txt
  fclip --backend xsel status";

/// fclip - copy stdin to the clipboard and paste it back
#[derive(Parser, Debug)]
#[command(name = "fclip")]
#[command(version)]
#[command(about = "Copy stdin to the system clipboard and paste it to stdout")]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    /// Clipboard backend (auto, arboard, wl-clipboard, xclip, xsel, termux)
    #[arg(short = 'b', long, global = true, env = "FCLIP_BACKEND", value_name = "BACKEND")]
    pub backend: Option<BackendPreference>,

    /// Config file to use instead of the default location
    #[arg(short = 'c', long, global = true, env = "FCLIP_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log what fclip is doing to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Copy stdin to the clipboard
    Copy,
    /// Paste the clipboard to stdout
    Paste,
    /// Check whether a clipboard is available
    Status,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["backend", "color"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

/// Options that consume the following argument as their value
const OPTIONS_WITH_VALUE: &[&str] = &["-b", "--backend", "-c", "--config"];

/// Trim and lower-case the command token so `COPY` and ` paste ` are accepted.
///
/// Only the first positional argument is touched; option values and the
/// arguments of `config set` are passed through unchanged.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    let mut skip_value = false;
    for arg in args.iter_mut().skip(1) {
        if skip_value {
            skip_value = false;
            continue;
        }

        let Some(text) = arg.to_str() else {
            break;
        };

        if text.starts_with('-') {
            skip_value = OPTIONS_WITH_VALUE.contains(&text);
            continue;
        }

        *arg = OsString::from(text.trim().to_lowercase());
        break;
    }

    args
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clipboard::ClipboardTool;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(normalize_args(args.iter().copied())).unwrap()
    }

    #[test]
    fn cli_parses_defaults() {
        let cli = parse(&["fclip"]);
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
        assert!(!cli.verbose);
        assert!(!cli.no_color);
    }

    #[test]
    fn cli_parses_commands() {
        assert!(matches!(parse(&["fclip", "copy"]).command, Some(Commands::Copy)));
        assert!(matches!(parse(&["fclip", "paste"]).command, Some(Commands::Paste)));
        assert!(matches!(parse(&["fclip", "status"]).command, Some(Commands::Status)));
    }

    #[test]
    fn command_token_is_case_insensitive_and_trimmed() {
        assert!(matches!(parse(&["fclip", "COPY"]).command, Some(Commands::Copy)));
        assert!(matches!(parse(&["fclip", " Paste "]).command, Some(Commands::Paste)));
        assert!(matches!(parse(&["fclip", "-v", "Status"]).command, Some(Commands::Status)));
    }

    #[test]
    fn cli_parses_backend() {
        let cli = parse(&["fclip", "--backend", "xclip", "paste"]);
        assert_eq!(cli.backend, Some(BackendPreference::Tool(ClipboardTool::Xclip)));
        assert!(matches!(cli.command, Some(Commands::Paste)));
    }

    #[test]
    fn global_options_after_command() {
        let cli = parse(&["fclip", "status", "-b", "arboard", "--no-color"]);
        assert_eq!(cli.backend, Some(BackendPreference::Arboard));
        assert!(cli.no_color);
    }

    #[test]
    fn invalid_backend_is_rejected() {
        assert!(Cli::try_parse_from(["fclip", "--backend", "clippy", "copy"]).is_err());
    }

    #[test]
    fn cli_parses_config_set() {
        let cli = parse(&["fclip", "config", "set", "backend", "XSEL"]);
        if let Some(Commands::Config {
            action: ConfigAction::Set { key, value },
        }) = cli.command
        {
            assert_eq!(key, "backend");
            assert_eq!(value, "XSEL");
        } else {
            panic!("Expected Config Set command");
        }
    }

    #[test]
    fn normalize_skips_option_values() {
        let args = normalize_args(["fclip", "--config", "/Tmp/Config.toml", "COPY"]);
        assert_eq!(args[2], OsString::from("/Tmp/Config.toml"));
        assert_eq!(args[3], OsString::from("copy"));
    }

    #[test]
    fn normalize_touches_only_the_command() {
        let args = normalize_args(["fclip", "Config", "Set", "Backend"]);
        assert_eq!(
            args,
            vec![
                OsString::from("fclip"),
                OsString::from("config"),
                OsString::from("Set"),
                OsString::from("Backend"),
            ]
        );
    }

    #[test]
    fn unknown_command_is_an_error() {
        assert!(Cli::try_parse_from(["fclip", "yank"]).is_err());
    }

    #[test]
    fn valid_config_keys() {
        assert!(is_valid_config_key("backend"));
        assert!(is_valid_config_key("color"));
        assert!(!is_valid_config_key("api_key"));
    }

    #[test]
    fn verify_cli() {
        // Verify the CLI definition is valid
        Cli::command().debug_assert();
    }
}
