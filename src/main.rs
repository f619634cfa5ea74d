//! fclip CLI entry point

use std::process::ExitCode;

fn main() -> ExitCode {
    fclip::cli::run(std::env::args_os())
}
