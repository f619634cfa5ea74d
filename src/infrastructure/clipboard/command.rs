//! Clipboard backends that shell out to helper utilities
//! (wl-clipboard, xclip, xsel, Termux:API).

use std::env;
use std::fmt;
use std::io::{self, Write};
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::application::ports::{BackendError, ClipboardBackend};

/// Helper utilities that can back the clipboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardTool {
    /// Wayland: wl-copy / wl-paste
    WlClipboard,
    /// X11: xclip
    Xclip,
    /// X11: xsel
    Xsel,
    /// Android: termux-clipboard-set / termux-clipboard-get
    Termux,
}

impl ClipboardTool {
    /// All tools, in auto-detection order
    pub const ALL: [ClipboardTool; 4] = [
        ClipboardTool::WlClipboard,
        ClipboardTool::Xclip,
        ClipboardTool::Xsel,
        ClipboardTool::Termux,
    ];

    /// Get the string identifier for this tool
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WlClipboard => "wl-clipboard",
            Self::Xclip => "xclip",
            Self::Xsel => "xsel",
            Self::Termux => "termux",
        }
    }

    /// Package to suggest when the helper is missing
    pub const fn package(&self) -> &'static str {
        match self {
            Self::WlClipboard => "wl-clipboard",
            Self::Xclip => "xclip",
            Self::Xsel => "xsel",
            Self::Termux => "the Termux:API add-on",
        }
    }

    /// Program and arguments that read the clipboard text from stdin
    pub const fn copy_command(&self) -> (&'static str, &'static [&'static str]) {
        match self {
            Self::WlClipboard => ("wl-copy", &[]),
            Self::Xclip => ("xclip", &["-in", "-selection", "clipboard"]),
            Self::Xsel => ("xsel", &["--input", "--clipboard"]),
            Self::Termux => ("termux-clipboard-set", &[]),
        }
    }

    /// Program and arguments that print the clipboard text to stdout
    pub const fn paste_command(&self) -> (&'static str, &'static [&'static str]) {
        match self {
            Self::WlClipboard => ("wl-paste", &["--no-newline"]),
            Self::Xclip => ("xclip", &["-out", "-selection", "clipboard"]),
            Self::Xsel => ("xsel", &["--output", "--clipboard"]),
            Self::Termux => ("termux-clipboard-get", &[]),
        }
    }

    /// Environment variable that must be set for the tool to reach a display
    pub const fn required_env(&self) -> Option<&'static str> {
        match self {
            Self::WlClipboard => Some("WAYLAND_DISPLAY"),
            Self::Xclip | Self::Xsel => Some("DISPLAY"),
            Self::Termux => None,
        }
    }
}

impl fmt::Display for ClipboardTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A program invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    program: String,
    args: Vec<String>,
}

impl CommandSpec {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        command
    }
}

/// Clipboard backend driving a pair of helper programs
pub struct CommandClipboard {
    name: String,
    install_hint: String,
    copy: CommandSpec,
    paste: CommandSpec,
    required_env: Option<&'static str>,
}

impl CommandClipboard {
    /// Create a backend for one of the known helper tools
    pub fn new(tool: ClipboardTool) -> Self {
        let (copy_program, copy_args) = tool.copy_command();
        let (paste_program, paste_args) = tool.paste_command();

        Self {
            name: tool.as_str().to_string(),
            install_hint: tool.package().to_string(),
            copy: CommandSpec::new(copy_program, copy_args.iter().copied()),
            paste: CommandSpec::new(paste_program, paste_args.iter().copied()),
            required_env: tool.required_env(),
        }
    }

    /// Create a backend from arbitrary copy/paste invocations
    pub fn from_commands(name: impl Into<String>, copy: CommandSpec, paste: CommandSpec) -> Self {
        let name = name.into();
        Self {
            install_hint: name.clone(),
            name,
            copy,
            paste,
            required_env: None,
        }
    }

    fn spawn_error(&self, program: &str, err: io::Error) -> BackendError {
        if err.kind() == io::ErrorKind::NotFound {
            BackendError::Unavailable(format!(
                "{} not found. Please install {}.",
                program, self.install_hint
            ))
        } else {
            BackendError::Failed(format!("failed to run {}: {}", program, err))
        }
    }
}

impl ClipboardBackend for CommandClipboard {
    fn name(&self) -> &str {
        &self.name
    }

    fn write(&self, text: &str) -> Result<(), BackendError> {
        let program = self.copy.program();
        debug!(program, bytes = text.len(), "spawning clipboard helper");

        // Helpers like xclip and wl-copy fork a process that keeps owning the
        // selection, so their stdout/stderr must not be pipes we wait on.
        let mut child = self
            .copy
            .to_command()
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| self.spawn_error(program, e))?;

        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };

        if let Err(e) = written {
            // The helper went away before reading everything; reap it anyway.
            let _ = child.wait();
            return Err(BackendError::Failed(format!(
                "failed to write to {}: {}",
                program, e
            )));
        }

        let status = child
            .wait()
            .map_err(|e| BackendError::Failed(e.to_string()))?;

        if !status.success() {
            return Err(BackendError::Failed(format!(
                "{} exited with status: {}",
                program, status
            )));
        }

        Ok(())
    }

    fn read(&self) -> Result<String, BackendError> {
        let program = self.paste.program();
        debug!(program, "spawning clipboard helper");

        let output = self
            .paste
            .to_command()
            .stdin(Stdio::null())
            .output()
            .map_err(|e| self.spawn_error(program, e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            return Err(BackendError::Failed(if stderr.is_empty() {
                format!("{} exited with status: {}", program, output.status)
            } else {
                format!("{} failed: {}", program, stderr)
            }));
        }

        String::from_utf8(output.stdout).map_err(|_| {
            BackendError::Failed(format!("{} returned text that is not valid UTF-8", program))
        })
    }

    fn is_supported(&self) -> bool {
        if let Some(var) = self.required_env {
            if env::var_os(var).map_or(true, |v| v.is_empty()) {
                debug!(backend = %self.name, var, "required environment variable not set");
                return false;
            }
        }

        is_tool_available(self.copy.program())
    }
}

/// Check if a program can be found on PATH
pub fn is_tool_available(program: &str) -> bool {
    let candidate = Path::new(program);
    if candidate.components().count() > 1 {
        return is_executable(candidate);
    }

    let Some(paths) = env::var_os("PATH") else {
        return false;
    };

    env::split_paths(&paths).any(|dir| is_executable(&dir.join(program)))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file() || path.with_extension("exe").is_file()
}
