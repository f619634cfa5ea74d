//! Shared helpers for CLI integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Isolated environment: private config file and a PATH without clipboard helpers
pub struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        std::fs::create_dir(dir.path().join("bin")).expect("Failed to create bin dir");
        Self { dir }
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }

    pub fn bin_dir(&self) -> PathBuf {
        self.dir.path().join("bin")
    }

    /// Put an executable shell script named `name` into the sandbox PATH
    #[cfg(unix)]
    #[allow(dead_code)]
    pub fn fake_helper(&self, name: &str, script: &str) -> &Self {
        use std::os::unix::fs::PermissionsExt;

        let path = self.bin_dir().join(name);
        std::fs::write(&path, format!("#!/bin/sh\nPATH=/usr/bin:/bin\n{}\n", script))
            .expect("Failed to write helper");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make helper executable");
        self
    }

    /// fclip with its config isolated and colors off
    pub fn fclip(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_fclip"));
        cmd.env("FCLIP_CONFIG", self.config_path())
            .env("NO_COLOR", "1")
            .env_remove("FCLIP_BACKEND")
            .env_remove("RUST_LOG");
        cmd
    }

    /// fclip pinned to a helper backend that cannot be found
    pub fn fclip_without_clipboard(&self) -> Command {
        let mut cmd = self.fclip();
        cmd.env("FCLIP_BACKEND", "termux").env("PATH", self.bin_dir());
        cmd
    }

    /// fclip auto-detecting among the helpers in the sandbox PATH, with no display
    #[allow(dead_code)]
    pub fn fclip_with_helpers(&self) -> Command {
        let mut cmd = self.fclip();
        cmd.env("PATH", self.bin_dir())
            .env_remove("WAYLAND_DISPLAY")
            .env_remove("DISPLAY");
        cmd
    }
}
