//! Test environment builder for isolated localx-assets runs.
//!
//! Every run gets its own project directory (the working directory), its own
//! config home and its own scratch workspace, so neither the developer's
//! config nor a shared `/tmp/localx_tpl` can leak into a test.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Environment variables read by localx-assets; cleared before every run
const LOCALX_VARS: &[&str] = &[
    "LOCALX_TEMPLATES_DIR",
    "LOCALX_ON_FAILURE",
    "LOCALX_PARALLEL",
    "LOCALX_ICON_LABEL",
    "LOCALX_ICON_FONT",
    "LOCALX_COLOR",
];

/// Result of running the CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l).unwrap_or_else(|e| panic!("bad NDJSON line {:?}: {}", l, e))
            })
            .collect()
    }
}

/// Isolated test environment with temp directories
pub struct TestEnv {
    /// Working directory of every run
    pub project_root: TempDir,
    /// `XDG_CONFIG_HOME` and `HOME` for every run
    pub config_home: TempDir,
    /// `LOCALX_WORKSPACE` for every run
    pub scratch: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("Failed to create project dir"),
            config_home: TempDir::new().expect("Failed to create config home"),
            scratch: TempDir::new().expect("Failed to create scratch dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_localx-assets")),
        }
    }

    /// Environment with `localx-assets.toml` in the project root
    pub fn with_project_config(toml: &str) -> Self {
        let env = Self::new();
        env.write_project_file("localx-assets.toml", toml);
        env
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Archive written for a template by a default run
    pub fn archive_path(&self, name: &str) -> PathBuf {
        self.project_path(&format!("assets/templates/{}.zip", name))
    }

    /// Workspace directory of a template under the scratch root
    pub fn workspace_path(&self, name: &str) -> PathBuf {
        self.scratch.path().join(name)
    }

    /// Run the CLI from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run the CLI from the project root with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("HOME", self.config_home.path())
            .env("XDG_CONFIG_HOME", self.config_home.path())
            .env("LOCALX_WORKSPACE", self.scratch.path())
            .env("NO_COLOR", "1");

        for key in LOCALX_VARS {
            cmd.env_remove(key);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute localx-assets");
        Self::output_to_result(output)
    }

    fn output_to_result(output: Output) -> TestResult {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Write a file to the project directory
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        write_file(&self.project_path(relative_path), content);
    }

    /// Write the user-level config file
    pub fn write_user_config(&self, content: &str) {
        let path = self
            .config_home
            .path()
            .join("localx-assets")
            .join("config.toml");
        write_file(&path, content);
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create directories");
    }
    fs::write(path, content).expect("Failed to write file");
}
