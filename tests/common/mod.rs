use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

pub struct TestContext {
    pub temp_dir: TempDir,
    pub config_path: PathBuf,
}

impl TestContext {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config/strdist/config.json");
        TestContext {
            temp_dir,
            config_path,
        }
    }

    /// Write a config file the binary will pick up via `--config`
    pub fn write_config(&self, json: &str) {
        let parent = self.config_path.parent().expect("config path has a parent");
        std::fs::create_dir_all(parent).expect("Failed to create config dir");
        std::fs::write(&self.config_path, json).expect("Failed to write config");
    }

    pub fn audit_log(&self) -> PathBuf {
        self.config_path.with_file_name("audit.log")
    }

    fn command(&self, args: &[&str]) -> Command {
        let bin_path = env!("CARGO_BIN_EXE_strdist");
        let mut cmd = Command::new(bin_path);
        cmd.args(args)
            .arg("--config")
            .arg(&self.config_path)
            // Isolate from the user's environment
            .env("XDG_CONFIG_HOME", self.temp_dir.path().join("config"))
            .env_remove("STRDIST_CONFIG");
        cmd
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args)
            .output()
            .expect("Failed to run strdist")
    }

    pub fn run_with_stdin(&self, args: &[&str], stdin: &str) -> Output {
        let mut child = self
            .command(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn strdist");
        child
            .stdin
            .take()
            .expect("stdin is piped")
            .write_all(stdin.as_bytes())
            .expect("Failed to write stdin");
        child.wait_with_output().expect("Failed to wait for strdist")
    }
}

/// Parse stdout as the JSON entry envelope
pub fn entries(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).expect("stdout should be a JSON envelope")
}
