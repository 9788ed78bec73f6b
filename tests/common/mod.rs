use std::path::PathBuf;
use std::process::Command;

use anyhow::Result;
use tempfile::TempDir;

pub struct TestEnvironment {
    temp_dir: TempDir,
}

pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: tempfile::tempdir()?,
        })
    }

    /// Path of the database file used by this environment.
    pub fn db_path(&self) -> PathBuf {
        self.temp_dir.path().join("users.db")
    }

    /// Run the userlist binary against this environment's database.
    pub fn run(&self, args: &[&str]) -> Result<CommandOutput> {
        let db_path = self.db_path();
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_userlist"));
        cmd.arg("--database").arg(&db_path).args(args);

        let output = cmd.output()?;
        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            exit_code: output.status.code().unwrap_or(-1),
        })
    }
}
