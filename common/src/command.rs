//! Command execution utilities
//!
//! Provides consistent command execution with proper error handling and logging.

use anyhow::{anyhow, Context, Result};
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, instrument};

/// Result of a command execution.
#[derive(Debug)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
    pub code: Option<i32>,
}

/// Run a command and return its output.
///
/// This is a low-level function that returns both stdout and stderr.
/// Use `run_checked` if you want to treat non-zero exit as an error.
#[instrument(skip_all, fields(cmd = %cmd))]
pub async fn run(cmd: &str, args: &[&str]) -> Result<CommandOutput> {
    debug!(args = ?args, "Running command");

    let output = Command::new(cmd)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .await
        .context(format!("Failed to execute {}", cmd))?;

    Ok(CommandOutput {
        stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        success: output.status.success(),
        code: output.status.code(),
    })
}

/// Run a command and return stdout if successful, error otherwise.
///
/// The error message carries the exit code and the captured stderr.
pub async fn run_checked(cmd: &str, args: &[&str]) -> Result<String> {
    let output = run(cmd, args).await?;
    if output.success {
        Ok(output.stdout)
    } else {
        let code = output
            .code
            .map(|c| c.to_string())
            .unwrap_or_else(|| "signal".to_string());
        Err(anyhow!("{} failed (exit {}): {}", cmd, code, output.stderr))
    }
}

/// Run a psql command.
///
/// # Example
/// ```ignore
/// let result = psql(&[conninfo, "-f", "init.sql"]).await?;
/// ```
pub async fn psql(args: &[&str]) -> Result<String> {
    run_checked("psql", args).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn run_checked_returns_stdout() {
        let out = run_checked("sh", &["-c", "echo hello"]).await.unwrap();
        assert_eq!(out, "hello");
    }

    #[tokio::test]
    async fn run_checked_surfaces_stderr_and_exit_code() {
        let err = run_checked("sh", &["-c", "echo boom >&2; exit 3"])
            .await
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("exit 3"), "missing exit code: {msg}");
        assert!(msg.contains("boom"), "missing stderr: {msg}");
    }
}
