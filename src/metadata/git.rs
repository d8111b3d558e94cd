//! `git` command line backend for identity lookups.

use super::identity::VersionControl;
use crate::error::{PackagerError, Result};
use std::path::PathBuf;

/// Runs identity queries through the `git` executable.
///
/// Every query is executed once in the configured working directory; a
/// non-zero exit status is reported as [`PackagerError::ExternalTool`].
#[derive(Debug, Clone)]
pub struct GitCli {
    program: PathBuf,
    working_dir: PathBuf,
}

impl GitCli {
    /// Creates a backend running `program` inside `working_dir`.
    pub fn new(program: impl Into<PathBuf>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            working_dir: working_dir.into(),
        }
    }

    async fn output(&self, args: &[&str]) -> Result<String> {
        let command = format!("git {}", args.join(" "));

        let program = which::which(&self.program).map_err(|e| PackagerError::ExternalTool {
            command: command.clone(),
            reason: format!("{} not found: {}", self.program.display(), e),
        })?;
        log::debug!("Running {} ({})", command, program.display());

        let output = tokio::process::Command::new(&program)
            .args(args)
            .current_dir(&self.working_dir)
            .output()
            .await
            .map_err(|e| PackagerError::ExternalTool {
                command: command.clone(),
                reason: format!("failed to execute {}: {}", program.display(), e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let reason = match stderr.trim() {
                "" => output.status.to_string(),
                message => format!("{}: {}", output.status, message),
            };
            return Err(PackagerError::ExternalTool { command, reason });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl VersionControl for GitCli {
    async fn user_name(&self) -> Result<String> {
        Ok(self.output(&["config", "user.name"]).await?.trim().to_string())
    }

    async fn list_remotes(&self) -> Result<Vec<String>> {
        let stdout = self.output(&["remote"]).await?;
        Ok(parse_remotes(&stdout))
    }

    async fn remote_url(&self, remote: &str) -> Result<String> {
        Ok(self
            .output(&["remote", "get-url", remote])
            .await?
            .trim()
            .to_string())
    }
}

/// Splits `git remote` output into names, keeping listing order.
fn parse_remotes(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
