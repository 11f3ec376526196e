use crate::domain::tts::{ProviderError, ProviderKind};
use std::ffi::OsStr;
use std::path::Path;
use std::process::{Output, Stdio};
use std::time::Duration;
use tokio::process::Command;

/// Runs external programs on behalf of a provider, bounded by a timeout.
/// A program still running when the timeout elapses is killed.
#[derive(Debug, Clone)]
pub struct CommandRunner {
    provider: ProviderKind,
    timeout: Duration,
}

impl CommandRunner {
    pub fn new(provider: ProviderKind, timeout: Duration) -> Self {
        Self { provider, timeout }
    }

    pub async fn run<I, S>(&self, program: &Path, args: I) -> Result<Output, ProviderError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let program_name = program.display().to_string();

        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        tracing::debug!(provider = %self.provider, command = ?cmd, "Running external program");

        let child = cmd.spawn().map_err(|source| ProviderError::Spawn {
            provider: self.provider,
            program: program_name.clone(),
            source,
        })?;

        let output = match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(result) => result.map_err(|source| ProviderError::Io {
                provider: self.provider,
                source,
            })?,
            Err(_) => {
                tracing::error!(
                    provider = %self.provider,
                    program = %program_name,
                    timeout_secs = self.timeout.as_secs(),
                    "External program timed out"
                );
                return Err(ProviderError::Timeout {
                    provider: self.provider,
                    program: program_name,
                    timeout: self.timeout,
                });
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            tracing::error!(
                provider = %self.provider,
                program = %program_name,
                status = %output.status,
                stderr = %stderr,
                "External program failed"
            );
            return Err(ProviderError::Process {
                provider: self.provider,
                program: program_name,
                status: output.status.to_string(),
                stderr,
            });
        }

        Ok(output)
    }
}
