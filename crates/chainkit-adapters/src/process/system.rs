//! Runs commands with `tokio::process`, inheriting the terminal.

use async_trait::async_trait;
use chainkit_core::{
    application::{
        ApplicationError,
        ports::{CommandSpec, CommandStatus, ProcessRunner},
    },
    error::ChainkitResult,
};
use tokio::process::Command;
use tracing::{debug, instrument};

/// Production process runner.
///
/// Output goes straight to the user's terminal so package-manager prompts
/// and progress stay visible.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcessRunner;

impl SystemProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProcessRunner for SystemProcessRunner {
    #[instrument(skip_all, fields(command = %command, cwd = %command.cwd.display()))]
    async fn run(&self, command: &CommandSpec) -> ChainkitResult<CommandStatus> {
        let status = Command::new(&command.program)
            .args(&command.args)
            .current_dir(&command.cwd)
            .status()
            .await
            .map_err(|e| ApplicationError::CommandSpawn {
                command: command.to_string(),
                reason: e.to_string(),
            })?;

        debug!(code = ?status.code(), "Command finished");
        Ok(CommandStatus {
            code: status.code(),
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reports_exit_codes() {
        let dir = tempfile::tempdir().unwrap();
        let runner = SystemProcessRunner::new();

        let ok = runner
            .run(&CommandSpec::new("sh", dir.path()).args(["-c", "exit 0"]))
            .await
            .unwrap();
        assert!(ok.success());

        let failed = runner
            .run(&CommandSpec::new("sh", dir.path()).args(["-c", "exit 3"]))
            .await
            .unwrap();
        assert_eq!(failed.code, Some(3));
    }

    #[tokio::test]
    async fn missing_program_is_a_spawn_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SystemProcessRunner::new()
            .run(&CommandSpec::new("chainkit-no-such-program", dir.path()))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("chainkit-no-such-program"));
    }
}
