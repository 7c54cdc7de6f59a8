//! Process runner that records commands instead of running them.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use chainkit_core::{
    application::{
        ApplicationError,
        ports::{CommandSpec, CommandStatus, ProcessRunner},
    },
    error::ChainkitResult,
};
use tracing::info;

/// Records every command and answers with a configured exit code
/// (0 unless set per program).
///
/// Used by tests and by `assemble --dry-run`.
#[derive(Debug, Clone, Default)]
pub struct RecordingProcessRunner {
    inner: Arc<Mutex<RecordingInner>>,
}

#[derive(Debug, Default)]
struct RecordingInner {
    commands: Vec<CommandSpec>,
    exit_codes: HashMap<String, i32>,
}

impl RecordingProcessRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every invocation of `program` with `code`.
    pub fn with_exit_code(self, program: impl Into<String>, code: i32) -> Self {
        if let Ok(mut inner) = self.inner.lock() {
            inner.exit_codes.insert(program.into(), code);
        }
        self
    }

    /// Commands seen so far, in order.
    pub fn commands(&self) -> Vec<CommandSpec> {
        self.inner
            .lock()
            .map(|inner| inner.commands.clone())
            .unwrap_or_default()
    }

    /// Commands seen so far, rendered as command lines.
    pub fn command_lines(&self) -> Vec<String> {
        self.commands().iter().map(ToString::to_string).collect()
    }
}

#[async_trait]
impl ProcessRunner for RecordingProcessRunner {
    async fn run(&self, command: &CommandSpec) -> ChainkitResult<CommandStatus> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| ApplicationError::StateLockError)?;

        info!(command = %command, "Recorded command");
        inner.commands.push(command.clone());
        let code = inner.exit_codes.get(&command.program).copied().unwrap_or(0);
        Ok(CommandStatus::from_code(code))
    }
}
