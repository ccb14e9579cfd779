//! Script runner adapters.

use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::{Arc, Mutex};

use svcgen_core::{
    application::{ApplicationError, ports::ScriptRunner},
    domain::ScriptStatus,
    error::SvcgenResult,
};
use tracing::{debug, instrument};

/// Default interpreter for generation scripts.
pub const DEFAULT_SHELL: &str = "/bin/sh";

/// Runs `<shell> <script>` synchronously with inherited stdio.
#[derive(Debug, Clone)]
pub struct ShellScriptRunner {
    shell: PathBuf,
    working_dir: Option<PathBuf>,
}

impl ShellScriptRunner {
    pub fn new() -> Self {
        Self {
            shell: PathBuf::from(DEFAULT_SHELL),
            working_dir: None,
        }
    }

    pub fn with_shell(mut self, shell: impl Into<PathBuf>) -> Self {
        self.shell = shell.into();
        self
    }

    /// Run the script from `dir` instead of the current directory.
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }
}

impl Default for ShellScriptRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptRunner for ShellScriptRunner {
    #[instrument(skip(self), fields(shell = %self.shell.display()))]
    fn run(&self, script: &Path) -> SvcgenResult<ScriptStatus> {
        let mut command = Command::new(&self.shell);
        command.arg(script);
        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }

        let status = command.status().map_err(|e| ApplicationError::ScriptFailed {
            script: script.to_path_buf(),
            reason: format!("Failed to launch {}: {}", self.shell.display(), e),
        })?;

        debug!(status = %status, "Script finished");
        Ok(match status.code() {
            Some(code) => ScriptStatus::exited(code),
            None => ScriptStatus::terminated(),
        })
    }
}

/// Returns a fixed status and records every script it was asked to run.
///
/// Clones share the recorded invocations.
#[derive(Debug, Clone)]
pub struct StaticScriptRunner {
    status: ScriptStatus,
    invocations: Arc<Mutex<Vec<PathBuf>>>,
}

impl StaticScriptRunner {
    pub fn new(status: ScriptStatus) -> Self {
        Self {
            status,
            invocations: Arc::default(),
        }
    }

    pub fn succeeding() -> Self {
        Self::new(ScriptStatus::exited(0))
    }

    pub fn failing(code: i32) -> Self {
        Self::new(ScriptStatus::exited(code))
    }

    pub fn invocations(&self) -> Vec<PathBuf> {
        self.invocations
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

impl ScriptRunner for StaticScriptRunner {
    fn run(&self, script: &Path) -> SvcgenResult<ScriptStatus> {
        self.invocations
            .lock()
            .map_err(|_| ApplicationError::LockPoisoned {
                resource: "script invocations",
            })?
            .push(script.to_path_buf());
        Ok(self.status)
    }
}
