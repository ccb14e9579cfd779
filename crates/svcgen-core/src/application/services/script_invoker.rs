//! External Tool Invoker - runs the generation script.

use std::path::Path;
use tracing::{info, instrument};

use crate::{
    application::{ApplicationError, ports::ScriptRunner},
    error::SvcgenResult,
};

pub struct ExternalToolInvoker<'a> {
    runner: &'a dyn ScriptRunner,
}

impl<'a> ExternalToolInvoker<'a> {
    pub fn new(runner: &'a dyn ScriptRunner) -> Self {
        Self { runner }
    }

    /// Run `script` once. Any unsuccessful exit becomes `ScriptFailed`.
    #[instrument(skip(self), fields(script = %script.display()))]
    pub fn invoke(&self, script: &Path) -> SvcgenResult<()> {
        info!("Running generation script");
        let status = self.runner.run(script)?;

        if !status.success() {
            return Err(ApplicationError::ScriptFailed {
                script: script.to_path_buf(),
                reason: status.to_string(),
            }
            .into());
        }

        info!("Generation script completed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockScriptRunner;
    use crate::domain::ScriptStatus;
    use crate::error::{ErrorCategory, SvcgenError};

    #[test]
    fn zero_exit_is_success() {
        let mut runner = MockScriptRunner::new();
        runner
            .expect_run()
            .times(1)
            .returning(|_| Ok(ScriptStatus::exited(0)));

        assert!(
            ExternalToolInvoker::new(&runner)
                .invoke(Path::new("gen.sh"))
                .is_ok()
        );
    }

    #[test]
    fn non_zero_exit_is_script_error() {
        let mut runner = MockScriptRunner::new();
        runner
            .expect_run()
            .returning(|_| Ok(ScriptStatus::exited(3)));

        let err = ExternalToolInvoker::new(&runner)
            .invoke(Path::new("gen.sh"))
            .unwrap_err();

        assert_eq!(err.category(), ErrorCategory::Script);
        assert!(err.to_string().contains("exit status 3"));
    }

    #[test]
    fn signal_termination_is_script_error() {
        let mut runner = MockScriptRunner::new();
        runner
            .expect_run()
            .returning(|_| Ok(ScriptStatus::terminated()));

        let err = ExternalToolInvoker::new(&runner)
            .invoke(Path::new("gen.sh"))
            .unwrap_err();

        assert!(matches!(
            err,
            SvcgenError::Application(ApplicationError::ScriptFailed { .. })
        ));
    }
}
