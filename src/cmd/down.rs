use crate::cmd::Context;
use crate::core::PROJECT_NAME;
use crate::error::{DeployError, Result};
use crate::runner::RunOptions;

pub struct DownCommand;

impl DownCommand {
    pub async fn run(ctx: &mut Context) -> Result<()> {
        ctx.console
            .line(format_args!("Stopping {} services...", PROJECT_NAME))?;

        let output = ctx
            .runner
            .run(&["down"], RunOptions::captured())
            .await
            .map_err(|err| DeployError::from_run(err, "Failed to stop services", None))?;
        ctx.console.passthrough(output.stdout_text())?;
        ctx.console.success("Services stopped successfully.")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::output::capture;
    use crate::runner::mock::RecordingRunner;

    #[tokio::test]
    async fn test_down_failure_exits_one() {
        let (console, out) = capture::console();
        let mut ctx = Context {
            runner: Arc::new(RecordingRunner::new().fail("down", 2)),
            health: None,
            console,
        };

        let err = DownCommand::run(&mut ctx).await.expect_err("should fail");
        assert_eq!(err.exit_code(), 1);
        assert!(err.format_detailed(false).contains("exited with status 2"));
        assert!(!out.contents().contains("stopped successfully"));
    }

    #[tokio::test]
    async fn test_down_missing_executable() {
        let (console, _) = capture::console();
        let mut ctx = Context {
            runner: Arc::new(RecordingRunner::missing()),
            health: None,
            console,
        };

        let err = DownCommand::run(&mut ctx).await.expect_err("should fail");
        assert!(matches!(err, DeployError::ExecutableNotFound { .. }));
        assert_eq!(err.exit_code(), 1);
    }
}
