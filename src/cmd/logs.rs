use tokio::signal;

use crate::cmd::Context;
use crate::error::{DeployError, Result};
use crate::runner::RunOptions;

pub struct LogsCommand;

impl LogsCommand {
    /// Streams logs until the tool exits or the user presses Ctrl-C. The
    /// tool's exit status is not checked.
    pub async fn run(ctx: &mut Context) -> Result<()> {
        ctx.console
            .line("Showing logs from all services (Ctrl+C to exit)...")?;
        ctx.console.rule()?;

        // The interrupt branch is polled first so the handler is installed
        // before the child is spawned, and wins when both are ready.
        let follow = ctx.runner.run(&["logs", "-f"], RunOptions::passthrough());
        tokio::select! {
            biased;

            _ = signal::ctrl_c() => {
                ctx.console.blank()?;
                ctx.console.rule()?;
                ctx.console.line("Logs viewer stopped.")?;
                Ok(())
            }
            result = follow => {
                let output = result
                    .map_err(|err| DeployError::from_run(err, "Failed to show logs", None))?;
                tracing::debug!(status = output.status, "log stream ended");
                Ok(())
            }
        }
    }
}
