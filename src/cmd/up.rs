use crate::cmd::Context;
use crate::core::{BIN_NAME, ENDPOINTS, NEXT_STEPS, PROJECT_NAME};
use crate::error::{DeployError, Result};
use crate::health::PollOutcome;
use crate::output::Console;
use crate::runner::RunOptions;

pub struct UpCommand;

impl UpCommand {
    pub async fn run(ctx: &mut Context) -> Result<()> {
        let Context {
            runner,
            health,
            console,
        } = ctx;

        console.line(format_args!("Starting {} services...", PROJECT_NAME))?;

        let output = runner
            .run(&["up", "-d"], RunOptions::captured())
            .await
            .map_err(|err| {
                DeployError::from_run(
                    err,
                    "Failed to start services",
                    Some(format!(
                        "Check Docker Compose configuration: {} config",
                        runner.display_name()
                    )),
                )
            })?;
        console.passthrough(output.stdout_text())?;

        console.line("Waiting for Convex backend to be ready...")?;
        let mut progress_error = None;
        let outcome = match health {
            Some(poller) => {
                poller
                    .wait_ready(|_, elapsed| {
                        if progress_error.is_some() {
                            return;
                        }
                        if let Err(err) = console.line(format_args!(
                            "  Still waiting... ({}s elapsed)",
                            elapsed.as_secs()
                        )) {
                            progress_error = Some(err);
                        }
                    })
                    .await
            }
            None => PollOutcome::Skipped,
        };
        if let Some(err) = progress_error {
            return Err(err.into());
        }
        print_outcome(console, &outcome)?;

        console.blank()?;
        console.success("Services started successfully!")?;
        console.blank()?;
        console.line("Available endpoints:")?;
        for (label, url) in ENDPOINTS {
            console.line(format_args!("  - {} {}", label, url))?;
        }
        console.blank()?;
        console.line("Next steps:")?;
        for (index, step) in NEXT_STEPS.iter().enumerate() {
            console.line(format_args!("  {}. {}", index + 1, step))?;
        }

        Ok(())
    }
}

fn print_outcome(console: &mut Console, outcome: &PollOutcome) -> Result<()> {
    match outcome {
        PollOutcome::Ready { elapsed, .. } => {
            console.success(format_args!(
                "Convex backend is ready! (took {:.1}s)",
                elapsed.as_secs_f64()
            ))?;
        }
        PollOutcome::TimedOut { elapsed, .. } => {
            console.warning(format_args!(
                "Warning: Convex backend may not be fully initialized after {:.1}s",
                elapsed.as_secs_f64()
            ))?;
            console.line(format_args!("  Check logs with: {} logs", BIN_NAME))?;
            console.line("  The backend may still be starting up in the background.")?;
        }
        PollOutcome::Skipped => {
            console.line("Warning: health check unavailable. Skipping health check.")?;
            console.line("The backend may still be initializing. Check logs with:")?;
            console.line(format_args!("  {} logs", BIN_NAME))?;
        }
    }
    Ok(())
}
