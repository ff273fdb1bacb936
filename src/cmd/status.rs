use crate::cmd::Context;
use crate::core::{parse_ps_output, ServiceRow, StatusReport, BIN_NAME, EXPECTED_SERVICES};
use crate::error::{DeployError, Result};
use crate::output::Console;
use crate::runner::{RunError, RunOptions};

pub struct StatusCommand;

impl StatusCommand {
    pub async fn run(ctx: &mut Context) -> Result<()> {
        ctx.console.line("Checking service status...")?;
        ctx.console.rule()?;

        let report = match ctx
            .runner
            .run(&["ps", "--format", "json"], RunOptions::captured())
            .await
        {
            Ok(output) => parse_ps_output(output.stdout_text()),
            // Compose v1 rejects `--format`; plain `ps` is the legacy listing.
            Err(RunError::Failed { status, .. }) => {
                tracing::debug!(status, "structured ps unsupported, falling back to plain ps");
                let output = ctx
                    .runner
                    .run(&["ps"], RunOptions::captured())
                    .await
                    .map_err(|err| {
                        DeployError::from_run(err, "Failed to check service status", None)
                    })?;
                StatusReport::Raw(output.stdout_text().to_string())
            }
            Err(err) => {
                return Err(DeployError::from_run(
                    err,
                    "Failed to check service status",
                    None,
                ))
            }
        };
        match &report {
            StatusReport::Structured(rows) => print_table(&mut ctx.console, rows)?,
            StatusReport::Raw(text) => ctx.console.passthrough(text)?,
        }

        ctx.console.rule()?;
        let missing = report.missing(&EXPECTED_SERVICES);
        if missing.is_empty() {
            ctx.console.success("Services are running.")?;
        } else {
            ctx.console.warning("Some services may not be running.")?;
            if matches!(report, StatusReport::Structured(_)) {
                ctx.console
                    .line(format_args!("  Not running: {}", missing.join(", ")))?;
            }
            ctx.console
                .line(format_args!("  Start services with: {} up", BIN_NAME))?;
        }

        Ok(())
    }
}

fn print_table(console: &mut Console, rows: &[ServiceRow]) -> Result<()> {
    if rows.is_empty() {
        console.line("No services found.")?;
        return Ok(());
    }

    let headers = ["NAME", "SERVICE", "STATE", "STATUS"];
    let cells: Vec<[&str; 4]> = rows
        .iter()
        .map(|row| [&*row.name, &*row.service, &*row.state, &*row.status])
        .collect();

    let mut widths = headers.map(str::len);
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    for line in std::iter::once(headers).chain(cells) {
        let rendered = line
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join("   ");
        console.line(rendered.trim_end())?;
    }
    Ok(())
}
