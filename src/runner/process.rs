use std::io;

use async_trait::async_trait;
use tokio::process::Command;

use crate::config::ComposeInvocation;
use crate::runner::{ComposeRunner, ProcessOutput, RunError, RunOptions};

/// Runs the orchestration tool as a child process.
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    program: String,
    leading_args: Vec<String>,
}

impl ProcessRunner {
    pub fn new(invocation: &ComposeInvocation) -> Self {
        Self {
            program: invocation.program.clone(),
            leading_args: invocation.args.clone(),
        }
    }

    fn render(&self, args: &[&str]) -> String {
        let mut parts = vec![self.program.as_str()];
        parts.extend(self.leading_args.iter().map(String::as_str));
        parts.extend(args.iter().copied());
        parts.join(" ")
    }

    fn spawn_error(&self, err: io::Error) -> RunError {
        if err.kind() == io::ErrorKind::NotFound {
            RunError::NotFound {
                program: self.program.clone(),
            }
        } else {
            RunError::Io {
                program: self.program.clone(),
                source: err,
            }
        }
    }
}

#[async_trait]
impl ComposeRunner for ProcessRunner {
    fn display_name(&self) -> String {
        self.render(&[])
    }

    async fn run(&self, args: &[&str], options: RunOptions) -> Result<ProcessOutput, RunError> {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.leading_args).args(args).kill_on_drop(true);

        tracing::debug!(command = %self.render(args), capture = options.capture, "running compose command");

        let output = if options.capture {
            let output = cmd.output().await.map_err(|err| self.spawn_error(err))?;
            ProcessOutput {
                status: exit_code(output.status),
                stdout: Some(String::from_utf8_lossy(&output.stdout).into_owned()),
                stderr: Some(String::from_utf8_lossy(&output.stderr).into_owned()),
            }
        } else {
            let status = cmd.status().await.map_err(|err| self.spawn_error(err))?;
            ProcessOutput {
                status: exit_code(status),
                stdout: None,
                stderr: None,
            }
        };

        tracing::debug!(status = output.status, "compose command finished");

        if options.check && !output.success() {
            return Err(RunError::Failed {
                command: self.render(args),
                status: output.status,
                stderr: output.stderr,
            });
        }

        Ok(output)
    }
}

fn exit_code(status: std::process::ExitStatus) -> i32 {
    status
        .code()
        .unwrap_or(if status.success() { 0 } else { 1 })
}
