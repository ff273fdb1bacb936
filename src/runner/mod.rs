use async_trait::async_trait;
use thiserror::Error;

pub mod process;

pub use process::ProcessRunner;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("command '{program}' not found")]
    NotFound { program: String },
    #[error("{command} exited with status {status}")]
    Failed {
        command: String,
        status: i32,
        stderr: Option<String>,
    },
    #[error("failed to run '{program}': {source}")]
    Io {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// Fail with [`RunError::Failed`] on a non-zero exit.
    pub check: bool,
    /// Collect stdout/stderr instead of inheriting the terminal.
    pub capture: bool,
}

impl RunOptions {
    pub fn captured() -> Self {
        Self {
            check: true,
            capture: true,
        }
    }

    pub fn passthrough() -> Self {
        Self {
            check: false,
            capture: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    pub status: i32,
    pub stdout: Option<String>,
    pub stderr: Option<String>,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.status == 0
    }

    pub fn stdout_text(&self) -> &str {
        self.stdout.as_deref().unwrap_or_default()
    }
}

/// Runs the orchestration tool. `args` follow the configured program and
/// its leading arguments.
#[async_trait]
pub trait ComposeRunner: Send + Sync {
    /// Human-readable invocation, e.g. `docker-compose -f compose.yml`.
    fn display_name(&self) -> String;
    async fn run(&self, args: &[&str], options: RunOptions) -> Result<ProcessOutput, RunError>;
}

#[cfg(test)]
pub(crate) mod mock {
    use std::sync::Mutex;

    use super::*;

    /// Records every invocation and answers from a fixed script keyed on the
    /// full argument list, falling back to the first argument.
    pub struct RecordingRunner {
        calls: Mutex<Vec<Vec<String>>>,
        responses: Vec<(&'static str, Result<ProcessOutput, i32>)>,
        missing: bool,
    }

    impl RecordingRunner {
        pub fn new() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                responses: Vec::new(),
                missing: false,
            }
        }

        pub fn missing() -> Self {
            Self {
                missing: true,
                ..Self::new()
            }
        }

        pub fn respond(mut self, subcommand: &'static str, stdout: &str) -> Self {
            self.responses.push((
                subcommand,
                Ok(ProcessOutput {
                    status: 0,
                    stdout: Some(stdout.to_string()),
                    stderr: Some(String::new()),
                }),
            ));
            self
        }

        pub fn fail(mut self, subcommand: &'static str, status: i32) -> Self {
            self.responses.push((subcommand, Err(status)));
            self
        }

        pub fn calls(&self) -> Vec<Vec<String>> {
            self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
        }
    }

    #[async_trait]
    impl ComposeRunner for RecordingRunner {
        fn display_name(&self) -> String {
            "docker-compose".to_string()
        }

        async fn run(&self, args: &[&str], options: RunOptions) -> Result<ProcessOutput, RunError> {
            if let Ok(mut calls) = self.calls.lock() {
                calls.push(args.iter().map(|arg| arg.to_string()).collect());
            }
            if self.missing {
                return Err(RunError::NotFound {
                    program: self.display_name(),
                });
            }
            let joined = args.join(" ");
            let first = args.first().copied().unwrap_or_default();
            let response = self
                .responses
                .iter()
                .find(|(key, _)| *key == joined)
                .or_else(|| self.responses.iter().find(|(key, _)| *key == first));
            match response {
                Some((_, Ok(output))) => Ok(output.clone()),
                Some((_, Err(status))) if options.check => Err(RunError::Failed {
                    command: format!("{} {}", self.display_name(), args.join(" ")),
                    status: *status,
                    stderr: Some("simulated failure".to_string()),
                }),
                Some((_, Err(status))) => Ok(ProcessOutput {
                    status: *status,
                    ..ProcessOutput::default()
                }),
                None => Ok(ProcessOutput::default()),
            }
        }
    }
}
