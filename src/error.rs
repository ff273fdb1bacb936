use thiserror::Error;

use crate::runner::RunError;

#[derive(Debug, Error)]
pub enum DeployError {
    #[error("Command '{program}' not found")]
    ExecutableNotFound { program: String },

    #[error("{context}")]
    ProcessFailed {
        context: String,
        command: String,
        status: i32,
        stderr: Option<String>,
        fix: Option<String>,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl DeployError {
    /// Attaches handler context to a runner failure. A missing executable
    /// stays fatal regardless of which command hit it.
    pub fn from_run(err: RunError, context: &str, fix: Option<String>) -> Self {
        match err {
            RunError::NotFound { program } => DeployError::ExecutableNotFound { program },
            RunError::Failed {
                command,
                status,
                stderr,
            } => DeployError::ProcessFailed {
                context: context.to_string(),
                command,
                status,
                stderr,
                fix,
            },
            RunError::Io { program, source } => {
                DeployError::Other(format!("{context}: could not run '{program}': {source}"))
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            DeployError::ExecutableNotFound { .. } => 1,
            DeployError::ProcessFailed { .. } => 1,
            DeployError::InvalidArgument(_) => 2,
            DeployError::Io(_) => 1,
            DeployError::Other(_) => 1,
        }
    }

    pub fn format_detailed(&self, use_color: bool) -> String {
        let (error_label, cause_label, fix_label) = if use_color {
            (
                "\x1b[1;31mError:\x1b[0m",
                "\x1b[1;33mCause:\x1b[0m",
                "\x1b[1;32mFix:\x1b[0m",
            )
        } else {
            ("Error:", "Cause:", "Fix:")
        };

        let (cause, fix) = self.get_cause_and_fix();

        let mut output = format!("{} {}", error_label, self);

        if let Some(cause_text) = cause {
            output.push_str(&format!("\n{} {}", cause_label, cause_text));
        }

        if let Some(fix_text) = fix {
            output.push_str(&format!("\n{} {}", fix_label, fix_text));
        }

        output
    }

    fn get_cause_and_fix(&self) -> (Option<String>, Option<String>) {
        match self {
            DeployError::ExecutableNotFound { program } => (
                Some(format!("'{}' is not installed or not on PATH", program)),
                Some("Install Docker Compose or point --compose-bin at it".to_string()),
            ),
            DeployError::ProcessFailed {
                command,
                status,
                stderr,
                fix,
                ..
            } => {
                let mut cause = format!("{} exited with status {}", command, status);
                if let Some(text) = stderr.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
                    for line in text.lines() {
                        cause.push_str(&format!("\n  {}", line));
                    }
                }
                (Some(cause), fix.clone())
            }
            DeployError::InvalidArgument(_) => (None, Some("Run 'convexctl --help'".to_string())),
            DeployError::Io(_) => (None, None),
            DeployError::Other(_) => (None, None),
        }
    }
}

pub type Result<T> = std::result::Result<T, DeployError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_stays_fatal() {
        let err = DeployError::from_run(
            RunError::NotFound {
                program: "docker-compose".to_string(),
            },
            "Failed to stop services",
            None,
        );
        assert!(matches!(err, DeployError::ExecutableNotFound { .. }));
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("docker-compose"));
    }

    #[test]
    fn test_process_failed_carries_stderr() {
        let err = DeployError::from_run(
            RunError::Failed {
                command: "docker-compose up -d".to_string(),
                status: 1,
                stderr: Some("no such service: convex\n".to_string()),
            },
            "Failed to start services",
            Some("Check Docker Compose configuration: docker-compose config".to_string()),
        );
        assert_eq!(err.exit_code(), 1);

        let text = err.format_detailed(false);
        assert!(text.starts_with("Error: Failed to start services"));
        assert!(text.contains("Cause: docker-compose up -d exited with status 1"));
        assert!(text.contains("  no such service: convex"));
        assert!(text.contains("Fix: Check Docker Compose configuration: docker-compose config"));
    }

    #[test]
    fn test_invalid_argument_exit_code() {
        let err = DeployError::InvalidArgument("bad".to_string());
        assert_eq!(err.exit_code(), 2);
        assert!(err
            .format_detailed(false)
            .ends_with("Fix: Run 'convexctl --help'"));
    }
}
