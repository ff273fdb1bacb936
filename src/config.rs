use std::time::Duration;

use hyper::Uri;
use url::Url;

use crate::cli::Cli;
use crate::error::{DeployError, Result};

pub const DEFAULT_COMPOSE_BIN: &str = "docker-compose";
pub const DEFAULT_HEALTH_URL: &str = "http://localhost:3210/version";
pub const DEFAULT_HEALTH_TIMEOUT: &str = "60s";
pub const HEALTH_REQUEST_TIMEOUT: Duration = Duration::from_secs(2);
pub const HEALTH_POLL_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeInvocation {
    pub program: String,
    /// Arguments placed before every subcommand.
    pub args: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct HealthSettings {
    pub uri: Uri,
    /// One attempt per second, so this is also the attempt count.
    pub budget_secs: u32,
    pub request_timeout: Duration,
    pub interval: Duration,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub compose: ComposeInvocation,
    /// `None` when health checking is unavailable.
    pub health: Option<HealthSettings>,
}

impl Settings {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut compose = parse_compose_bin(&cli.compose_bin)?;
        if let Some(file) = &cli.compose_file {
            compose.args.push("-f".to_string());
            compose.args.push(file.display().to_string());
        }

        let health = if cli.skip_health_check {
            None
        } else {
            Some(HealthSettings {
                uri: parse_health_url(&cli.health_url)?,
                budget_secs: parse_budget(&cli.health_timeout)?,
                request_timeout: HEALTH_REQUEST_TIMEOUT,
                interval: HEALTH_POLL_INTERVAL,
            })
        };

        Ok(Self { compose, health })
    }
}

pub fn parse_compose_bin(value: &str) -> Result<ComposeInvocation> {
    let mut words = value.split_whitespace().map(str::to_string);
    let program = words.next().ok_or_else(|| {
        DeployError::InvalidArgument("Compose binary must not be empty".to_string())
    })?;
    Ok(ComposeInvocation {
        program,
        args: words.collect(),
    })
}

pub fn parse_health_url(value: &str) -> Result<Uri> {
    let url = Url::parse(value).map_err(|err| {
        DeployError::InvalidArgument(format!("Invalid health URL '{}': {}", value, err))
    })?;
    if url.scheme() != "http" {
        return Err(DeployError::InvalidArgument(format!(
            "Health URL '{}' must use http://",
            value
        )));
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(DeployError::InvalidArgument(format!(
            "Health URL '{}' has no host",
            value
        )));
    }
    url.as_str().parse::<Uri>().map_err(|err| {
        DeployError::InvalidArgument(format!("Invalid health URL '{}': {}", value, err))
    })
}

/// Accepts a plain number of seconds or a humantime duration.
pub fn parse_budget(value: &str) -> Result<u32> {
    let trimmed = value.trim();
    let duration = match trimmed.parse::<u64>() {
        Ok(secs) => Duration::from_secs(secs),
        Err(_) => humantime::parse_duration(trimmed).map_err(|err| {
            DeployError::InvalidArgument(format!("Invalid health timeout '{}': {}", value, err))
        })?,
    };

    if duration.subsec_nanos() != 0 || duration.as_secs() == 0 {
        return Err(DeployError::InvalidArgument(format!(
            "Health timeout '{}' must be a whole number of seconds, at least 1s",
            value
        )));
    }

    u32::try_from(duration.as_secs()).map_err(|_| {
        DeployError::InvalidArgument(format!("Health timeout '{}' is too large", value))
    })
}
