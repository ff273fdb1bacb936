use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use clap_complete::Shell;

use crate::config::{DEFAULT_COMPOSE_BIN, DEFAULT_HEALTH_TIMEOUT, DEFAULT_HEALTH_URL};

const EXAMPLES: &str = "Examples:\n    convexctl up        Start services and wait for health check\n    convexctl down      Stop all services\n    convexctl logs      Show logs from all services\n    convexctl status    Show service status\n";

#[derive(Parser, Debug)]
#[command(
    name = "convexctl",
    version,
    about = "Convex POC - Deployment Orchestration",
    long_about = "Manage the Docker Compose services of the Convex POC: start them and wait for the backend to become healthy, stop them, follow their logs, or inspect their status.",
    after_help = EXAMPLES,
    disable_help_subcommand = true
)]
pub struct Cli {
    #[arg(value_enum, default_value_t = Command::Up, help = "Command to execute")]
    pub command: Command,

    #[arg(
        long,
        env = "CONVEXCTL_COMPOSE_BIN",
        default_value = DEFAULT_COMPOSE_BIN,
        value_name = "bin",
        help = "Orchestration tool invocation (e.g. \"docker compose\")"
    )]
    pub compose_bin: String,

    #[arg(
        short = 'f',
        long,
        env = "CONVEXCTL_COMPOSE_FILE",
        value_name = "path",
        help = "Compose file passed to the orchestration tool"
    )]
    pub compose_file: Option<PathBuf>,

    #[arg(
        long,
        env = "CONVEXCTL_HEALTH_URL",
        default_value = DEFAULT_HEALTH_URL,
        value_name = "url",
        help = "Backend health endpoint polled after `up`"
    )]
    pub health_url: String,

    #[arg(
        long,
        env = "CONVEXCTL_HEALTH_TIMEOUT",
        default_value = DEFAULT_HEALTH_TIMEOUT,
        value_name = "duration",
        help = "How long to wait for the backend, in whole seconds (e.g. 60, 90s, 2m)"
    )]
    pub health_timeout: String,

    #[arg(long, help = "Do not poll the health endpoint after `up`")]
    pub skip_health_check: bool,

    #[arg(long, value_enum, value_name = "shell", help = "Print shell completions and exit")]
    pub completions: Option<Shell>,

    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        help = "Increase log verbosity (-v, -vv, -vvv)",
    )]
    pub verbose: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Command {
    /// Start Docker Compose services and wait for the Convex backend to be ready
    #[default]
    Up,
    /// Stop and remove all Docker Compose services
    Down,
    /// Show logs from all services (follow mode)
    Logs,
    /// Show current status of all services
    Status,
}
