use clap::Parser;

use convexctl::cli::Cli;
use convexctl::cmd::{self, CompletionsCommand, Context};
use convexctl::config::Settings;
use convexctl::error::DeployError;
use convexctl::output::{self, Console};

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(()) => 0,
        Err(err) => {
            let use_color = output::use_color();
            eprintln!("{}", err.format_detailed(use_color));
            err.exit_code()
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<(), DeployError> {
    let cli = Cli::try_parse().map_err(map_parse_error)?;

    init_tracing(cli.verbose)?;

    if let Some(shell) = cli.completions {
        return CompletionsCommand { shell }.run();
    }

    let settings = Settings::from_cli(&cli)?;
    tracing::debug!(compose = ?settings.compose, health = settings.health.is_some(), "settings resolved");

    let mut ctx = Context::from_settings(&settings, Console::stdio());
    cmd::dispatch(cli.command, &mut ctx).await
}

fn map_parse_error(err: clap::Error) -> DeployError {
    use clap::error::ErrorKind;
    if matches!(
        err.kind(),
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
    ) {
        let _ = err.print();
        std::process::exit(0);
    }
    DeployError::InvalidArgument(err.to_string())
}

fn init_tracing(verbose: u8) -> Result<(), DeployError> {
    use tracing_subscriber::EnvFilter;

    let filter = match std::env::var("RUST_LOG") {
        Ok(value) if !value.trim().is_empty() => EnvFilter::try_new(value)
            .map_err(|err| DeployError::Other(format!("Invalid RUST_LOG value: {}", err)))?,
        _ => {
            let level = match verbose {
                0 => "error",
                1 => "info",
                2 => "debug",
                _ => "trace",
            };
            EnvFilter::new(level)
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|err| DeployError::Other(format!("Failed to initialize logging: {}", err)))
}
