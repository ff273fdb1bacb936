use std::sync::Arc;

use crate::cli::Command;
use crate::config::Settings;
use crate::error::Result;
use crate::health::HealthPoller;
use crate::net::HttpProbe;
use crate::output::Console;
use crate::runner::{ComposeRunner, ProcessRunner};

pub mod completions;
pub mod down;
pub mod logs;
pub mod status;
pub mod up;

pub use completions::CompletionsCommand;
pub use down::DownCommand;
pub use logs::LogsCommand;
pub use status::StatusCommand;
pub use up::UpCommand;

/// Capabilities shared by the handlers. `health` is absent when the stack
/// cannot be health-checked.
pub struct Context {
    pub runner: Arc<dyn ComposeRunner>,
    pub health: Option<HealthPoller>,
    pub console: Console,
}

impl Context {
    pub fn from_settings(settings: &Settings, console: Console) -> Self {
        let runner: Arc<dyn ComposeRunner> = Arc::new(ProcessRunner::new(&settings.compose));
        let health = settings.health.as_ref().map(|health| {
            let probe = Arc::new(HttpProbe::new(health.uri.clone(), health.request_timeout));
            HealthPoller::new(probe, health.budget_secs, health.interval)
        });
        Self {
            runner,
            health,
            console,
        }
    }
}

pub async fn dispatch(command: Command, ctx: &mut Context) -> Result<()> {
    tracing::debug!(?command, "dispatching");
    match command {
        Command::Up => UpCommand::run(ctx).await,
        Command::Down => DownCommand::run(ctx).await,
        Command::Logs => LogsCommand::run(ctx).await,
        Command::Status => StatusCommand::run(ctx).await,
    }
}
