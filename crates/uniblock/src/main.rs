mod cli;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use uniblock_core::{AccessManager, Action, Controller, Effect, Intent};

use crate::cli::Cli;
use crate::error::{CliError, exit_code};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    match run(&cli).await {
        Ok(effect) => {
            let color = output::should_color(&cli.global.color);
            let rendered = output::render_effect(&effect, &cli.global.output, color);
            output::print_output(&rendered, cli.global.quiet);
            std::process::exit(exit_code::SUCCESS);
        }
        Err(err) => {
            let code = err.exit_code();
            eprintln!("{:?}", miette::Report::new(err));
            std::process::exit(code);
        }
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: &Cli) -> Result<Effect, CliError> {
    // Reject a bad action before touching the network.
    let action = Action::parse(&cli.action)?;
    let intent = Intent::new(cli.device.clone(), action);

    let settings = uniblock_config::load_settings(cli.global.config.as_deref())?;
    let config = settings.to_controller_config()?;
    tracing::debug!(url = %config.url, site = %config.site, "loaded settings");

    let controller = Controller::connect(&config).await?;
    let manager = AccessManager::new(controller);

    tracing::debug!(device = %intent.target, action = %intent.action, "applying intent");
    let result = manager.apply(&intent).await;

    manager.client().disconnect().await;
    result.map_err(CliError::from)
}
