use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli_args;
mod cli_command;
mod modules;


use crate::cli_args::Cli;
use crate::cli_command::handle_command;
use crate::modules::system::resolve_db_settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;
    let settings = resolve_db_settings(&cli.db)?;
    let reports_failure = cli.command.reports_failure();

    if let Err(err) = handle_command(cli.command, &settings).await {
        eprintln!("❌ Error: {err:#}");
        if reports_failure {
            std::process::exit(1);
        }
    }

    Ok(())
}

fn init_logging(verbosity: u8) -> anyhow::Result<()> {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter)?)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
