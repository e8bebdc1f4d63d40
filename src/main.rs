use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use psycenter::cli::{Cli, Commands, submit_command, validate_command};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Load configuration
    let config = psycenter::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    psycenter::observability::init_observability(
        "psycenter",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    let ok = match &cli.command {
        Commands::Validate(args) => validate_command(&config, args)?,
        Commands::Submit(args) => submit_command(&config, args).await?,
    };

    Ok(if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
