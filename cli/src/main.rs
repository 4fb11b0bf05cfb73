use clap::Parser;

mod commands;
mod logging;

use commands::cli;
use oddjobs_core::config;
use oddjobs_core::error;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), error::CliError> {
    let args = cli::Args::parse();
    let cfg = config::load(args.config.as_deref())?;
    let guard = logging::init(&cfg.log)?;

    let exit = dispatch(args.command, &cfg).await?;

    drop(guard);
    if exit != 0 {
        std::process::exit(exit);
    }
    Ok(())
}

async fn dispatch(cmd: cli::Commands, cfg: &config::AppConfig) -> Result<i32, error::CliError> {
    match cmd {
        cli::Commands::Remap(remap_args) => commands::remap::run(remap_args, cfg)?,
        cli::Commands::Partition(partition_args) => commands::partition::run(partition_args, cfg),
        cli::Commands::Verify(verify_args) => commands::verify::run(verify_args, cfg).await?,
        cli::Commands::Solve => return Ok(commands::solve::run()),
        cli::Commands::Generate(generate_args) => commands::generate::run(generate_args)?,
    }
    Ok(0)
}
