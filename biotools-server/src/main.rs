use biotools_core::{config, logging, BiotoolsError};
use biotools_server::cli::{Cli, Commands};
use clap::Parser;
use colored::*;
use std::process;
use tracing::info;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);

        // Use appropriate exit codes based on error type
        let exit_code = match e.downcast_ref::<BiotoolsError>() {
            Some(BiotoolsError::Configuration(_)) => 2,
            Some(BiotoolsError::Io(_)) => 3,
            _ => 1,
        };
        process::exit(exit_code);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.resolve_config()?;

    match cli.command.unwrap_or_default() {
        Commands::Serve => {
            logging::init_logging(&config.logging, cli.verbose)?;

            let workers = if config.server.workers == 0 {
                num_cpus::get()
            } else {
                config.server.workers
            };
            info!(workers, "Starting runtime");

            let runtime = tokio::runtime::Builder::new_multi_thread()
                .worker_threads(workers)
                .enable_all()
                .build()?;
            runtime.block_on(biotools_server::serve(config))
        }
        Commands::ShowConfig => {
            print!("{}", config::to_toml_string(&config)?);
            Ok(())
        }
    }
}
