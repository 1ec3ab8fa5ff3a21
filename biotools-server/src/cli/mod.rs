use biotools_core::config::{load_config, Config, LogFormat};
use biotools_core::BiotoolsResult;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "biotools",
    version,
    about = "Biological sequence processing API",
    long_about = "Biotools serves reverse complement, transcription, reverse transcription, \
                  translation, case conversion and sequence statistics over HTTP, for single \
                  sequences and FASTA batches."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (TOML)
    #[arg(short, long, global = true, env = "BIOTOOLS_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log output format
    #[arg(long, global = true, value_enum)]
    pub log_format: Option<LogFormat>,

    #[command(flatten)]
    pub server: ServeArgs,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP server (default)
    Serve,

    /// Print the effective configuration as TOML
    ShowConfig,
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Serve
    }
}

#[derive(Args, Debug, Default, Clone)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long, global = true, env = "BIOTOOLS_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, global = true, env = "BIOTOOLS_PORT")]
    pub port: Option<u16>,

    /// Number of runtime worker threads (0 = all available)
    #[arg(short = 'j', long, global = true)]
    pub workers: Option<usize>,
}

impl Cli {
    /// Configuration file (or defaults) with command line overrides applied
    pub fn resolve_config(&self) -> BiotoolsResult<Config> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => Config::default(),
        };

        if let Some(format) = self.log_format {
            config.logging.format = format;
        }

        self.server.apply(&mut config);

        Ok(config)
    }
}

impl ServeArgs {
    fn apply(&self, config: &mut Config) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(workers) = self.workers {
            config.server.workers = workers;
        }
    }
}
