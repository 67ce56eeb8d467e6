//! wpdock CLI - validate a local WordPress instance config
//!
//! Usage: wpdock <COMMAND>
//!
//! Commands:
//!   validate  Check the config and print it with derived fields
//!   args      Print container runtime arguments (volumes and env vars)

mod ui;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use wpdock::config::{self, LoadOptions};
use wpdock::{validate, LocalFs, ValidatedConfig, WpdockError};

/// wpdock - validate a local WordPress instance config
#[derive(Parser, Debug)]
#[command(name = "wpdock")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Emit NDJSON events on stdout instead of human-readable output
    #[arg(long, global = true)]
    json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Treat unknown config keys as errors
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check the config and print it with derived fields
    Validate {
        /// Path to the config file (defaults to $WPDOCK_CONFIG or ./wpdock.json)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },

    /// Print container runtime arguments, one per line
    Args {
        /// Path to the config file (defaults to $WPDOCK_CONFIG or ./wpdock.json)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Yaml,
    Summary,
}

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    let mut config_file = None;
    if let Err(err) = run(cli, &mut config_file) {
        ui::error::print_error(&err, json, config_file.as_deref());
        std::process::exit(1);
    }
}

fn run(cli: Cli, config_file: &mut Option<PathBuf>) -> Result<()> {
    let reporter = ui::output::Reporter::new(cli.json, cli.verbose);
    let options = LoadOptions { strict: cli.strict }.with_env_overrides();

    let explicit = match &cli.command {
        Commands::Validate { config, .. } | Commands::Args { config } => config.clone(),
    };
    let cwd = std::env::current_dir()?;
    let path = config::discover(explicit.as_deref(), &cwd)?;
    *config_file = Some(path.clone());

    let loaded = config::load_with_warnings(&path, options)?;
    reporter.loaded(&loaded.path, &loaded.working_dir);
    reporter.config_warnings(&loaded.warnings);

    let validated = validate(&loaded.raw, &loaded.working_dir, &LocalFs::new())
        .map_err(WpdockError::from)?;
    reporter.validated(&validated);

    match cli.command {
        Commands::Validate { format, .. } => cmd_validate(&validated, format, cli.json),
        Commands::Args { .. } => cmd_args(&validated, cli.json),
    }
}

fn cmd_validate(config: &ValidatedConfig, format: OutputFormat, json: bool) -> Result<()> {
    if json {
        ui::json::emit(ui::json::result_event(config))?;
        return Ok(());
    }

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(config)?),
        OutputFormat::Yaml => print!("{}", serde_yaml_ng::to_string(config)?),
        OutputFormat::Summary => print!("{}", ui::output::summary(config)),
    }
    Ok(())
}

fn cmd_args(config: &ValidatedConfig, json: bool) -> Result<()> {
    if json {
        ui::json::emit(ui::json::args_event(config))?;
        return Ok(());
    }

    for arg in config.runtime_args() {
        println!("{}", arg);
    }
    Ok(())
}
