//! Command line interface
//!
//! | Command | Description |
//! |---------|-------------|
//! | `cube drivers [--json]` | List linked writer and index drivers |
//! | `cube check [--app NAME] [--no-validate]` | Resolve the configured index driver and connect |

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use cube_application::registry::{
    index_cache, list_index_drivers, list_writer_drivers, writer_cache,
};
use cube_domain::error::Result;
use cube_infrastructure::constants::DEFAULT_LOG_LEVEL;
use cube_infrastructure::error_ext::ErrorContext;
use cube_infrastructure::logging::init_logging;
use cube_infrastructure::{ConfigLoader, LoggingConfig};
use serde_json::json;
use tracing::debug;

/// Command line interface for the datacube driver registry
#[derive(Parser, Debug)]
#[command(name = "cube")]
#[command(about = "Datacube driver registry diagnostics")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Configuration environment to use
    #[arg(short = 'E', long = "env", global = true)]
    pub environment: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = DEFAULT_LOG_LEVEL, global = true)]
    pub log_level: String,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// List writer and index drivers
    Drivers {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Resolve the configured index driver and connect to the index
    Check {
        /// Application name reported to the index
        #[arg(long = "app")]
        application_name: Option<String>,

        /// Defer validation of the connection settings
        #[arg(long)]
        no_validate: bool,
    },
}

/// Initialise logging and run the command, printing to stdout
pub fn run(cli: &Cli) -> Result<()> {
    init_logging(
        LoggingConfig::default()
            .with_level(&cli.log_level)
            .with_json_format(cli.json_logs),
    )?;
    let stdout = std::io::stdout();
    execute(cli, &mut stdout.lock())
}

/// Run the command, writing its output to `out`
pub fn execute<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    debug!(command = ?cli.command, "Running command");
    match &cli.command {
        Command::Drivers { json } => {
            let rendered = if *json {
                render_drivers_json()?
            } else {
                render_drivers()?
            };
            out.write_all(rendered.as_bytes())
                .io_context("Failed to write driver list")
        }
        Command::Check {
            application_name,
            no_validate,
        } => {
            let config = config_loader(cli).load()?;
            let environment = config.environment.clone();
            let index = cube_infrastructure::index_connect(
                Some(config),
                application_name.as_deref(),
                !no_validate,
            )?;
            writeln!(out, "Environment:  {environment}")
                .and_then(|()| writeln!(out, "Index driver: {}", index.driver_name()))
                .and_then(|()| writeln!(out, "Index URL:    {}", index.url()))
                .io_context("Failed to write check result")
        }
    }
}

fn config_loader(cli: &Cli) -> ConfigLoader {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    if let Some(environment) = &cli.environment {
        loader = loader.with_environment(environment);
    }
    loader
}

/// Human-readable listing of every driver and lookup name
pub fn render_drivers() -> Result<String> {
    let writer_names = writer_cache()?.names();
    let index_names = index_cache()?.names();

    let mut rendered = String::from("Writer drivers:\n");
    for (name, description) in list_writer_drivers() {
        rendered.push_str(&format!("  {name:<12} {description}\n"));
    }
    rendered.push_str(&format!("  names: {}\n", writer_names.join(", ")));

    rendered.push_str("Index drivers:\n");
    for (name, description) in list_index_drivers() {
        rendered.push_str(&format!("  {name:<12} {description}\n"));
    }
    rendered.push_str(&format!("  names: {}\n", index_names.join(", ")));
    Ok(rendered)
}

/// JSON listing of every driver and lookup name
pub fn render_drivers_json() -> Result<String> {
    let describe = |drivers: Vec<(&'static str, &'static str)>| {
        drivers
            .into_iter()
            .map(|(name, description)| json!({ "name": name, "description": description }))
            .collect::<Vec<_>>()
    };

    let document = json!({
        "writers": {
            "drivers": describe(list_writer_drivers()),
            "names": writer_cache()?.names(),
        },
        "index": {
            "drivers": describe(list_index_drivers()),
            "names": index_cache()?.names(),
        },
    });

    let mut rendered =
        serde_json::to_string_pretty(&document).context("Failed to serialize driver list")?;
    rendered.push('\n');
    Ok(rendered)
}
