//! iotwire CLI - Inspect and normalize IoT service model documents
//!
//! Commands:
//! - `iotwire models` - List every modeled type
//! - `iotwire describe` - Show the fields of a modeled type
//! - `iotwire schema` - Generate JSON Schema for modeled types
//! - `iotwire normalize` - Re-marshal a wire document through a model's codec

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use iotwire_json::JsonCodec;
use iotwire_model::Catalog;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

mod json_schema;
mod models;
mod normalize;
mod settings;

#[derive(Parser)]
#[command(name = "iotwire")]
#[command(author, version, about = "Inspect and normalize IoT service model documents", long_about = None)]
struct Cli {
    /// Configuration file (.toml or .json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every modeled type
    Models,

    /// Show the fields of a modeled type
    Describe {
        /// Model name (e.g., CreateThingRequest)
        model: String,
    },

    /// Generate JSON Schema for modeled types
    Schema {
        /// Only this model and the models it refers to
        #[arg(short, long)]
        model: Option<String>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Re-marshal a wire document through a model's codec
    Normalize {
        /// Model name (e.g., ListThingsResult)
        model: String,

        /// Input file (default: stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let pretty = matches!(cli.command, Commands::Normalize { pretty: true, .. });
    let config = settings::load(cli.config.as_deref(), cli.log_level.as_deref(), pretty)?;
    iotwire_logging::init_logging(config.log_level()?);

    let catalog = Catalog::global();

    match cli.command {
        Commands::Models => {
            models::list(catalog, &mut open_output(None)?)?;
        }
        Commands::Describe { model } => {
            models::describe(catalog, &model, &mut open_output(None)?)?;
        }
        Commands::Schema { model, output } => {
            json_schema::run(catalog, model.as_deref(), &mut open_output(output.as_deref())?)?;
        }
        Commands::Normalize {
            model,
            input,
            output,
            pretty: _,
        } => {
            let codec = JsonCodec::from_config(&config);
            let mut input = open_input(input.as_deref())?;
            let mut output = open_output(output.as_deref())?;
            normalize::run(catalog, &codec, &model, &mut input, &mut output)?;
        }
    }

    Ok(())
}

fn open_input(path: Option<&Path>) -> Result<Box<dyn Read>> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open input {}", path.display()))?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create output {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}
