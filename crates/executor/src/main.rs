pub mod analyzer;
pub mod config;
pub mod csv_source;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod producer;
pub mod simulator;
pub mod summary;
pub mod text_source;
pub mod types;
pub mod writer;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

use allpaths_core::loader::load_graph;
use allpaths_core::{ClosureSolver, FloydWarshall};
use crate::config::Config;
use crate::error::Error;
use crate::types::DataSource;

#[derive(Parser, Debug)]
#[command(
    name = "allpaths",
    version,
    about = "All-pairs shortest paths with every optimal route and negative-cycle detection"
)]
struct Cli {
    /// Configuration file layered over the built-in defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a step-by-step closure trace for a batch of graphs
    Trace {
        /// Where graphs come from
        #[arg(long, value_enum, default_value_t = SourceKind::Text)]
        source: SourceKind,

        /// Directory or file to read (text: defaults to the configured graphs dir)
        path: Option<PathBuf>,

        /// Output file (defaults to the configured trace file)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print matrices, cycle status and every shortest route of one graph
    Report { file: PathBuf },

    /// Print every shortest route between two vertices
    Paths {
        file: PathBuf,
        start: usize,
        end: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SourceKind {
    Text,
    Csv,
    Sim,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match crate::config::load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    logging::init_tracing(&config.logging.filter);

    match run(cli.command, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command, config: &Config) -> Result<(), Error> {
    match command {
        Command::Trace {
            source,
            path,
            output,
        } => {
            let source = data_source(source, path, config)?;
            let output = output.unwrap_or_else(|| config.trace.output_file.clone());
            let written = pipeline::run_trace_pipeline(&source, output.clone(), config).await?;
            println!("Traced {} graph(s) into {}", written, output.display());
        }
        Command::Report { file } => {
            let graph = FloydWarshall.close(load_graph(&file)?);
            println!("{}", summary::graph_report(&graph)?);
        }
        Command::Paths { file, start, end } => {
            let graph = FloydWarshall.close(load_graph(&file)?);
            println!("{}", summary::pair_report(&graph, start, end)?);
        }
    }
    Ok(())
}

/// Parse command-line source selection into a data source
fn data_source(
    kind: SourceKind,
    path: Option<PathBuf>,
    config: &Config,
) -> Result<DataSource, Error> {
    match kind {
        SourceKind::Text => Ok(DataSource::Text(
            path.unwrap_or_else(|| config.trace.graphs_dir.clone()),
        )),
        SourceKind::Csv => path
            .map(DataSource::Csv)
            .ok_or_else(|| Error::Usage("CSV path required for --source csv".to_string())),
        SourceKind::Sim => Ok(DataSource::Sim),
    }
}
