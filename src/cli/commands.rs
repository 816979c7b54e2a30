use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::CollectionKind;

/// Static extractor of tool metadata from Python tool libraries
#[derive(Parser, Debug)]
#[command(
    name = "toolharvest",
    about = "Static extractor of tool metadata from Python tool libraries",
    version,
    long_about = "toolharvest statically analyzes Python tool libraries (classes with a \
                  _run method, functions with structured docstrings) and tabular sources, \
                  and aggregates the extracted records into one normalized tool catalog. \
                  No analyzed code is ever executed."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Verbose output (debug logging)")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Harvest all configured collections into a catalog",
        long_about = "Reads a catalog configuration, extracts tool records from every \
                      collection, and writes the combined report (tools.txt) and export \
                      (tools.jsonl) to the output directory.\n\n\
                      Examples:\n  \
                      toolharvest build --config catalog.toml\n  \
                      toolharvest build --config catalog.toml --out-dir out"
    )]
    Build(BuildArgs),

    #[command(
        about = "Extract tool records from a single Python file",
        long_about = "Parses one file with the given convention and prints the extracted \
                      records.\n\n\
                      Examples:\n  \
                      toolharvest extract tools.py --convention classes\n  \
                      toolharvest extract tools.py --convention functions --format jsonl"
    )]
    Extract(ExtractArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct BuildArgs {
    #[arg(
        short = 'c',
        long,
        value_name = "FILE",
        help = "Catalog configuration file (TOML)"
    )]
    pub config: PathBuf,

    #[arg(
        short = 'o',
        long,
        value_name = "DIR",
        help = "Output directory for tools.txt and tools.jsonl (defaults to current directory)"
    )]
    pub out_dir: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct ExtractArgs {
    #[arg(value_name = "FILE", help = "Python file to extract from")]
    pub file: PathBuf,

    #[arg(long, value_enum, help = "Extraction convention to apply")]
    pub convention: ConventionArg,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,

    #[arg(
        long,
        value_name = "NAME",
        help = "Namespace records with this collection name"
    )]
    pub collection: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConventionArg {
    /// Classes with name/description attributes and a _run method
    Classes,
    /// Functions with Name:/Description:/Parameters:/Returns: docstrings
    Functions,
    /// Functions with Args:/Returns: delimited docstrings
    Delimited,
}

impl From<ConventionArg> for CollectionKind {
    fn from(arg: ConventionArg) -> Self {
        match arg {
            ConventionArg::Classes => CollectionKind::Classes,
            ConventionArg::Functions => CollectionKind::Functions,
            ConventionArg::Delimited => CollectionKind::Delimited,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Jsonl,
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Jsonl => super::output::OutputFormat::Jsonl,
            OutputFormatArg::Human => super::output::OutputFormat::Human,
        }
    }
}
