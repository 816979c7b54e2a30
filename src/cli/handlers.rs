//! Subcommand handlers. Each handler returns a process exit code so `main`
//! stays a thin dispatch layer.

use std::fs;

use anyhow::{Context, Result};
use tracing::{error, info};

use crate::catalog::{report, CatalogBuilder};
use crate::cli::commands::{BuildArgs, ConventionArg, ExtractArgs};
use crate::cli::output::OutputFormatter;
use crate::config::CatalogConfig;
use crate::extract::{
    extract_class_tools, extract_delimited_tools, extract_function_tools, ParsedModule,
};
use crate::record::ToolRecord;

/// Handles the `build` subcommand.
pub fn handle_build(args: BuildArgs) -> i32 {
    match run_build(&args) {
        Ok(count) => {
            info!(tools = count, "catalog written");
            0
        }
        Err(err) => {
            error!("Build failed: {:#}", err);
            1
        }
    }
}

fn run_build(args: &BuildArgs) -> Result<usize> {
    let config = CatalogConfig::from_file(&args.config)?;
    let records = CatalogBuilder::new(config).build()?;

    let out_dir = args.out_dir.clone().unwrap_or_else(|| ".".into());
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let report_path = out_dir.join("tools.txt");
    let mut report_file = fs::File::create(&report_path)
        .with_context(|| format!("failed to create {}", report_path.display()))?;
    report::write_text_report(&mut report_file, &records)?;

    let export_path = out_dir.join("tools.jsonl");
    let mut export_file = fs::File::create(&export_path)
        .with_context(|| format!("failed to create {}", export_path.display()))?;
    report::write_jsonl(&mut export_file, &records)?;

    Ok(records.len())
}

/// Handles the `extract` subcommand.
pub fn handle_extract(args: ExtractArgs) -> i32 {
    match run_extract(&args) {
        Ok(output) => {
            print!("{}", output);
            0
        }
        Err(err) => {
            error!("Extraction failed: {:#}", err);
            1
        }
    }
}

fn run_extract(args: &ExtractArgs) -> Result<String> {
    let records = extract_file(args)?;
    OutputFormatter::new(args.format.into()).format_records(&records)
}

/// Extracts records from a single file. Unlike a catalog build, a parse
/// failure here is fatal: the user asked about exactly this file.
fn extract_file(args: &ExtractArgs) -> Result<Vec<ToolRecord>> {
    let source = fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let module = ParsedModule::parse(source, &args.file.display().to_string())?;

    let mut records = match args.convention {
        ConventionArg::Classes => extract_class_tools(&module),
        ConventionArg::Functions => extract_function_tools(&module),
        ConventionArg::Delimited => extract_delimited_tools(&module),
    };

    if let Some(collection) = &args.collection {
        records = records
            .into_iter()
            .map(|record| record.namespaced(collection))
            .collect();
    }

    Ok(records)
}
