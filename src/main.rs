use toolharvest::cli::{handle_build, handle_extract, CliArgs, Commands};
use toolharvest::util::logging::{self, LoggingConfig};
use toolharvest::VERSION;

use clap::Parser;
use std::env;
use tracing::debug;

fn main() {
    let args = CliArgs::parse();
    init_logging_from_args(&args);

    debug!("toolharvest v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = match args.command {
        Commands::Build(build_args) => handle_build(build_args),
        Commands::Extract(extract_args) => handle_extract(extract_args),
    };

    std::process::exit(exit_code);
}

fn init_logging_from_args(args: &CliArgs) {
    let level = if let Some(level_str) = &args.log_level {
        logging::parse_level(level_str)
    } else if args.verbose {
        tracing::Level::DEBUG
    } else if args.quiet {
        tracing::Level::ERROR
    } else {
        let level_str = env::var("TOOLHARVEST_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        logging::parse_level(&level_str)
    };

    let use_json = env::var("TOOLHARVEST_LOG_JSON")
        .ok()
        .and_then(|v| v.parse::<bool>().ok())
        .unwrap_or(false);

    logging::init_logging(LoggingConfig {
        level,
        use_json,
        ..Default::default()
    });
}
