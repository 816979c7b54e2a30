pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::{BuildArgs, CliArgs, Commands, ConventionArg, ExtractArgs};
pub use handlers::{handle_build, handle_extract};
pub use output::{OutputFormat, OutputFormatter};
