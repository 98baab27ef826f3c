//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - `run()` function to execute the command

use crate::app::AppContext;
use crate::cli::Commands;
use crate::error::Result;

pub mod parse;
pub mod populate;

pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Parse(args) => parse::run(ctx, args),
        Commands::Populate(args) => populate::run(ctx, args),
    }
}

/// Print `value` as compact JSON in robot mode, pretty JSON otherwise.
pub(crate) fn emit_json<T: serde::Serialize>(ctx: &AppContext, value: &T) -> Result<()> {
    let rendered = if ctx.robot {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{rendered}");
    Ok(())
}
