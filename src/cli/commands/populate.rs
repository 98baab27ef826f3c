//! linto-utility populate - Upload training data

use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::app::AppContext;
use crate::cli::commands::emit_json;
use crate::error::Result;
use crate::populate::{inject_lm, inject_nlu};

#[derive(Args, Debug)]
pub struct PopulateArgs {
    /// Destination service
    #[arg(value_enum)]
    pub target: Target,

    /// Application name (stored as `app:<name>`)
    pub application: String,

    /// Corpus markdown file
    pub file: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Target {
    Nlu,
    Lm,
}

impl Target {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Nlu => "nlu",
            Self::Lm => "lm",
        }
    }
}

pub fn run(ctx: &AppContext, args: &PopulateArgs) -> Result<()> {
    let uploaded = match args.target {
        Target::Nlu => inject_nlu(&ctx.config.nlu, &args.application, &args.file)?,
        Target::Lm => inject_lm(&ctx.config.lm, &args.application, &args.file)?,
    };

    if ctx.robot {
        return emit_json(
            ctx,
            &serde_json::json!({ "target": args.target.as_str(), "uploaded": uploaded }),
        );
    }

    if uploaded {
        println!("{} training data uploaded for {}", args.target.as_str(), args.application);
    } else {
        println!(
            "{} upload skipped: target not configured",
            args.target.as_str()
        );
    }
    Ok(())
}
