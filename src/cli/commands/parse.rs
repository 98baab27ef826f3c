//! linto-utility parse - Parse a training corpus

use std::path::PathBuf;

use clap::Args;

use crate::app::AppContext;
use crate::cli::commands::emit_json;
use crate::error::Result;
use crate::parser::CorpusParser;

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Application name (stored as `app:<name>`)
    pub application: String,

    /// Corpus markdown file
    pub file: PathBuf,

    /// Print counts instead of the full document
    #[arg(long)]
    pub summary: bool,
}

pub fn run(ctx: &AppContext, args: &ParseArgs) -> Result<()> {
    let doc = CorpusParser::process(&args.application, &args.file)?;

    if !args.summary {
        return emit_json(ctx, &doc);
    }

    if ctx.robot {
        return emit_json(
            ctx,
            &serde_json::json!({
                "applicationName": doc.application_name,
                "sentences": doc.sentences.len(),
                "entities": doc.entity_count(),
                "intents": doc.intents(),
                "languages": doc.languages(),
            }),
        );
    }

    println!("{}", doc.application_name);
    println!("  sentences: {}", doc.sentences.len());
    println!("  entities:  {}", doc.entity_count());
    println!(
        "  intents:   {}",
        doc.intents().into_iter().collect::<Vec<_>>().join(", ")
    );
    println!(
        "  languages: {}",
        doc.languages().into_iter().collect::<Vec<_>>().join(", ")
    );
    Ok(())
}
