use crate::cli::Cli;
use crate::config::Config;
use crate::error::Result;

/// Resolved state shared by CLI commands.
#[derive(Debug)]
pub struct AppContext {
    pub config: Config,
    pub robot: bool,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = Config::load(cli.config.as_deref())?;
        Ok(Self {
            config,
            robot: cli.robot,
        })
    }
}
