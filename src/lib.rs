pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod parser;
pub mod populate;
pub mod skills;

pub use error::{MsError, Result};

/// Package version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
