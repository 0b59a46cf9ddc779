use std::path::PathBuf;

use clap::Parser;

/// Tokenize TEAL assembly
#[derive(Debug, Parser)]
#[command(version)]
pub struct Cli {
    /// Scan a file instead of reading lines interactively
    pub script: Option<PathBuf>,

    /// Leave comment tokens out of the output
    #[arg(long)]
    pub no_comments: bool,
}
