use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level commands.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Rebuild the embedded templates of each file as one template document.
    Extract(ExtractArgs),
    /// List embedded template occurrences with their positions.
    List(ListArgs),
    /// Show the effective tag source map.
    Sources,
}

#[derive(Clone, Debug, Args)]
pub struct ExtractArgs {
    /// Script files to read.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Write `<stem>.hbs` per input into this directory instead of stdout.
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    /// Script files to read.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Order occurrences by source position instead of the configured order.
    #[arg(long)]
    pub sort: bool,
}
