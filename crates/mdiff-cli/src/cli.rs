use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "mdiff",
    about = "Line diff by Myers shortest edit script",
    version,
)]
pub struct Cli {
    /// Original file
    pub old: PathBuf,

    /// Changed file
    pub new: PathBuf,

    /// Emit a unified patch instead of the flat listing
    #[arg(short, long)]
    pub unified: bool,

    /// Context lines around each change in unified output
    #[arg(short = 'U', long, default_value_t = 3)]
    pub context: usize,

    /// Label for the old side of the patch header (defaults to the path)
    #[arg(long)]
    pub label_old: Option<String>,

    /// Label for the new side of the patch header (defaults to the path)
    #[arg(long)]
    pub label_new: Option<String>,

    /// Leave modification times out of the patch header
    #[arg(long)]
    pub no_timestamps: bool,

    /// Colorize added, removed and hunk lines
    #[arg(long)]
    pub color: bool,

    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
