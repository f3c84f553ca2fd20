use std::path::PathBuf;

use clap::{command, Parser};

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[clap(help = "Path to a traversal JSON file. Reads stdin when missing.")]
    pub traversal: Option<PathBuf>,

    #[clap(short, long, help = "Path to a JSON config file.")]
    pub config: Option<PathBuf>,

    #[clap(long, help = "Skip all optimizations.")]
    pub no_optimizations: bool,

    #[clap(long, help = "Print the optimized traversal as JSON instead of a tree.")]
    pub json: bool,

    #[clap(long, help = "Log as JSON lines.")]
    pub log_json: bool,
}

#[must_use]
pub fn parse_args() -> Args {
    Args::parse()
}
