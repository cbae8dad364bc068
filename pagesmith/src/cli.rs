//! Command-line interface definitions for pagesmith

use clap::Parser;
use std::path::PathBuf;

/// CLI structure for the pagesmith application
///
/// Without any FILES the interactive wizard builds a single page. With FILES
/// every source becomes its own page and all pages link to each other.
#[derive(Parser, Debug)]
#[command(name = "pagesmith")]
#[command(version)]
#[command(about = "Build static HTML pages from directive-annotated text", long_about = None)]
pub struct Cli {
    /// Source files or directories of .txt sources (omit to run the wizard)
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Load colors and font from a TOML style file instead of prompting
    #[arg(short, long, value_name = "FILE")]
    pub style: Option<PathBuf>,

    /// Save the style used for this run as TOML
    #[arg(long, value_name = "FILE")]
    pub save_style: Option<PathBuf>,

    /// Legal color list, one `name:#hex` group per line
    #[arg(short, long, value_name = "FILE")]
    pub colors: Option<PathBuf>,

    /// Style template with @BACKCOLOR, @FONTCOLOR, @HEADCOLOR and @FONTSTYLE placeholders
    #[arg(short, long, value_name = "FILE")]
    pub template: Option<PathBuf>,

    /// Write pages into this directory instead of next to their sources
    #[arg(short, long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
