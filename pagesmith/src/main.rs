//! pagesmith - static page builder
//!
//! A CLI tool that turns plain text annotated with directive lines into
//! styled HTML pages, either interactively or from a set of source files.

#![deny(unsafe_code)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use pagesmith::pipeline::{self, BuildOptions, Mode};
use pagesmith::wizard::Prompter;

/// Main entry point for the pagesmith CLI application
fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    }
}

/// Run the CLI application
fn run() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging (RUST_LOG still applies without --verbose)
    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Info);
    }
    logger.init();

    let options = BuildOptions {
        style_path: cli.style,
        save_style_path: cli.save_style,
        colors_path: cli.colors,
        template_path: cli.template,
        out_dir: cli.out_dir,
    };

    let mode = Mode::from_inputs(cli.files);
    let is_wizard = mode == Mode::Wizard;

    let stdin = std::io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), std::io::stdout());

    let written = pipeline::run(mode, &options, &mut prompter).with_context(|| {
        if is_wizard {
            "Failed to build page from the wizard".to_string()
        } else {
            "Failed to build pages from sources".to_string()
        }
    })?;

    if is_wizard {
        if let Some(path) = written.first() {
            println!("Your web page has been saved as {}", path.display());
        }
    } else if written.len() == 1 {
        println!("Your file has been saved.");
    } else {
        println!("Your files have been saved.");
    }

    Ok(())
}
