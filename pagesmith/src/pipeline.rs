//! Page generation pipeline
//!
//! This module orchestrates a run in one of two modes:
//! 1. **Wizard**: prompts build a single page, saved as `index.html`
//! 2. **Website**: every source file becomes one page, all pages linked
//!    together through a link bar
//!
//! Sources are processed strictly one after another.

use crate::colors::{ColorError, ColorSet};
use crate::html_exporter::{self, HtmlExportError, PageContext};
use crate::source_model::{self, FileLink, SourceError};
use crate::style_config::{StyleConfig, StyleConfigError};
use crate::templates;
use crate::wizard::{PromptError, Prompter};
use std::collections::HashMap;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// Output file written in wizard mode
pub const WIZARD_OUTPUT: &str = "index.html";

/// Extension of source files picked up from directories
const SOURCE_EXTENSION: &str = "txt";

/// How a run produces its pages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Build one page interactively
    Wizard,
    /// Build one page per source, in the given order
    Website(Vec<PathBuf>),
}

impl Mode {
    /// Pick the mode from the positional inputs
    pub fn from_inputs(inputs: Vec<PathBuf>) -> Self {
        if inputs.is_empty() {
            Mode::Wizard
        } else {
            Mode::Website(inputs)
        }
    }
}

/// Options shared by both modes
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Load the style from this TOML file instead of prompting
    pub style_path: Option<PathBuf>,

    /// Save the style used for the run to this TOML file
    pub save_style_path: Option<PathBuf>,

    /// Legal color list (embedded list when absent)
    pub colors_path: Option<PathBuf>,

    /// Style template (embedded template when absent)
    pub template_path: Option<PathBuf>,

    /// Directory for generated pages (next to each source when absent)
    pub out_dir: Option<PathBuf>,
}

/// Errors that can occur during a run
#[derive(Error, Debug)]
pub enum BuildError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("Style file {path}: {source}", path = .path.display())]
    Style {
        path: PathBuf,
        #[source]
        source: StyleConfigError,
    },

    #[error(transparent)]
    Colors(#[from] ColorError),

    #[error("Failed to read style template {path}: {source}", path = .path.display())]
    Template {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error(transparent)]
    Export(#[from] HtmlExportError),

    #[error("Failed to scan {path}: {source}", path = .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Source path has no file name: {}", .0.display())]
    InvalidSourcePath(PathBuf),

    #[error("No source files found")]
    NoSources,

    #[error("{} and {} would both be written to {}", .first.display(), .second.display(), .output.display())]
    DuplicateOutput {
        first: PathBuf,
        second: PathBuf,
        output: PathBuf,
    },
}

/// Run the pipeline in the given mode
///
/// # Parameters
/// * `mode` - Wizard or website mode
/// * `options` - Style, template, color and output options
/// * `prompter` - Source of answers for any questions asked
///
/// # Returns
/// * `Ok(Vec<PathBuf>)` - Paths of the written pages, in order
/// * `Err(BuildError)` - Error reading, prompting or writing
pub fn run<R: BufRead, W: Write>(
    mode: Mode,
    options: &BuildOptions,
    prompter: &mut Prompter<R, W>,
) -> Result<Vec<PathBuf>, BuildError> {
    match mode {
        Mode::Wizard => run_wizard(options, prompter).map(|path| vec![path]),
        Mode::Website(inputs) => run_website(&inputs, options, prompter),
    }
}

/// Build a single page from prompts
fn run_wizard<R: BufRead, W: Write>(
    options: &BuildOptions,
    prompter: &mut Prompter<R, W>,
) -> Result<PathBuf, BuildError> {
    let colors = load_colors(options)?;
    let known_style = load_style(options)?;
    let template = load_template(options)?;

    let (document, style) = prompter.run_wizard(&colors, known_style)?;
    save_style(options, &style)?;

    let output = match &options.out_dir {
        Some(dir) => dir.join(WIZARD_OUTPUT),
        None => PathBuf::from(WIZARD_OUTPUT),
    };

    let context = PageContext {
        style: &style,
        template: &template,
        links: &[],
    };
    html_exporter::to_html(&document, &context, &output)?;

    Ok(output)
}

/// Build one page per source file
fn run_website<R: BufRead, W: Write>(
    inputs: &[PathBuf],
    options: &BuildOptions,
    prompter: &mut Prompter<R, W>,
) -> Result<Vec<PathBuf>, BuildError> {
    let sources = expand_sources(inputs)?;
    if sources.is_empty() {
        return Err(BuildError::NoSources);
    }
    log::info!("Building {} pages", sources.len());

    let outputs = sources
        .iter()
        .map(|source| output_path(source, options.out_dir.as_deref()))
        .collect::<Result<Vec<_>, _>>()?;
    check_distinct_outputs(&sources, &outputs)?;

    // Links come from every source's first line before any page is parsed
    let links = collect_links(&sources, &outputs)?;

    let style = match load_style(options)? {
        Some(style) => style,
        None => {
            let colors = load_colors(options)?;
            prompter.collect_style(&colors)?
        }
    };
    save_style(options, &style)?;

    let template = load_template(options)?;
    let context = PageContext {
        style: &style,
        template: &template,
        links: &links,
    };

    for (source, output) in sources.iter().zip(&outputs) {
        let document = source_model::parse_file(source)?;
        log::info!(
            "{} -> {} ({:?})",
            source.display(),
            output.display(),
            document.page_title
        );
        html_exporter::to_html(&document, &context, output)?;
    }

    Ok(outputs)
}

/// Expand directory inputs into the source files they contain
///
/// Files are kept as given. Directories contribute the `.txt` files directly
/// inside them, sorted by file name. Subdirectories are not searched.
pub fn expand_sources(inputs: &[PathBuf]) -> Result<Vec<PathBuf>, BuildError> {
    let mut sources = Vec::new();

    for input in inputs {
        if !input.is_dir() {
            sources.push(input.clone());
            continue;
        }

        for entry in WalkDir::new(input)
            .max_depth(1)
            .follow_links(false)
            .sort_by_file_name() {
            let entry = entry.map_err(|source| BuildError::Walk {
                path: input.clone(),
                source,
            })?;
            let path = entry.path();
            if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some(SOURCE_EXTENSION)
            {
                sources.push(path.to_path_buf());
            }
        }
    }

    Ok(sources)
}

/// Output path for a source: its extension replaced by `.html`
///
/// # Parameters
/// * `source` - Source file path
/// * `out_dir` - Optional directory receiving all pages
///
/// # Returns
/// * `Ok(PathBuf)` - Where the page is written
/// * `Err(BuildError)` - The source path has no file name
pub fn output_path(source: &Path, out_dir: Option<&Path>) -> Result<PathBuf, BuildError> {
    let file_name = source
        .file_name()
        .ok_or_else(|| BuildError::InvalidSourcePath(source.to_path_buf()))?;

    let path = match out_dir {
        Some(dir) => dir.join(file_name),
        None => source.to_path_buf(),
    };
    Ok(path.with_extension("html"))
}

/// Fail if two sources map to the same output file
///
/// Links name only the output file, so the pages must also be told apart by
/// file name.
pub fn check_distinct_outputs(sources: &[PathBuf], outputs: &[PathBuf]) -> Result<(), BuildError> {
    let mut seen: HashMap<&std::ffi::OsStr, usize> = HashMap::new();

    for (index, output) in outputs.iter().enumerate() {
        let name = output
            .file_name()
            .ok_or_else(|| BuildError::InvalidSourcePath(sources[index].clone()))?;
        if let Some(&first) = seen.get(name) {
            return Err(BuildError::DuplicateOutput {
                first: sources[first].clone(),
                second: sources[index].clone(),
                output: output.clone(),
            });
        }
        seen.insert(name, index);
    }

    Ok(())
}

/// Build the link list from each source's title and output file name
pub fn collect_links(sources: &[PathBuf], outputs: &[PathBuf]) -> Result<Vec<FileLink>, BuildError> {
    sources
        .iter()
        .zip(outputs)
        .map(|(source, output)| -> Result<FileLink, BuildError> {
            let display_name = source_model::read_page_title(source)?;
            let target_file = output
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .ok_or_else(|| BuildError::InvalidSourcePath(source.clone()))?;
            Ok(FileLink {
                display_name,
                target_file,
            })
        })
        .collect()
}

fn load_colors(options: &BuildOptions) -> Result<ColorSet, BuildError> {
    match &options.colors_path {
        Some(path) => Ok(ColorSet::load(path)?),
        None => Ok(ColorSet::default()),
    }
}

fn load_style(options: &BuildOptions) -> Result<Option<StyleConfig>, BuildError> {
    options
        .style_path
        .as_ref()
        .map(|path| {
            StyleConfig::load(path).map_err(|source| BuildError::Style {
                path: path.clone(),
                source,
            })
        })
        .transpose()
}

fn save_style(options: &BuildOptions, style: &StyleConfig) -> Result<(), BuildError> {
    if let Some(path) = &options.save_style_path {
        style.save(path).map_err(|source| BuildError::Style {
            path: path.clone(),
            source,
        })?;
        log::info!("Saved style to {}", path.display());
    }
    Ok(())
}

fn load_template(options: &BuildOptions) -> Result<String, BuildError> {
    templates::load_style_template(options.template_path.as_deref()).map_err(|source| {
        BuildError::Template {
            path: options.template_path.clone().unwrap_or_default(),
            source,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_mode_from_inputs() {
        assert_eq!(Mode::from_inputs(vec![]), Mode::Wizard);
        assert_eq!(
            Mode::from_inputs(vec![PathBuf::from("a.txt")]),
            Mode::Website(vec![PathBuf::from("a.txt")])
        );
    }

    #[test]
    fn test_output_path_replaces_extension() {
        assert_eq!(
            output_path(Path::new("pages/about.txt"), None).unwrap(),
            PathBuf::from("pages/about.html")
        );
        assert_eq!(
            output_path(Path::new("notes"), None).unwrap(),
            PathBuf::from("notes.html")
        );
    }

    #[test]
    fn test_output_path_in_out_dir() {
        assert_eq!(
            output_path(Path::new("pages/about.txt"), Some(Path::new("site"))).unwrap(),
            PathBuf::from("site/about.html")
        );
    }

    #[test]
    fn test_output_path_without_file_name() {
        assert!(matches!(
            output_path(Path::new(".."), None),
            Err(BuildError::InvalidSourcePath(_))
        ));
    }

    #[test]
    fn test_website_mode_links_every_page() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        std::fs::write(&a, "A\n!new_paragraph\n!title First\nalpha\n").unwrap();
        std::fs::write(&b, "B\n!new_paragraph\nbeta\n").unwrap();

        // Answers: background, font, paragraph color, heading color
        let mut prompter = Prompter::new(Cursor::new(b"white\n0\nblack\nnavy\n".to_vec()), Vec::new());
        let written = run(
            Mode::Website(vec![a, b]),
            &BuildOptions::default(),
            &mut prompter,
        )
        .unwrap();

        assert_eq!(
            written,
            vec![dir.path().join("a.html"), dir.path().join("b.html")]
        );

        let bar = "<p align=\"center\"><a href=\"a.html\">A</a>---<a href=\"b.html\">B</a>---\n";
        for page in &written {
            let html = std::fs::read_to_string(page).unwrap();
            assert!(html.contains(bar), "link bar missing from {}", page.display());
            assert!(html.contains("font-family: Arial;"));
        }
    }

    #[test]
    fn test_directory_inputs_are_sorted() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.txt"), "B\n").unwrap();
        std::fs::write(dir.path().join("a.txt"), "A\n").unwrap();
        std::fs::write(dir.path().join("skip.md"), "nope\n").unwrap();

        let sources = expand_sources(&[dir.path().to_path_buf()]).unwrap();
        assert_eq!(
            sources,
            vec![dir.path().join("a.txt"), dir.path().join("b.txt")]
        );
    }

    #[test]
    fn test_directory_inputs_skip_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        std::fs::write(dir.path().join("a.txt"), "Top\n").unwrap();
        std::fs::write(dir.path().join("sub").join("a.txt"), "Nested\n").unwrap();

        let sources = expand_sources(&[dir.path().to_path_buf()]).unwrap();
        assert_eq!(sources, vec![dir.path().join("a.txt")]);
    }

    #[test]
    fn test_same_file_name_from_two_directories_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("one");
        let second = dir.path().join("two");
        std::fs::create_dir(&first).unwrap();
        std::fs::create_dir(&second).unwrap();
        std::fs::write(first.join("a.txt"), "Top\n!new_paragraph\ntop body\n").unwrap();
        std::fs::write(second.join("a.txt"), "Other\n!new_paragraph\nother body\n").unwrap();

        let site = dir.path().join("site");
        let options = BuildOptions {
            out_dir: Some(site.clone()),
            ..BuildOptions::default()
        };
        let mut prompter = Prompter::new(Cursor::new(Vec::new()), Vec::new());
        let result = run(
            Mode::Website(vec![first.join("a.txt"), second.join("a.txt")]),
            &options,
            &mut prompter,
        );

        match result {
            Err(BuildError::DuplicateOutput { output, .. }) => {
                assert_eq!(output, site.join("a.html"));
            }
            other => panic!("expected duplicate output error, got {:?}", other),
        }
        assert!(!site.join("a.html").exists());
    }

    #[test]
    fn test_same_file_name_in_different_folders_without_out_dir_is_rejected() {
        let sources = vec![PathBuf::from("one/a.txt"), PathBuf::from("two/a.txt")];
        let outputs = vec![PathBuf::from("one/a.html"), PathBuf::from("two/a.html")];
        assert!(matches!(
            check_distinct_outputs(&sources, &outputs),
            Err(BuildError::DuplicateOutput { .. })
        ));
    }

    #[test]
    fn test_empty_directory_has_no_sources() {
        let dir = tempfile::tempdir().unwrap();
        let mut prompter = Prompter::new(Cursor::new(Vec::new()), Vec::new());
        let result = run(
            Mode::Website(vec![dir.path().to_path_buf()]),
            &BuildOptions::default(),
            &mut prompter,
        );
        assert!(matches!(result, Err(BuildError::NoSources)));
    }

    #[test]
    fn test_missing_source_is_an_error() {
        let mut prompter = Prompter::new(Cursor::new(Vec::new()), Vec::new());
        let result = run(
            Mode::Website(vec![PathBuf::from("/nonexistent/page.txt")]),
            &BuildOptions::default(),
            &mut prompter,
        );
        assert!(matches!(result, Err(BuildError::Source(_))));
    }
}
