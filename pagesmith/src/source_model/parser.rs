//! Document parser
//!
//! Reads the page title from the first line, then folds every remaining line
//! through the classifier and the paragraph accumulator.

use super::accumulator::ParagraphAccumulator;
use super::directive::classify;
use super::error::SourceError;
use super::types::Document;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Parse the lines of one source into a document
///
/// Lines are expected without their terminators; body text gets a `\n`
/// appended per line.
///
/// # Parameters
/// * `lines` - All lines of the source, title line first
///
/// # Returns
/// * `Document` - The page title and its paragraphs (possibly none)
pub fn parse_lines<I, S>(lines: I) -> Document
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut lines = lines.into_iter();

    let page_title = lines
        .next()
        .map(|line| line.as_ref().trim().to_string())
        .unwrap_or_default();

    let mut accumulator = ParagraphAccumulator::new();
    for line in lines {
        accumulator.push(classify(line.as_ref()));
    }

    Document {
        page_title,
        paragraphs: accumulator.finish(),
    }
}

/// Parse a whole source text
pub fn parse_str(content: &str) -> Document {
    parse_lines(content.lines())
}

/// Read and parse one source file
///
/// # Parameters
/// * `path` - Path to the source file
///
/// # Returns
/// * `Ok(Document)` - The parsed document
/// * `Err(SourceError)` - The file could not be read
pub fn parse_file(path: &Path) -> Result<Document, SourceError> {
    let content = std::fs::read_to_string(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let document = parse_str(&content);
    log::debug!(
        "Parsed {}: {} paragraphs, {} images",
        path.display(),
        document.paragraphs.len(),
        document.image_count()
    );
    Ok(document)
}

/// Read only the first line of a source file, trimmed
///
/// # Parameters
/// * `path` - Path to the source file
///
/// # Returns
/// * `Ok(String)` - The page title (empty for an empty file)
/// * `Err(SourceError)` - The file could not be read
pub fn read_page_title(path: &Path) -> Result<String, SourceError> {
    let read_error = |source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(read_error)?;
    let mut first_line = String::new();
    BufReader::new(file)
        .read_line(&mut first_line)
        .map_err(read_error)?;

    Ok(first_line.trim().to_string())
}
