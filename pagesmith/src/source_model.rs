//! Source model for the parsing stage
//!
//! This module turns the directive-annotated text of one page into a
//! [`Document`]: a page title plus an ordered list of paragraphs.
//!
//! Source format:
//! - Line 1 is the page title.
//! - `!new_paragraph` opens a paragraph (and closes the previous one).
//! - `!title <text>` sets the current paragraph title.
//! - `!image <path>[ NNN%]` attaches an image.
//! - Any other non-blank line is body text.

// Submodules
mod accumulator;
mod directive;
mod error;
mod image;
mod parser;
mod types;

// Re-export public types
pub use accumulator::ParagraphAccumulator;
pub use directive::{classify, LineKind, IMAGE_MARKER, NEW_PARAGRAPH_MARKER, TITLE_MARKER};
pub use error::SourceError;
pub use image::ImageRef;
pub use parser::{parse_file, parse_lines, parse_str, read_page_title};
pub use types::{Document, FileLink, Paragraph};
