//! Directive line classification

/// Marker that opens and closes paragraphs
pub const NEW_PARAGRAPH_MARKER: &str = "!new_paragraph";

/// Marker that sets the current paragraph title
pub const TITLE_MARKER: &str = "!title";

/// Marker that attaches an image to the current paragraph
pub const IMAGE_MARKER: &str = "!image";

/// Classification of a single source line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `!new_paragraph`
    NewParagraph,
    /// `!title <text>`, payload taken verbatim
    Title(&'a str),
    /// `!image <path>[NNN%]`, payload taken verbatim
    Image(&'a str),
    /// Ordinary text contributing to the body
    PlainText(&'a str),
    /// Whitespace-only line
    Blank,
    /// A `!` line that is not a known directive
    Ignored,
}

/// Classify one line (terminator already stripped)
///
/// Title and image payloads start one character after the marker, so the
/// separator is consumed whatever it is. No trimming is applied to them.
///
/// # Parameters
/// * `line` - The source line
///
/// # Returns
/// * `LineKind` - The line's classification and payload
pub fn classify(line: &str) -> LineKind<'_> {
    if !line.starts_with('!') {
        if line.trim().is_empty() {
            return LineKind::Blank;
        }
        return LineKind::PlainText(line);
    }

    if line.trim() == NEW_PARAGRAPH_MARKER {
        return LineKind::NewParagraph;
    }

    if let Some(rest) = line.strip_prefix(TITLE_MARKER) {
        return LineKind::Title(skip_separator(rest));
    }

    if let Some(rest) = line.strip_prefix(IMAGE_MARKER) {
        return LineKind::Image(skip_separator(rest));
    }

    LineKind::Ignored
}

/// Drop exactly one leading character, if any
fn skip_separator(rest: &str) -> &str {
    let mut chars = rest.chars();
    chars.next();
    chars.as_str()
}
