//! Paragraph accumulator state machine
//!
//! Holds the in-progress paragraph and folds classified lines into the
//! ordered list of finished paragraphs.

use super::directive::LineKind;
use super::image::ImageRef;
use super::types::Paragraph;

/// Accumulator state for building paragraphs from classified lines
#[derive(Debug, Default)]
pub struct ParagraphAccumulator {
    /// Paragraph currently being built (absent until the first opener)
    current: Option<Paragraph>,

    /// Images seen since the last finalize
    pending_images: Vec<ImageRef>,

    /// Body text seen since the last finalize
    body: String,

    /// Title given before any paragraph was opened
    pending_title: Option<String>,

    /// Completed paragraphs
    finalized: Vec<Paragraph>,
}

impl ParagraphAccumulator {
    /// Create an accumulator with no open paragraph
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one classified line
    pub fn push(&mut self, kind: LineKind<'_>) {
        match kind {
            LineKind::NewParagraph => self.handle_new_paragraph(),
            LineKind::Title(title) => self.handle_title(title),
            LineKind::Image(payload) => self.pending_images.push(ImageRef::parse(payload)),
            LineKind::PlainText(text) => {
                self.body.push_str(text);
                self.body.push('\n');
            }
            LineKind::Blank | LineKind::Ignored => {}
        }
    }

    #[cfg(test)]
    fn has_open_paragraph(&self) -> bool {
        self.current.is_some()
    }

    /// Finalize the open paragraph (if any) and return all paragraphs
    ///
    /// # Returns
    /// * `Vec<Paragraph>` - Finished paragraphs in source order
    pub fn finish(mut self) -> Vec<Paragraph> {
        if let Some(paragraph) = self.current.take() {
            self.finalize(paragraph);
        } else if !self.body.is_empty() || !self.pending_images.is_empty() {
            log::debug!("Discarding content outside of any paragraph");
        }
        self.finalized
    }

    fn handle_new_paragraph(&mut self) {
        if let Some(paragraph) = self.current.take() {
            self.finalize(paragraph);
        }
        self.open();
    }

    fn handle_title(&mut self, title: &str) {
        match self.current.as_mut() {
            Some(paragraph) => paragraph.title = title.to_string(),
            None => {
                log::debug!("Holding title {:?} until a paragraph is opened", title);
                self.pending_title = Some(title.to_string());
            }
        }
    }

    /// Open a fresh paragraph, consuming any held title
    fn open(&mut self) {
        let mut paragraph = Paragraph::default();
        if let Some(title) = self.pending_title.take() {
            paragraph.title = title;
        }
        self.current = Some(paragraph);
    }

    fn finalize(&mut self, mut paragraph: Paragraph) {
        paragraph.images = std::mem::take(&mut self.pending_images);
        paragraph.body = std::mem::take(&mut self.body);
        self.finalized.push(paragraph);
    }
}
