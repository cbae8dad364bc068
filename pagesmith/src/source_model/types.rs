//! Shared document model types

use super::image::ImageRef;

/// One titled block of body text with optional images
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
    /// Paragraph heading, empty until a `!title` directive sets it
    pub title: String,

    /// Accumulated body text, each source line followed by its terminator
    pub body: String,

    /// Images attached to this paragraph, in directive order
    pub images: Vec<ImageRef>,
}

impl Paragraph {
    /// Create a paragraph from already collected parts
    ///
    /// # Parameters
    /// * `title` - Paragraph heading
    /// * `body` - Body text
    /// * `images` - Attached images
    ///
    /// # Returns
    /// * `Paragraph` - The assembled paragraph
    pub fn new(title: impl Into<String>, body: impl Into<String>, images: Vec<ImageRef>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            images,
        }
    }
}

/// One page: its title and ordered paragraphs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// Page title, used for both `<title>` and the visible heading
    pub page_title: String,

    /// Paragraphs in source order
    pub paragraphs: Vec<Paragraph>,
}

impl Document {
    /// Number of images across all paragraphs
    pub fn image_count(&self) -> usize {
        self.paragraphs.iter().map(|p| p.images.len()).sum()
    }
}

/// Cross-reference to a sibling page in a multi-source run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLink {
    /// Page title of the sibling, used as link text
    pub display_name: String,

    /// File name of the sibling's rendered output
    pub target_file: String,
}
