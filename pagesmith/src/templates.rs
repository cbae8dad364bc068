//! Embedded resources
//!
//! The default style template and color list are compiled into the binary so
//! the tool works without any support files next to it.

use std::path::Path;

/// Default style template with `@BACKCOLOR`, `@FONTCOLOR`, `@HEADCOLOR`
/// and `@FONTSTYLE` placeholders
pub const DEFAULT_STYLE_TEMPLATE: &str = include_str!("templates/style_template.txt");

/// Default legal color list, one `name:#hex` pair per line
pub const DEFAULT_COLORS: &str = include_str!("templates/valid_colors.txt");

/// Placeholder tokens recognized in a style template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    BackgroundColor,
    ParagraphColor,
    HeadingColor,
    Font,
}

impl Placeholder {
    /// Every placeholder token is exactly this many characters long
    pub const WIDTH: usize = 10;

    /// Look up a placeholder by its token
    ///
    /// # Parameters
    /// * `token` - Candidate token, e.g. "@BACKCOLOR"
    ///
    /// # Returns
    /// * `Some(Placeholder)` - The matching placeholder
    /// * `None` - Unknown token
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "@BACKCOLOR" => Some(Self::BackgroundColor),
            "@FONTCOLOR" => Some(Self::ParagraphColor),
            "@HEADCOLOR" => Some(Self::HeadingColor),
            "@FONTSTYLE" => Some(Self::Font),
            _ => None,
        }
    }
}

/// Load the style template, falling back to the embedded default
///
/// # Parameters
/// * `path` - Optional path to a custom template
///
/// # Returns
/// * `Ok(String)` - Template text
/// * `Err(std::io::Error)` - The custom template could not be read
pub fn load_style_template(path: Option<&Path>) -> std::io::Result<String> {
    match path {
        Some(path) => {
            log::info!("Using style template {}", path.display());
            std::fs::read_to_string(path)
        }
        None => Ok(DEFAULT_STYLE_TEMPLATE.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template_has_all_placeholders() {
        for token in ["@BACKCOLOR", "@FONTCOLOR", "@HEADCOLOR", "@FONTSTYLE"] {
            assert!(DEFAULT_STYLE_TEMPLATE.contains(token), "missing {}", token);
            assert_eq!(token.len(), Placeholder::WIDTH);
            assert!(Placeholder::from_token(token).is_some());
        }
    }

    #[test]
    fn test_unknown_placeholder() {
        assert_eq!(Placeholder::from_token("@SOMETHING"), None);
    }

    #[test]
    fn test_default_template_without_path() {
        let template = load_style_template(None).unwrap();
        assert_eq!(template, DEFAULT_STYLE_TEMPLATE);
    }

    #[test]
    fn test_default_colors_are_colon_separated() {
        assert!(DEFAULT_COLORS.lines().all(|line| line.contains(':')));
    }
}
