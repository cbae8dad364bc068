//! Page style configuration (colors and font)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Fonts offered by the font chooser, in menu order
pub const FONTS: [&str; 7] = [
    "Arial",
    "Comic Sans MS",
    "Lucida Grande",
    "Tahoma",
    "Verdana",
    "Helvetica",
    "Times New Roman",
];

/// Style applied to every generated page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleConfig {
    /// Page background color
    pub background_color: String,

    /// Paragraph text color
    pub paragraph_color: String,

    /// Heading color
    pub heading_color: String,

    /// Font family name
    pub font: String,
}

impl StyleConfig {
    /// Load a style from a TOML file
    ///
    /// # Parameters
    /// * `path` - Path to the style file
    ///
    /// # Returns
    /// * `Ok(StyleConfig)` - Successfully loaded style
    /// * `Err(StyleConfigError)` - Error reading or parsing the file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, StyleConfigError> {
        let content = fs::read_to_string(&path).map_err(StyleConfigError::IoError)?;

        let style: StyleConfig =
            toml::from_str(&content).map_err(StyleConfigError::ParseError)?;

        Ok(style)
    }

    /// Save the style to a TOML file
    ///
    /// # Parameters
    /// * `path` - Path where the style file will be written
    ///
    /// # Returns
    /// * `Ok(())` - Successfully saved style
    /// * `Err(StyleConfigError)` - Error serializing or writing the file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), StyleConfigError> {
        let content = toml::to_string_pretty(self).map_err(StyleConfigError::SerializeError)?;

        fs::write(&path, content).map_err(StyleConfigError::IoError)?;

        Ok(())
    }
}

/// Errors that can occur when loading or saving a style file
#[derive(Debug)]
#[allow(clippy::enum_variant_names)]
pub enum StyleConfigError {
    /// IO error when reading or writing file
    IoError(std::io::Error),

    /// Error parsing TOML
    ParseError(toml::de::Error),

    /// Error serializing to TOML
    SerializeError(toml::ser::Error),
}

impl std::fmt::Display for StyleConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StyleConfigError::IoError(e) => write!(f, "IO error: {}", e),
            StyleConfigError::ParseError(e) => write!(f, "TOML parse error: {}", e),
            StyleConfigError::SerializeError(e) => write!(f, "TOML serialize error: {}", e),
        }
    }
}

impl std::error::Error for StyleConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_config_roundtrip() {
        let style = StyleConfig {
            background_color: "lavender".to_string(),
            paragraph_color: "#1a1a1a".to_string(),
            heading_color: "navy".to_string(),
            font: "Comic Sans MS".to_string(),
        };

        let toml_str = toml::to_string_pretty(&style).unwrap();
        let parsed: StyleConfig = toml::from_str(&toml_str).unwrap();

        assert_eq!(parsed, style);
    }

    #[test]
    fn test_parse_example_toml() {
        let toml_content = r##"
background_color = "white"
paragraph_color = "black"
heading_color = "#ff0000"
font = "Verdana"
"##;

        let style: StyleConfig = toml::from_str(toml_content).unwrap();

        assert_eq!(style.background_color, "white");
        assert_eq!(style.heading_color, "#ff0000");
        assert_eq!(style.font, "Verdana");
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let result: Result<StyleConfig, _> = toml::from_str("font = \"Arial\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = StyleConfig::load("/nonexistent/style.toml").unwrap_err();
        assert!(matches!(err, StyleConfigError::IoError(_)));
    }
}
