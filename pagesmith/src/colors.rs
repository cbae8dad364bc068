//! Legal color names and color input validation

use crate::templates;
use regex::Regex;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;

/// Errors that can occur while loading a color list
#[derive(Error, Debug)]
pub enum ColorError {
    #[error("Failed to read color list {path}: {source}", path = .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Color list {path} contains no colors", path = .path.display())]
    Empty { path: PathBuf },
}

/// Set of colors accepted by the style prompts
#[derive(Debug, Clone)]
pub struct ColorSet {
    colors: HashSet<String>,
}

impl ColorSet {
    /// Parse a color list
    ///
    /// Each line holds one or more colors separated by `:` (e.g. a name and
    /// its hex value). Surrounding whitespace is ignored.
    pub fn parse(text: &str) -> Self {
        let colors = text
            .lines()
            .flat_map(|line| line.trim().split(':'))
            .map(str::trim)
            .filter(|color| !color.is_empty())
            .map(str::to_string)
            .collect();

        Self { colors }
    }

    /// Load a color list from a file
    ///
    /// # Parameters
    /// * `path` - Path to the color list
    ///
    /// # Returns
    /// * `Ok(ColorSet)` - The loaded colors
    /// * `Err(ColorError)` - The file could not be read or holds no colors
    pub fn load(path: &Path) -> Result<Self, ColorError> {
        let text = std::fs::read_to_string(path).map_err(|source| ColorError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let set = Self::parse(&text);
        if set.is_empty() {
            return Err(ColorError::Empty {
                path: path.to_path_buf(),
            });
        }

        log::info!("Loaded {} colors from {}", set.len(), path.display());
        Ok(set)
    }

    /// Number of colors in the set
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the set holds no colors
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Whether an already normalized color is acceptable
    pub fn is_legal(&self, color: &str) -> bool {
        self.colors.contains(color) || is_hex_color(color)
    }

    /// Normalize raw input and return it if it names a legal color
    pub fn validate(&self, input: &str) -> Option<String> {
        let color = normalize(input);
        self.is_legal(&color).then_some(color)
    }
}

impl Default for ColorSet {
    /// The color list compiled into the binary
    fn default() -> Self {
        Self::parse(templates::DEFAULT_COLORS)
    }
}

/// Lowercase a color name; hex literals are kept as typed
pub fn normalize(input: &str) -> String {
    let input = input.trim();
    if input.starts_with('#') {
        input.to_string()
    } else {
        input.to_ascii_lowercase()
    }
}

/// Whether `color` is a `#RRGGBB` literal
fn is_hex_color(color: &str) -> bool {
    static HEX_REGEX: OnceLock<Regex> = OnceLock::new();
    let hex_regex =
        HEX_REGEX.get_or_init(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("Invalid hex regex"));
    hex_regex.is_match(color)
}
