//! Image references attached to paragraphs

/// Width of the trailing annotation slot: one separator plus the percent field
const ANNOTATION_SLOT_WIDTH: usize = 5;

/// Width of the percent field at the very end of the payload (e.g. "100%")
const PERCENT_FIELD_WIDTH: usize = 4;

/// Reference to an image file, as written after an `!image` directive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    /// Image source path, rendered verbatim into the `src` attribute
    pub path: String,

    /// Optional scale annotation including the percent sign (e.g. "50%")
    pub scale_percent: Option<String>,
}

impl ImageRef {
    /// Parse an image payload
    ///
    /// A payload ending in `%` carries a fixed-width annotation: the last
    /// five characters are dropped from the path and the last four hold the
    /// percent field. The slicing is positional, so `art.png50%` becomes the
    /// path `art.p` with a scale of `50%`.
    ///
    /// The slot width follows that `art.png50%` example, not a three-character
    /// cut; a three-character cut would leave the scale as `g50%`.
    ///
    /// # Parameters
    /// * `payload` - Raw text after the directive marker
    ///
    /// # Returns
    /// * `ImageRef` - The parsed reference (never fails)
    pub fn parse(payload: &str) -> Self {
        let trimmed = payload.trim();

        if !trimmed.ends_with('%') {
            return Self {
                path: trimmed.to_string(),
                scale_percent: None,
            };
        }

        let field = last_chars(trimmed, PERCENT_FIELD_WIDTH).trim();
        let percent = field.trim_start_matches(|c: char| !c.is_ascii_digit());

        Self {
            path: without_last_chars(trimmed, ANNOTATION_SLOT_WIDTH).to_string(),
            scale_percent: Some(percent.to_string()),
        }
    }
}

/// The last `n` characters of `s` (all of `s` if it is shorter)
fn last_chars(s: &str, n: usize) -> &str {
    let count = s.chars().count();
    match s.char_indices().nth(count.saturating_sub(n)) {
        Some((idx, _)) => &s[idx..],
        None => "",
    }
}

/// `s` without its last `n` characters (empty if `s` is shorter)
fn without_last_chars(s: &str, n: usize) -> &str {
    let count = s.chars().count();
    if count <= n {
        return "";
    }
    match s.char_indices().nth(count - n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
