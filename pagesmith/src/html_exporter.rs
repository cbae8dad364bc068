//! HTML exporter for parsed pages
//!
//! This module renders a Document into a single HTML file with:
//! - A style block produced from the style template and the page style
//! - An optional link bar pointing at every sibling page
//! - One heading, body and image list per paragraph
//!
//! Text is written verbatim; nothing is escaped.

use crate::source_model::{Document, FileLink, ImageRef, Paragraph};
use crate::style_config::StyleConfig;
use crate::templates::Placeholder;
use itertools::Itertools;
use std::fs;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during HTML export
#[derive(Error, Debug)]
pub enum HtmlExportError {
    #[error("Failed to write {path}: {source}", path = .path.display())]
    WriteError {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Everything needed to render one page
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    /// Page style
    pub style: &'a StyleConfig,

    /// Style template text
    pub template: &'a str,

    /// Sibling pages, in input order (the link bar needs more than one)
    pub links: &'a [FileLink],
}

/// Export a document to an HTML file
///
/// # Parameters
/// * `doc` - The document to export
/// * `context` - Style, template and sibling links
/// * `output_path` - Path where the HTML file will be written
///
/// # Returns
/// * `Ok(())` - Successfully exported to HTML
/// * `Err(HtmlExportError)` - Error writing the file
pub fn to_html(
    doc: &Document,
    context: &PageContext<'_>,
    output_path: &Path,
) -> Result<(), HtmlExportError> {
    let output = render_page(doc, context);

    let write_error = |source| HtmlExportError::WriteError {
        path: output_path.to_path_buf(),
        source,
    };

    // Write to file - create parent directories if they don't exist
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(write_error)?;
        }
    }
    let mut file = fs::File::create(output_path).map_err(write_error)?;
    file.write_all(output.as_bytes()).map_err(write_error)?;

    log::info!(
        "Wrote {} ({} paragraphs)",
        output_path.display(),
        doc.paragraphs.len()
    );

    Ok(())
}

/// Render a document into a complete HTML page
pub fn render_page(doc: &Document, context: &PageContext<'_>) -> String {
    let mut output = String::new();

    for line in ["<!DOCTYPE html>", "<html>", "<head>"] {
        push_line(&mut output, line);
    }
    push_line(&mut output, &format!("<title>{}", doc.page_title));
    push_line(&mut output, "</title>");

    write_style(&mut output, context.template, context.style);

    for line in ["</head>", "<body>"] {
        push_line(&mut output, line);
    }
    push_line(&mut output, &format!("<h1>{}", doc.page_title));
    push_line(&mut output, "</h1>");
    push_line(&mut output, "<hr/>");

    if context.links.len() > 1 {
        write_link_bar(&mut output, context.links);
    }

    for paragraph in &doc.paragraphs {
        write_paragraph(&mut output, paragraph);
    }

    for line in ["</body>", "</html>"] {
        push_line(&mut output, line);
    }

    output
}

/// Write the style block, substituting placeholders line by line
fn write_style(output: &mut String, template: &str, style: &StyleConfig) {
    for line in template.lines() {
        push_line(output, &substitute_line(line.trim(), style));
    }
}

/// Replace the first placeholder on a line
///
/// The placeholder starts at the first `@` and is exactly
/// [`Placeholder::WIDTH`] characters long.
fn substitute_line(line: &str, style: &StyleConfig) -> String {
    let Some(start) = line.find('@') else {
        return line.to_string();
    };

    let end = line[start..]
        .char_indices()
        .nth(Placeholder::WIDTH)
        .map_or(line.len(), |(offset, _)| start + offset);
    let token = line[start..end].trim();

    let value = match Placeholder::from_token(token) {
        Some(Placeholder::BackgroundColor) => &style.background_color,
        Some(Placeholder::ParagraphColor) => &style.paragraph_color,
        Some(Placeholder::HeadingColor) => &style.heading_color,
        Some(Placeholder::Font) => &style.font,
        None => {
            log::warn!("Unknown style placeholder '{}' left unchanged", token);
            return line.to_string();
        }
    };

    format!("{}{}{}", &line[..start], value, &line[end..])
}

/// Write the centered bar of links to every sibling page
fn write_link_bar(output: &mut String, links: &[FileLink]) {
    let anchors = links
        .iter()
        .map(|link| format!("<a href=\"{}\">{}</a>---", link.target_file, link.display_name))
        .join("");
    push_line(output, &format!("<p align=\"center\">{}", anchors));
    push_line(output, "</p>");
}

/// Write one paragraph with its images
fn write_paragraph(output: &mut String, paragraph: &Paragraph) {
    push_line(output, &format!("<h2>{}", paragraph.title));
    push_line(output, "</h2>");
    push_line(output, &format!("<p>{}", paragraph.body));
    push_line(output, "</p>");

    for image in &paragraph.images {
        push_line(output, &image_tag(image));
    }
}

/// Build an `<img>` tag, with a width attribute for scaled images
fn image_tag(image: &ImageRef) -> String {
    match &image.scale_percent {
        Some(width) => format!(
            "<img src=\"{}\" width=\"{}\" class=\"center\">",
            image.path, width
        ),
        None => format!("<img src=\"{}\" class=\"center\">", image.path),
    }
}

fn push_line(output: &mut String, line: &str) {
    output.push_str(line);
    output.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source_model::parse_lines;

    fn style() -> StyleConfig {
        StyleConfig {
            background_color: "white".to_string(),
            paragraph_color: "black".to_string(),
            heading_color: "navy".to_string(),
            font: "Verdana".to_string(),
        }
    }

    fn links() -> Vec<FileLink> {
        vec![
            FileLink {
                display_name: "A".to_string(),
                target_file: "a.html".to_string(),
            },
            FileLink {
                display_name: "B".to_string(),
                target_file: "b.html".to_string(),
            },
        ]
    }

    #[test]
    fn test_substitute_line() {
        let style = style();
        assert_eq!(
            substitute_line("background-color: @BACKCOLOR;", &style),
            "background-color: white;"
        );
        assert_eq!(substitute_line("font-family: @FONTSTYLE;", &style), "font-family: Verdana;");
        assert_eq!(substitute_line("color: @HEADCOLOR", &style), "color: navy");
        assert_eq!(substitute_line("no placeholder", &style), "no placeholder");
    }

    #[test]
    fn test_unknown_placeholder_is_kept() {
        assert_eq!(substitute_line("x: @NOTATOKEN;", &style()), "x: @NOTATOKEN;");
    }

    #[test]
    fn test_placeholder_at_end_of_short_line() {
        assert_eq!(substitute_line("@FONT", &style()), "@FONT");
    }

    #[test]
    fn test_image_tags() {
        let plain = ImageRef::parse("pic.jpg");
        assert_eq!(image_tag(&plain), "<img src=\"pic.jpg\" class=\"center\">");

        let scaled = ImageRef::parse("art.png 100%");
        assert_eq!(
            image_tag(&scaled),
            "<img src=\"art.png\" width=\"100%\" class=\"center\">"
        );
    }

    #[test]
    fn test_render_page_layout() {
        let doc = parse_lines(["My Page", "!new_paragraph", "!title Intro", "Hello world"]);
        let style = style();
        let context = PageContext {
            style: &style,
            template: "<style>\n  p { color: @FONTCOLOR; }\n</style>",
            links: &[],
        };

        let html = render_page(&doc, &context);
        let expected = "<!DOCTYPE html>\n<html>\n<head>\n<title>My Page\n</title>\n\
                        <style>\np { color: black; }\n</style>\n\
                        </head>\n<body>\n<h1>My Page\n</h1>\n<hr/>\n\
                        <h2>Intro\n</h2>\n<p>Hello world\n\n</p>\n\
                        </body>\n</html>\n";
        assert_eq!(html, expected);
    }

    #[test]
    fn test_link_bar_lists_every_page_in_order() {
        let doc = parse_lines(["B"]);
        let style = style();
        let links = links();
        let context = PageContext {
            style: &style,
            template: "",
            links: &links,
        };

        let html = render_page(&doc, &context);
        assert!(html.contains(
            "<p align=\"center\"><a href=\"a.html\">A</a>---<a href=\"b.html\">B</a>---\n</p>\n"
        ));
    }

    #[test]
    fn test_single_link_renders_no_bar() {
        let doc = parse_lines(["A"]);
        let style = style();
        let mut links = links();
        links.truncate(1);
        let context = PageContext {
            style: &style,
            template: "",
            links: &links,
        };

        assert!(!render_page(&doc, &context).contains("<p align=\"center\">"));
    }

    #[test]
    fn test_text_is_not_escaped() {
        let doc = parse_lines(["<b>Bold</b> & co", "!new_paragraph", "<i>raw</i>"]);
        let style = style();
        let context = PageContext {
            style: &style,
            template: "",
            links: &[],
        };

        let html = render_page(&doc, &context);
        assert!(html.contains("<title><b>Bold</b> & co\n"));
        assert!(html.contains("<p><i>raw</i>\n"));
    }
}
