//! Interactive prompts
//!
//! A sequential input collector used for the style questions in both modes
//! and for building a whole page in wizard mode. It reads from any `BufRead`
//! and writes questions to any `Write`, so tests can drive it with buffers.

use crate::colors::ColorSet;
use crate::source_model::{Document, ImageRef, Paragraph};
use crate::style_config::{StyleConfig, FONTS};
use std::io::{BufRead, Write};
use thiserror::Error;

/// Errors that can occur while prompting
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Input ended while waiting for: {question}")]
    EndOfInput { question: String },
}

/// Question/answer loop over an input and an output stream
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a prompter
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a message on its own line
    pub fn say(&mut self, message: &str) -> Result<(), PromptError> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    /// Ask a question and return the answer without its line terminator
    ///
    /// # Parameters
    /// * `question` - Text printed before reading (no newline added)
    ///
    /// # Returns
    /// * `Ok(String)` - The answer
    /// * `Err(PromptError)` - IO failure or input exhausted
    pub fn ask(&mut self, question: &str) -> Result<String, PromptError> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Err(PromptError::EndOfInput {
                question: question.trim().to_string(),
            });
        }

        let trimmed_len = answer.trim_end_matches(['\n', '\r']).len();
        answer.truncate(trimmed_len);
        Ok(answer)
    }

    /// Ask a question whose default answer is yes
    ///
    /// An empty answer or "yes" in any case counts as yes.
    pub fn confirm(&mut self, question: &str) -> Result<bool, PromptError> {
        let answer = self.ask(question)?;
        Ok(answer.is_empty() || answer.eq_ignore_ascii_case("yes"))
    }

    /// Ask for a color until a legal one is entered
    pub fn choose_color(&mut self, colors: &ColorSet) -> Result<String, PromptError> {
        let mut answer = self.ask("Choose the name of a color, or in '#XXXXXX' format: ")?;
        loop {
            if let Some(color) = colors.validate(&answer) {
                return Ok(color);
            }
            log::debug!("Rejected color {:?}", answer);
            answer = self.ask("Choose color name or '#XXXXXX': ")?;
        }
    }

    /// List the fonts and ask for one by number
    pub fn choose_font(&mut self) -> Result<String, PromptError> {
        self.say("Choose a font by its number.")?;
        for (i, font) in FONTS.iter().enumerate() {
            self.say(&format!("{}: {}, size 14", i, font))?;
        }

        let mut answer = self.ask(" >> ")?;
        loop {
            if let Some(font) = answer.parse::<usize>().ok().and_then(|i| FONTS.get(i)) {
                return Ok(font.to_string());
            }
            self.say("Please enter a valid number.")?;
            answer = self.ask(" >> ")?;
        }
    }

    /// Collect a complete page style
    ///
    /// Questions come in this order: background color, font, paragraph
    /// color, heading color.
    pub fn collect_style(&mut self, colors: &ColorSet) -> Result<StyleConfig, PromptError> {
        self.say("Background Color")?;
        let background_color = self.choose_color(colors)?;

        let font = self.choose_font()?;

        self.say("Paragraph Color")?;
        let paragraph_color = self.choose_color(colors)?;

        self.say("Heading Color")?;
        let heading_color = self.choose_color(colors)?;

        Ok(StyleConfig {
            background_color,
            paragraph_color,
            heading_color,
            font,
        })
    }

    /// Collect one paragraph: title, single-line content, then images
    pub fn collect_paragraph(&mut self) -> Result<Paragraph, PromptError> {
        let title = self.ask("Title of your paragraph: ")?;
        self.say("Content of your paragraph (single line)")?;
        let body = self.ask("")?;

        let mut images = Vec::new();
        let mut more = self.confirm("Do you want to add images? [yes] ")?;
        while more {
            let file = self.ask("Image file name: ")?;
            images.push(ImageRef::parse(&file));
            more = self.confirm("Do you want to add another image? [yes] ")?;
        }

        Ok(Paragraph::new(title, body, images))
    }

    /// Run the full wizard: page title, style, then paragraphs
    ///
    /// # Parameters
    /// * `colors` - Legal colors for the style questions
    /// * `style` - A style to use instead of asking, if already known
    ///
    /// # Returns
    /// * `Ok((Document, StyleConfig))` - The page and its style
    /// * `Err(PromptError)` - IO failure or input exhausted
    pub fn run_wizard(
        &mut self,
        colors: &ColorSet,
        style: Option<StyleConfig>,
    ) -> Result<(Document, StyleConfig), PromptError> {
        let page_title = self.ask("What would you like the title of your website to be? ")?;

        let style = match style {
            Some(style) => style,
            None => self.collect_style(colors)?,
        };

        let mut paragraphs = vec![self.collect_paragraph()?];
        while self.confirm("Do you want to add another paragraph to your website? [yes] ")? {
            paragraphs.push(self.collect_paragraph()?);
        }

        let document = Document {
            page_title,
            paragraphs,
        };
        Ok((document, style))
    }
}
