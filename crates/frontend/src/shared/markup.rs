//! Markdown rendering and text escaping.
//!
//! Components only inject HTML produced here through `inner_html`.

use pulldown_cmark::{html, Options, Parser};

pub trait Markup {
    /// Markdown to HTML that is safe to inject.
    fn render_markdown(&self, text: &str) -> String;

    /// Plain text to HTML that displays exactly `text`.
    fn escape_text(&self, text: &str) -> String;
}

/// pulldown-cmark for rendering, ammonia for sanitizing and escaping.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlMarkup;

impl Markup for HtmlMarkup {
    fn render_markdown(&self, text: &str) -> String {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_FOOTNOTES);
        let parser = Parser::new_ext(text, options);
        let mut output = String::new();
        html::push_html(&mut output, parser);
        ammonia::clean(&output)
    }

    fn escape_text(&self, text: &str) -> String {
        ammonia::clean_text(text)
    }
}
