//! Body renderers: one per content kind, all threading an explicit heading
//! shift so nested content stays below its container's heading.

pub mod category;
pub mod func;
pub mod group;
pub mod heading;
pub mod symbols;
pub mod types;

use crate::config::HeadingConfig;
use crate::convert::HtmlConverter;
use crate::error::Result;
use crate::model::BodyContent;
use tracing::warn;

/// Renders resolved body content to Markdown.
///
/// Pure given its converter: the same content and shift always produce the
/// same text. Shared read-only across worker threads.
pub struct BodyRenderer<'a> {
    converter: &'a dyn HtmlConverter,
    headings: HeadingConfig,
}

impl<'a> BodyRenderer<'a> {
    pub fn new(converter: &'a dyn HtmlConverter, headings: HeadingConfig) -> Self {
        Self {
            converter,
            headings,
        }
    }

    /// Render a page body at the document root (shift 0).
    pub fn render(&self, content: &BodyContent) -> Result<String> {
        match content {
            BodyContent::Html(html) => self.html(html, 0),
            BodyContent::Category(category) => self.render_category(category, 0),
            BodyContent::Func(func) => self.render_func(func, 0),
            BodyContent::Type(type_doc) => self.render_type(type_doc, 0),
            BodyContent::Symbols(symbols) => self.render_symbols(symbols, 0),
            BodyContent::Group(group) => self.render_group(group, 0),
            BodyContent::Unsupported(kind) => {
                warn!(kind = %kind, "body kind is currently not supported");
                Ok(format!("{} is currently not supported", kind))
            }
        }
    }

    fn html(&self, html: &str, shift: usize) -> Result<String> {
        self.converter.convert(html, shift)
    }

    fn heading(&self, text: &str, shift: usize) -> Result<String> {
        heading::markdown_heading(text, shift, &self.headings)
    }
}

/// Escape text placed between the brackets of a Markdown link. Line breaks
/// become spaces since link text cannot span lines in a list entry.
pub(crate) fn escape_link_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | '[' | ']' => {
                escaped.push('\\');
                escaped.push(c);
            }
            '\r' | '\n' => escaped.push(' '),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::convert::HtmlConverter;
    use crate::error::Result;

    /// Deterministic converter that tags each fragment with its shift.
    pub struct TaggedConverter;

    impl HtmlConverter for TaggedConverter {
        fn convert(&self, html: &str, heading_shift: usize) -> Result<String> {
            if html.is_empty() {
                return Ok(String::new());
            }
            Ok(format!("[{}]{}\n", heading_shift, html))
        }
    }
}
