//! HTML → Markdown conversion, trait-based so the backend can be swapped.

pub mod pandoc;
pub mod raw;

use crate::error::Result;
use anyhow::anyhow;

/// Converts an HTML fragment to Markdown, shifting any headings it contains
/// down by `heading_shift` levels.
pub trait HtmlConverter: Send + Sync {
    fn convert(&self, html: &str, heading_shift: usize) -> Result<String>;
}

/// Create a converter for the given backend name.
pub fn create_converter(name: &str, pandoc_path: &str) -> anyhow::Result<Box<dyn HtmlConverter>> {
    match name {
        "pandoc" => Ok(Box::new(pandoc::PandocConverter::new(pandoc_path))),
        "raw" => Ok(Box::new(raw::RawHtmlConverter)),
        _ => Err(anyhow!(
            "unknown converter: {}. Use pandoc or raw",
            name
        )),
    }
}
