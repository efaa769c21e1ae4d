//! Symbol tables.

use crate::error::{Error, Result};
use crate::model::SymbolsDoc;
use crate::render::BodyRenderer;

impl BodyRenderer<'_> {
    pub(crate) fn render_symbols(&self, symbols: &SymbolsDoc, shift: usize) -> Result<String> {
        let mut output = self.heading(&symbols.title, shift + 1)?;
        output.push_str(&self.html(&symbols.details, shift)?);
        output.push_str("\n\n");

        output.push_str("| Symbol | Name | Math Class |\n");
        output.push_str("| ----- | ----- | ----- |\n");
        for symbol in &symbols.list {
            let c = char::from_u32(symbol.codepoint)
                .ok_or(Error::InvalidCodepoint(symbol.codepoint))?;
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                escape_cell(&c.to_string()),
                escape_cell(&symbol.name),
                escape_cell(&symbol.math_class)
            ));
        }

        Ok(output)
    }
}

/// Escape pipes so a cell cannot split the table row.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
