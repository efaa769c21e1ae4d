//! Composite types: title, details, optional constructor, and methods.

use crate::error::Result;
use crate::model::TypeDoc;
use crate::render::BodyRenderer;

impl BodyRenderer<'_> {
    pub(crate) fn render_type(&self, type_doc: &TypeDoc, shift: usize) -> Result<String> {
        let mut output = self.heading(&type_doc.title, shift)?;
        output.push_str(&self.html(&type_doc.details, shift)?);
        output.push('\n');

        if let Some(ref constructor) = type_doc.constructor {
            output.push_str(&self.render_func(constructor, shift + 1)?);
        }

        output.push_str(&self.heading("Definitions", shift + 1)?);
        for method in &type_doc.scope {
            output.push_str(&self.render_func(method, shift + 2)?);
        }

        Ok(output)
    }
}
