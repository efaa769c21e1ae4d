//! Function groups: a named set of functions on one page.

use crate::error::Result;
use crate::model::GroupDoc;
use crate::render::BodyRenderer;

impl BodyRenderer<'_> {
    pub(crate) fn render_group(&self, group: &GroupDoc, shift: usize) -> Result<String> {
        let mut output = self.heading(&group.name, shift)?;
        output.push_str(&self.html(&group.details, shift)?);

        for func in &group.functions {
            output.push_str(&self.render_func(func, shift + 1)?);
        }

        Ok(output)
    }
}
