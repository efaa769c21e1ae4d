//! Function documentation, including nested definitions.
//!
//! Heading layout for a function rendered at shift `s`:
//!
//! - `s`: the function name
//! - `s + 1`: "Parameters" (always present), "Example", "Definitions"
//! - `s + 2`: each parameter, and each nested function
//! - `s + 3`: a parameter's "Example"

use crate::error::Result;
use crate::model::{FunctionDoc, ParamDoc};
use crate::render::BodyRenderer;

impl BodyRenderer<'_> {
    pub(crate) fn render_func(&self, func: &FunctionDoc, shift: usize) -> Result<String> {
        let mut output = self.heading(&func.name, shift)?;
        output.push_str(&render_signature(func));

        output.push_str(&self.html(&func.details, shift)?);
        output.push('\n');

        output.push_str(&self.heading("Parameters", shift + 1)?);
        for param in &func.params {
            output.push_str(&self.heading(&parameter_header(param), shift + 2)?);
            output.push_str(&self.html(&param.details, shift)?);
            output.push('\n');

            if let Some(ref example) = param.example {
                output.push_str(&self.heading("Example", shift + 3)?);
                output.push_str(&self.html(example, shift)?);
                output.push('\n');
            }
        }

        if let Some(ref example) = func.example {
            output.push_str(&self.heading("Example", shift + 1)?);
            output.push_str(&self.html(example, shift)?);
            output.push('\n');
        }

        if !func.scope.is_empty() {
            output.push_str(&self.heading("Definitions", shift + 1)?);
            for nested in &func.scope {
                output.push_str(&self.render_func(nested, shift + 2)?);
            }
        }

        Ok(output)
    }
}

/// Fenced call signature: `path.name(`, one line per parameter, `) -> returns`.
fn render_signature(func: &FunctionDoc) -> String {
    let mut qualified = func.path.clone();
    qualified.push(func.name.clone());

    let mut output = String::from("```\n");
    output.push_str(&format!("{}(\n", qualified.join(".")));
    for param in &func.params {
        output.push_str("    ");
        if param.named {
            output.push_str(&param.name);
            output.push_str(": ");
        }
        output.push_str(&param.types.join(" "));
        output.push('\n');
    }
    output.push_str(&format!(") -> {}\n```\n", func.returns.join(" ")));
    output
}

/// `name: type, type | _required_ _named_ _positional_`, showing only the
/// markers that apply.
fn parameter_header(param: &ParamDoc) -> String {
    let mut header = format!("{}: {}", param.name, param.types.join(", "));

    let markers: Vec<&str> = [
        (param.required, "_required_"),
        (param.named, "_named_"),
        (param.positional, "_positional_"),
    ]
    .into_iter()
    .filter_map(|(set, marker)| set.then_some(marker))
    .collect();

    if !markers.is_empty() {
        header.push_str(" | ");
        header.push_str(&markers.join(" "));
    }
    header
}
