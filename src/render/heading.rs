//! Markdown heading formatting.

use crate::config::{HeadingConfig, HeadingOverflow, MARKDOWN_MAX_HEADING};
use crate::error::{Error, Result};
use tracing::debug;

/// Format `text` as a heading of level `shift + 1`, surrounded by blank lines.
///
/// Levels past `config.max_level` are clamped or rejected depending on
/// `config.overflow`.
pub fn markdown_heading(text: &str, shift: usize, config: &HeadingConfig) -> Result<String> {
    let max = config.max_level.clamp(1, MARKDOWN_MAX_HEADING) as usize;
    let mut level = shift + 1;
    if level > max {
        match config.overflow {
            HeadingOverflow::Clamp => {
                debug!(heading = text, level, max, "clamping heading level");
                level = max;
            }
            HeadingOverflow::Error => {
                return Err(Error::HeadingTooDeep {
                    level,
                    max: config.max_level,
                });
            }
        }
    }
    Ok(format!("\n{} {}\n\n", "#".repeat(level), text))
}
