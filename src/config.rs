//! Rendering and build settings.

use std::str::FromStr;

/// Deepest heading Markdown can represent.
pub const MARKDOWN_MAX_HEADING: u8 = 6;

/// What to do with a heading nested deeper than `HeadingConfig::max_level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeadingOverflow {
    /// Emit it at `max_level`.
    #[default]
    Clamp,
    /// Fail the render.
    Error,
}

impl FromStr for HeadingOverflow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clamp" => Ok(HeadingOverflow::Clamp),
            "error" => Ok(HeadingOverflow::Error),
            _ => Err(format!(
                "unknown heading overflow: {}. Use clamp or error",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingConfig {
    /// 1..=6
    pub max_level: u8,
    pub overflow: HeadingOverflow,
}

impl Default for HeadingConfig {
    fn default() -> Self {
        Self {
            max_level: MARKDOWN_MAX_HEADING,
            overflow: HeadingOverflow::Clamp,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BuildConfig {
    /// Worker threads for the whole page tree; 0 picks one per CPU.
    pub jobs: usize,
}
