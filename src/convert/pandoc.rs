//! Converter backed by an external `pandoc` process (HTML → GitHub-flavored
//! markdown).

use crate::convert::HtmlConverter;
use crate::error::{Error, Result};
use std::io::Write;
use std::process::{Command, Stdio};
use std::thread;

pub struct PandocConverter {
    program: String,
}

impl PandocConverter {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn args(heading_shift: usize) -> Vec<String> {
        vec![
            "--from=html".to_string(),
            "--to=gfm".to_string(),
            format!("--shift-heading-level-by={}", heading_shift),
        ]
    }
}

impl HtmlConverter for PandocConverter {
    fn convert(&self, html: &str, heading_shift: usize) -> Result<String> {
        let mut child = Command::new(&self.program)
            .args(Self::args(heading_shift))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| Error::Converter(format!("failed to run {}: {}", self.program, e)))?;

        // Feed stdin from another thread so a large output cannot fill the
        // stdout pipe while we are still writing.
        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| Error::Converter("pandoc stdin unavailable".to_string()))?;
        let input = html.to_string();
        let writer = thread::spawn(move || stdin.write_all(input.as_bytes()));

        let output = child
            .wait_with_output()
            .map_err(|e| Error::Converter(format!("failed to wait for {}: {}", self.program, e)))?;
        let written = writer
            .join()
            .map_err(|_| Error::Converter("pandoc stdin writer panicked".to_string()))?;

        if !output.status.success() {
            return Err(Error::Converter(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        written
            .map_err(|e| Error::Converter(format!("failed to write to {}: {}", self.program, e)))?;

        String::from_utf8(output.stdout)
            .map_err(|e| Error::Converter(format!("{} produced invalid UTF-8: {}", self.program, e)))
    }
}
