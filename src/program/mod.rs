mod instruction;
pub use instruction::Instruction;

use std::fs;
use std::path::Path;
use std::str::FromStr;

use anyhow::Context;
use log::debug;

/// An instruction together with the 1-based line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub number: usize,
    pub instruction: Instruction,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Program {
    lines: Vec<Line>,
}

impl Program {
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Read and parse a stack script from disk.
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;

        source.parse()
    }
}

impl FromStr for Program {
    type Err = anyhow::Error;

    fn from_str(source: &str) -> anyhow::Result<Self> {
        let mut lines = Vec::new();

        for (idx, raw) in source.lines().enumerate() {
            let number = idx + 1;

            // strip comments
            let text = match raw.find('#') {
                Some(pos) => &raw[..pos],
                None => raw,
            }
            .trim();

            if text.is_empty() {
                continue;
            }

            let instruction = text
                .parse()
                .with_context(|| format!("line {}: {:?}", number, raw.trim()))?;

            lines.push(Line {
                number,
                instruction,
            });
        }

        debug!("parsed {} instructions", lines.len());

        Ok(Self { lines })
    }
}
