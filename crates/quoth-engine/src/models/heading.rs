use serde::{Deserialize, Serialize};

use super::position::Loc;

/// One markdown heading occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Heading text exactly as written. Not unique within a document.
    pub title: String,
    /// Nesting depth, 1 for `#`. Lower is shallower.
    pub level: u8,
    /// The heading's own line(s).
    pub loc: Loc,
}

impl Heading {
    pub fn start_line(&self) -> usize {
        self.loc.start.line
    }

    pub fn end_line(&self) -> usize {
        self.loc.end.line
    }

    pub fn start_offset(&self) -> usize {
        self.loc.start.offset
    }
}
