use serde::{Deserialize, Serialize};

/// A byte range into the document text.
///
/// Produced by the content span calculator, where `end` is the offset of the
/// character just before the next owning heading (or the document length).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OffsetRange {
    /// Start byte offset.
    pub start: usize,
    /// End byte offset.
    pub end: usize,
}

impl OffsetRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Slices `text` by this range, clamped to the text and to char boundaries.
    pub fn slice(self, text: &str) -> &str {
        let mut end = self.end.min(text.len());
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        let mut start = self.start.min(end);
        while !text.is_char_boundary(start) {
            start -= 1;
        }
        &text[start..end]
    }
}
