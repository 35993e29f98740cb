use xi_rope::Rope;

use crate::models::OffsetRange;

/// A single line of the rope with its byte span.
#[derive(Debug, Clone)]
pub struct LineRef {
    /// 0-based line number.
    pub number: usize,
    /// Byte span of this line in the rope, excluding the line terminator.
    pub span: OffsetRange,
    /// The line text without its terminator.
    pub text: String,
}

/// Returns an iterator over lines with their byte spans.
///
/// Walks `lines_raw` so offsets account for `\n` and `\r\n` terminators,
/// then strips the terminator from the reported span and text.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..).enumerate().map(move |(number, line)| {
        let start = offset;
        offset += line.len();
        let text = line.trim_end_matches(['\n', '\r']).to_string();
        LineRef {
            number,
            span: OffsetRange::new(start, start + text.len()),
            text,
        }
    })
}
