use crate::models::{Heading, OffsetRange, PosRange};

/// Returns the chain of headings (root first) that enclose `range`.
///
/// The chain is built from the flat heading list by level comparison: start
/// at the last heading whose own line ends on or before the range's last
/// line and walk back, keeping each heading shallower than everything seen
/// so far. A kept heading only joins the chain if it starts on or before the
/// range's first line, so a range spanning sibling sections collapses to
/// their common parent.
pub fn resolve_ancestors<'a>(headings: &'a [Heading], range: &PosRange) -> Vec<&'a Heading> {
    let Some(last) = index_of_last_heading(headings, range.max_line()) else {
        return Vec::new();
    };

    let first_line = range.min_line();
    let mut chain = Vec::new();
    let mut min_level: Option<u8> = None;
    for heading in headings[..=last].iter().rev() {
        if min_level.is_none_or(|min| heading.level < min) {
            min_level = Some(heading.level);
            if heading.start_line() <= first_line {
                chain.push(heading);
            }
        }
    }
    chain.reverse();
    chain
}

/// Byte range a heading owns: its own line up to just before the next
/// heading of the same or shallower level, or `doc_len` if there is none.
pub fn content_span(heading: &Heading, headings: &[Heading], doc_len: usize) -> OffsetRange {
    let start = heading.start_offset();
    let following = match headings.iter().position(|h| h.loc == heading.loc) {
        Some(idx) => idx + 1,
        None => headings.partition_point(|h| h.start_offset() <= start),
    };

    let end = headings[following..]
        .iter()
        .find(|h| h.level <= heading.level)
        .map_or(doc_len, |next| next.start_offset().saturating_sub(1));

    OffsetRange::new(start, end)
}

fn index_of_last_heading(headings: &[Heading], before_line: usize) -> Option<usize> {
    headings
        .iter()
        .take_while(|h| h.end_line() <= before_line)
        .count()
        .checked_sub(1)
}
