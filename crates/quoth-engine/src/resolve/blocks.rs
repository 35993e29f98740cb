use std::collections::BTreeMap;

use crate::models::{Block, PosRange};

/// Returns the block anchor whose line holds the whole of `range`.
///
/// Anchors sit on a single line, so this only matches ranges that start and
/// end on that line. If two anchors share a line the last one in id order wins.
pub fn resolve_block<'a>(
    blocks: &'a BTreeMap<String, Block>,
    range: &PosRange,
) -> Option<&'a Block> {
    blocks
        .values()
        .rev()
        .find(|block| block.loc.contains_lines(range))
}
