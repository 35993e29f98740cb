use crate::models::{DocumentMetadata, Heading, OffsetRange, PosRange, Subpath};

use super::{blocks::resolve_block, headings::content_span, headings::resolve_ancestors};

/// Finds the shortest subpath that addresses `range` without ambiguity.
///
/// A block anchor covering the range always wins. Otherwise the enclosing
/// heading chain is tried as growing suffixes, leaf first, until exactly one
/// heading in the whole document ends with the same run of titles. Returns
/// `None` when no heading encloses the range or when even the full chain is
/// shared with another heading.
pub fn synthesize_subpath(metadata: &impl DocumentMetadata, range: &PosRange) -> Option<Subpath> {
    if let Some(block) = resolve_block(metadata.blocks(), range) {
        return Some(Subpath::Block(block.id.clone()));
    }

    let headings = metadata.headings();
    let chain = resolve_ancestors(headings, range);
    let leaf = chain.last()?;

    let namesakes: Vec<Vec<&Heading>> = headings
        .iter()
        .filter(|h| h.title == leaf.title)
        .map(|h| heading_chain(headings, h))
        .collect();

    for k in 1..=chain.len() {
        let suffix = &chain[chain.len() - k..];
        let matches = namesakes
            .iter()
            .filter(|candidate| ends_with_titles(candidate, suffix))
            .count();
        log::trace!("suffix of {k} heading(s) under {:?} matches {matches}", leaf.title);
        if matches == 1 {
            return Some(Subpath::Headings(
                suffix.iter().map(|h| h.title.clone()).collect(),
            ));
        }
    }

    log::debug!(
        "no unique subpath for lines {}..={}: full chain ending in {:?} is ambiguous",
        range.min_line(),
        range.max_line(),
        leaf.title
    );
    None
}

/// String form of [`synthesize_subpath`]; empty when no unique address exists.
pub fn synthesize_path(metadata: &impl DocumentMetadata, range: &PosRange) -> String {
    synthesize_subpath(metadata, range)
        .map(|subpath| subpath.to_string())
        .unwrap_or_default()
}

/// The first heading in document order whose own chain ends with the titles
/// of `subpath`. Block references never resolve to a heading.
///
/// Chains are compared in rendered form: a title containing `#` parses
/// back into several segments.
pub fn resolve_heading<'a, M: DocumentMetadata>(
    metadata: &'a M,
    subpath: &Subpath,
) -> Option<&'a Heading> {
    if matches!(subpath, Subpath::Block(_)) {
        return None;
    }
    let target = subpath.to_string();
    let headings = metadata.headings();

    headings
        .iter()
        .filter(|h| target.ends_with(h.title.as_str()))
        .find(|h| {
            let chain = heading_chain(headings, h);
            (0..chain.len()).any(|start| render_titles(&chain[start..]) == target)
        })
}

/// Byte range addressed by `subpath`: a heading's content span, or the line
/// carrying a block anchor.
pub fn resolve_subpath(
    metadata: &impl DocumentMetadata,
    subpath: &Subpath,
    doc_len: usize,
) -> Option<OffsetRange> {
    match subpath {
        Subpath::Block(id) => metadata
            .blocks()
            .get(id)
            .map(|block| OffsetRange::new(block.loc.start.offset, block.loc.end.offset)),
        Subpath::Headings(_) => resolve_heading(metadata, subpath)
            .map(|heading| content_span(heading, metadata.headings(), doc_len)),
    }
}

/// Ancestor chain of a heading, ending with the heading itself.
fn heading_chain<'a>(headings: &'a [Heading], heading: &Heading) -> Vec<&'a Heading> {
    let own_lines = PosRange::from_coords(heading.start_line(), 0, heading.end_line(), 0);
    resolve_ancestors(headings, &own_lines)
}

fn render_titles(chain: &[&Heading]) -> String {
    chain.iter().map(|h| format!("#{}", h.title)).collect()
}

fn ends_with_titles(chain: &[&Heading], suffix: &[&Heading]) -> bool {
    chain.len() >= suffix.len()
        && chain[chain.len() - suffix.len()..]
            .iter()
            .zip(suffix)
            .all(|(a, b)| a.title == b.title)
}
