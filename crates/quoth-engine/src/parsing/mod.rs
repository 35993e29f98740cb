//! # Metadata Extraction
//!
//! Builds a [`DocMetadata`] snapshot from markdown source so the resolvers
//! can run on plain files. The resolvers themselves only see the
//! [`DocumentMetadata`](crate::models::DocumentMetadata) trait.
//!
//! - Headings come from `pulldown-cmark`, so `#` lines inside fenced code
//!   are not headings and setext headings are recognised.
//! - A heading's title is the raw source of its inline content, exactly as
//!   written (emphasis markers and escapes included).
//! - YAML front matter is recognised and skipped, so its closing `---`
//!   does not turn the metadata into a setext heading.
//! - A block anchor is a line outside code blocks and front matter ending in
//!   whitespace and `^id`.
//! - Lines, columns and offsets are byte based and come from an
//!   `xi_rope::Rope` over the source.

pub mod lines;

use std::collections::BTreeMap;
use std::ops::{Range, RangeInclusive};
use std::sync::OnceLock;

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use regex::Regex;
use xi_rope::Rope;

use crate::models::{Block, DocMetadata, Heading, Loc, Pos};

use lines::lines_with_spans;

/// Extract headings and block anchors from markdown text.
pub fn extract_metadata(text: &str) -> DocMetadata {
    let rope = Rope::from(text);
    let mut headings = Vec::new();
    let mut verbatim: Vec<RangeInclusive<usize>> = Vec::new();
    let mut open_heading: Option<(u8, Range<usize>, Option<Range<usize>>)> = None;

    let options = Options::ENABLE_YAML_STYLE_METADATA_BLOCKS;
    for (event, range) in Parser::new_ext(text, options).into_offset_iter() {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                open_heading = Some((level as u8, range, None));
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some((level, heading_range, inner)) = open_heading.take() {
                    let title = inner.map_or("", |r| &text[r]);
                    headings.push(Heading {
                        title: title.to_string(),
                        level,
                        loc: own_lines(&rope, text, heading_range),
                    });
                }
            }
            Event::Start(Tag::CodeBlock(_) | Tag::MetadataBlock(_)) => {
                verbatim.push(lines_of(&rope, &range));
            }
            _ => {
                if let Some((_, _, inner)) = open_heading.as_mut() {
                    *inner = Some(match inner.take() {
                        Some(r) => r.start.min(range.start)..r.end.max(range.end),
                        None => range,
                    });
                }
            }
        }
    }

    let mut blocks = BTreeMap::new();
    for line in lines_with_spans(&rope) {
        if verbatim.iter().any(|lines| lines.contains(&line.number)) {
            continue;
        }
        if let Some(id) = block_id(&line.text) {
            let loc = Loc {
                start: Pos {
                    line: line.number,
                    col: 0,
                    offset: line.span.start,
                },
                end: Pos {
                    line: line.number,
                    col: line.text.len(),
                    offset: line.span.end,
                },
            };
            blocks.insert(
                id.to_string(),
                Block {
                    id: id.to_string(),
                    loc,
                },
            );
        }
    }

    log::debug!(
        "extracted {} heading(s) and {} block anchor(s) from {} bytes",
        headings.len(),
        blocks.len(),
        text.len()
    );
    DocMetadata::new(headings, blocks, rope.len())
}

/// Lines touched by a parser range. Indented code starts after its
/// indentation, so offsets alone would miss the first line.
fn lines_of(rope: &Rope, range: &Range<usize>) -> RangeInclusive<usize> {
    let last = range.end.saturating_sub(1).max(range.start);
    rope.line_of_offset(range.start)..=rope.line_of_offset(last)
}

/// Expand a parser range to the full line(s) it sits on, without the
/// trailing line terminator.
fn own_lines(rope: &Rope, text: &str, range: Range<usize>) -> Loc {
    let start_line = rope.line_of_offset(range.start);
    let start = rope.offset_of_line(start_line);
    let end = start + text[start..range.end].trim_end_matches(['\n', '\r']).len();
    let end_line = rope.line_of_offset(end);

    Loc {
        start: Pos {
            line: start_line,
            col: 0,
            offset: start,
        },
        end: Pos {
            line: end_line,
            col: end - rope.offset_of_line(end_line),
            offset: end,
        },
    }
}

fn block_id(line: &str) -> Option<&str> {
    static BLOCK_ID_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = BLOCK_ID_REGEX.get_or_init(|| {
        Regex::new(r"(?:^|\s)\^([A-Za-z0-9-]+)\s*$").expect("Invalid block id regex")
    });
    regex
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
