use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::models::{Block, DocMetadata, Heading, Loc, Pos, PosRange};

/// Headings with an anchored paragraph and text before the first heading.
pub const NESTED_DOC: &str = "Pre-heading text.
# First Level
TextA
## Second Level One
TextB
## Second Level Two
TextC ^ablockid
### Third Level One
TextD
## Second Level Three
Text E
";

/// Repeated titles at every depth, ending with two identical roots.
pub const DUPE_DOC: &str = "# Section 1
## A
### 1
Test1
### 2
Test2
## B
### 1
Test3
# Section 2
## A
### 1
Test4
# Not Unique
Test5
# Not Unique
Test 6";

/// Build metadata with a plain line scanner: `#… title` lines are headings
/// and a trailing ` ^id` marks a block. Keeps resolver tests independent of
/// the markdown parser.
pub fn scan_metadata(text: &str) -> DocMetadata {
    let mut headings = Vec::new();
    let mut blocks = BTreeMap::new();
    let mut offset = 0;

    for (line_no, line) in text.split('\n').enumerate() {
        let loc = Loc {
            start: Pos {
                line: line_no,
                col: 0,
                offset,
            },
            end: Pos {
                line: line_no,
                col: line.len(),
                offset: offset + line.len(),
            },
        };

        let hashes = line.bytes().take_while(|b| *b == b'#').count();
        if hashes > 0
            && let Some(title) = line[hashes..].strip_prefix(' ')
            && !title.is_empty()
        {
            headings.push(Heading {
                title: title.to_string(),
                level: hashes as u8,
                loc,
            });
        }

        if let Some((_, id)) = line.rsplit_once(" ^")
            && !id.is_empty()
            && id.chars().all(|c| c.is_ascii_alphanumeric())
        {
            blocks.insert(
                id.to_string(),
                Block {
                    id: id.to_string(),
                    loc,
                },
            );
        }

        offset += line.len() + 1;
    }

    DocMetadata::new(headings, blocks, text.len())
}

/// Range covering columns of a single line.
pub fn on_line(line: usize) -> PosRange {
    PosRange::from_coords(line, 0, line, 5)
}

/// Create a temporary notes directory with test files
pub fn create_test_notes_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a test markdown file with content
pub fn create_test_file(notes_dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = notes_dir.path().join(filename);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&file_path, content).unwrap();
    file_path
}
