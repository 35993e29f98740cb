use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{block::Block, heading::Heading};

/// Read access to a document's extracted outline.
///
/// Implementors must return headings in document order and key blocks by a
/// unique id. Neither property is checked by the resolvers.
pub trait DocumentMetadata {
    /// Headings in document order. Empty when the document has none.
    fn headings(&self) -> &[Heading];

    /// Block anchors keyed by id.
    fn blocks(&self) -> &BTreeMap<String, Block>;
}

/// An owned metadata snapshot for one version of a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocMetadata {
    pub headings: Vec<Heading>,
    pub blocks: BTreeMap<String, Block>,
    /// Length of the source text in bytes.
    pub doc_len: usize,
}

impl DocMetadata {
    pub fn new(headings: Vec<Heading>, blocks: BTreeMap<String, Block>, doc_len: usize) -> Self {
        Self {
            headings,
            blocks,
            doc_len,
        }
    }
}

impl DocumentMetadata for DocMetadata {
    fn headings(&self) -> &[Heading] {
        &self.headings
    }

    fn blocks(&self) -> &BTreeMap<String, Block> {
        &self.blocks
    }
}
