pub mod io;
pub mod models;
pub mod parsing;
pub mod resolve;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::{IoError, LoadedDocument, load_document, locate, read_path};
pub use models::{
    Block, DocMetadata, DocumentMetadata, Heading, Loc, OffsetRange, Point, Pos, PosRange,
    Subpath, SubpathParseError,
};
pub use parsing::extract_metadata;
pub use resolve::{
    content_span, resolve_ancestors, resolve_block, resolve_heading, resolve_subpath,
    synthesize_path, synthesize_subpath,
};
