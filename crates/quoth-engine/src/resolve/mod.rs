//! # Location Resolution
//!
//! Pure functions over a document's extracted outline. Nothing here parses
//! markdown or keeps state between calls.
//!
//! - **`headings`**: enclosing heading chain for a range, and the byte span
//!   a heading owns
//! - **`blocks`**: block anchor whose line holds a range
//! - **`subpath`**: shortest unique `#…` address for a range, and the
//!   reverse lookup from an address to a byte range

pub mod blocks;
pub mod headings;
pub mod subpath;

pub use blocks::resolve_block;
pub use headings::{content_span, resolve_ancestors};
pub use subpath::{resolve_heading, resolve_subpath, synthesize_path, synthesize_subpath};
