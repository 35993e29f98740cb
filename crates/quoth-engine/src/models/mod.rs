pub mod block;
pub mod heading;
pub mod metadata;
pub mod position;
pub mod span;
pub mod subpath;

pub use block::Block;
pub use heading::Heading;
pub use metadata::{DocMetadata, DocumentMetadata};
pub use position::{Loc, Point, Pos, PosRange};
pub use span::OffsetRange;
pub use subpath::{Subpath, SubpathParseError};
