use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Address of a location inside one document.
///
/// Renders as `#t1#t2…#tN` for a heading path (root side first) or `#^id`
/// for a block anchor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subpath {
    /// Heading titles, outermost first. Possibly a strict suffix of the full
    /// ancestor chain.
    Headings(Vec<String>),
    /// A block anchor id, without the `^`.
    Block(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubpathParseError {
    #[error("subpath is empty")]
    Empty,
    #[error("subpath must start with '#': {0:?}")]
    MissingHash(String),
    #[error("subpath has an empty heading segment: {0:?}")]
    EmptySegment(String),
    #[error("block reference has no id: {0:?}")]
    EmptyBlockId(String),
}

impl Subpath {
    /// Titles of a heading path, or `None` for a block reference.
    pub fn titles(&self) -> Option<&[String]> {
        match self {
            Subpath::Headings(titles) => Some(titles),
            Subpath::Block(_) => None,
        }
    }
}

impl fmt::Display for Subpath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subpath::Headings(titles) => {
                for title in titles {
                    write!(f, "#{title}")?;
                }
                Ok(())
            }
            Subpath::Block(id) => write!(f, "#^{id}"),
        }
    }
}

impl FromStr for Subpath {
    type Err = SubpathParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(SubpathParseError::Empty);
        }
        let rest = s
            .strip_prefix('#')
            .ok_or_else(|| SubpathParseError::MissingHash(s.to_string()))?;

        if let Some(id) = rest.strip_prefix('^') {
            if id.is_empty() {
                return Err(SubpathParseError::EmptyBlockId(s.to_string()));
            }
            return Ok(Subpath::Block(id.to_string()));
        }

        let titles: Vec<String> = rest.split('#').map(str::to_string).collect();
        if titles.iter().any(String::is_empty) {
            return Err(SubpathParseError::EmptySegment(s.to_string()));
        }
        Ok(Subpath::Headings(titles))
    }
}
