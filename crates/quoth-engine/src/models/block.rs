use serde::{Deserialize, Serialize};

use super::position::Loc;

/// A named inline anchor (`^id`) and the line that carries it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub id: String,
    pub loc: Loc,
}
