use serde::{Deserialize, Serialize};

use crate::game::Direction;

/// A single reported match: the word, the scan's starting cell and the
/// scan direction. Reports are emitted as they are found and never
/// stored by the search engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    pub word: String,
    pub x: usize,
    pub y: usize,
    pub direction: Direction,
}
