use crate::board::Board;
use crate::dictionary::Dictionary;
use crate::game::{Direction, PrefixMatcher, RayScanner};
use crate::models::MatchReport;

/// The brute-force sweep over the whole board.
///
/// Traversal order is fixed: x outer ascending, y inner ascending,
/// directions in `Direction::ALL` order, dictionary words in file
/// order. The same inputs always produce the same ordered reports,
/// and overlapping matches are all reported independently.
pub struct SearchDriver<'a> {
    board: &'a Board,
    dictionary: &'a Dictionary,
}

impl<'a> SearchDriver<'a> {
    pub fn new(board: &'a Board, dictionary: &'a Dictionary) -> Self {
        Self { board, dictionary }
    }

    /// Run the full sweep, handing each match to `on_match` as it is found.
    pub fn run(&self, mut on_match: impl FnMut(MatchReport)) {
        for x in 0..self.board.cols() {
            for y in 0..self.board.rows() {
                for direction in Direction::ALL {
                    let candidate = RayScanner::scan(self.board, x, y, direction);

                    for word in self.dictionary.words() {
                        if PrefixMatcher::is_match(&candidate, word) {
                            on_match(MatchReport {
                                word: word.clone(),
                                x,
                                y,
                                direction,
                            });
                        }
                    }
                }
            }
        }

        tracing::debug!(
            "Search finished: {} cells x 8 directions x {} words",
            self.board.cols() * self.board.rows(),
            self.dictionary.len()
        );
    }

    /// Collect every match in report order (used by tests)
    pub fn find_all(&self) -> Vec<MatchReport> {
        let mut matches = Vec::new();
        self.run(|report| matches.push(report));
        matches
    }
}
