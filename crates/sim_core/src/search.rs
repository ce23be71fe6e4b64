//! Exhaustive minimax with alpha-beta pruning.
//!
//! Scores are from a fixed viewpoint: a solid triangle is -1, a dashed one +1.
//! The maximizer is whichever color seeks +1; that choice is the only
//! configuration, so the same code plays either win rule.

use std::collections::HashMap;

use crate::error::{Result, SimError};
use crate::graph::GraphState;
use crate::movegen::generate_successors;
use crate::triangle::{DASHED_TRIANGLE, SOLID_TRIANGLE, evaluate};
use crate::types::{Color, Edge};

pub type Score = i32;

/// Window bound standing in for infinity.
pub const INFINITY: Score = i32::MAX / 2;

/// Kind of value stored for a position searched with a narrow window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    Exact,
    /// True score is at least the stored one (search failed high).
    Lower,
    /// True score is at most the stored one (search failed low).
    Upper,
}

#[derive(Clone, Copy, Debug)]
struct Entry {
    score: Score,
    bound: Bound,
}

/// Scores keyed by position and side to move.
#[derive(Debug, Default)]
pub struct TranspositionTable {
    entries: HashMap<(GraphState, Color), Entry>,
}

impl TranspositionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn probe(&self, state: &GraphState, to_move: Color) -> Option<Entry> {
        self.entries.get(&(*state, to_move)).copied()
    }

    fn store(&mut self, state: &GraphState, to_move: Color, score: Score, bound: Bound) {
        self.entries.insert((*state, to_move), Entry { score, bound });
    }
}

/// Move picked at the root.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RootChoice {
    pub edge: Edge,
    /// Position after the move.
    pub state: GraphState,
    pub score: Score,
}

/// Alpha-beta searcher for one maximizer color.
#[derive(Debug)]
pub struct Searcher {
    maximizer: Color,
    table: Option<TranspositionTable>,
    nodes: u64,
}

impl Searcher {
    /// Plain alpha-beta with no memoization.
    pub fn new(maximizer: Color) -> Self {
        Self {
            maximizer,
            table: None,
            nodes: 0,
        }
    }

    /// Alpha-beta backed by a transposition table. Root choices and scores are
    /// identical to [`Searcher::new`]; only the node count differs.
    pub fn with_table(maximizer: Color) -> Self {
        Self {
            maximizer,
            table: Some(TranspositionTable::new()),
            nodes: 0,
        }
    }

    pub fn maximizer(&self) -> Color {
        self.maximizer
    }

    /// Nodes visited since the last [`Searcher::reset_nodes`].
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    pub fn reset_nodes(&mut self) {
        self.nodes = 0;
    }

    pub fn table_len(&self) -> usize {
        self.table.as_ref().map_or(0, TranspositionTable::len)
    }

    /// Drop memoized scores, e.g. between games.
    pub fn clear(&mut self) {
        if let Some(table) = self.table.as_mut() {
            table.clear();
        }
        self.nodes = 0;
    }

    /// Picks the best move for `to_move`.
    ///
    /// Each child is scored with a full window, in generation order; ties keep
    /// the first child. Fails with `GameOver` if `state` already holds a
    /// triangle.
    pub fn select_move(&mut self, state: &GraphState, to_move: Color) -> Result<RootChoice> {
        if evaluate(state).is_some() {
            return Err(SimError::GameOver);
        }
        let maximizing = to_move == self.maximizer;

        let mut best: Option<RootChoice> = None;
        for child in generate_successors(state, to_move) {
            let score = self.search(&child, to_move.other(), -INFINITY, INFINITY)?;
            let better = match best {
                None => true,
                Some(b) if maximizing => score > b.score,
                Some(b) => score < b.score,
            };
            if better {
                let edge = child.first_difference(state).ok_or_else(|| {
                    SimError::InternalConsistency("successor equals its parent".into())
                })?;
                best = Some(RootChoice {
                    edge,
                    state: child,
                    score,
                });
            }
        }

        best.ok_or_else(|| {
            SimError::InternalConsistency(format!(
                "no legal move and no triangle on {}",
                state.to_notation()
            ))
        })
    }

    /// Minimax value of `state` with `to_move` about to play.
    ///
    /// Fail-soft alpha-beta: a result `<= alpha` is an upper bound, `>= beta` a
    /// lower bound, anything between is exact.
    pub fn search(
        &mut self,
        state: &GraphState,
        to_move: Color,
        alpha: Score,
        beta: Score,
    ) -> Result<Score> {
        self.nodes += 1;

        if let Some(triangle) = evaluate(state) {
            return Ok(triangle.score());
        }

        // Every terminal score lies in [SOLID_TRIANGLE, DASHED_TRIANGLE].
        let mut alpha = alpha.max(SOLID_TRIANGLE);
        let mut beta = beta.min(DASHED_TRIANGLE);
        let (alpha_in, beta_in) = (alpha, beta);

        if let Some(entry) = self.table.as_ref().and_then(|t| t.probe(state, to_move)) {
            match entry.bound {
                Bound::Exact => return Ok(entry.score),
                Bound::Lower => alpha = alpha.max(entry.score),
                Bound::Upper => beta = beta.min(entry.score),
            }
            if beta <= alpha {
                return Ok(entry.score);
            }
        }

        let successors = generate_successors(state, to_move);
        if successors.is_empty() {
            return Err(SimError::InternalConsistency(format!(
                "fully colored board {} has no monochromatic triangle",
                state.to_notation()
            )));
        }

        let best = if to_move == self.maximizer {
            let mut best = -INFINITY;
            for child in &successors {
                let score = self.search(child, to_move.other(), alpha, beta)?;
                best = best.max(score);
                alpha = alpha.max(best);
                if beta <= alpha {
                    break; // Beta cutoff
                }
            }
            best
        } else {
            let mut best = INFINITY;
            for child in &successors {
                let score = self.search(child, to_move.other(), alpha, beta)?;
                best = best.min(score);
                beta = beta.min(best);
                if beta <= alpha {
                    break; // Alpha cutoff
                }
            }
            best
        };

        if let Some(table) = self.table.as_mut() {
            let bound = if best <= alpha_in {
                Bound::Upper
            } else if best >= beta_in {
                Bound::Lower
            } else {
                Bound::Exact
            };
            table.store(state, to_move, best, bound);
        }

        Ok(best)
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
