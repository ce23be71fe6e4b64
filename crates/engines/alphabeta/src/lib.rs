//! Alpha-Beta Sim Engine
//!
//! Exhaustive minimax with alpha-beta pruning over the whole remaining game.
//! No heuristic cut-off exists: every line is searched to a triangle.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use sim_core::{
    legal_moves, Color, Engine, GraphState, Result, SearchResult, Searcher, SimError, WinRule,
};

#[cfg(test)]
mod lib_tests;

/// Engine options, usually read from the `[engine]` table of the game config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Memoize scores by position and side to move
    pub transposition_table: bool,
    /// On an empty board play a random edge instead of searching; every first
    /// move is the same up to relabeling the vertices
    pub random_opening: bool,
    /// Seed for the opening choice (None = seeded from the OS)
    pub opening_seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            transposition_table: true,
            random_opening: true,
            opening_seed: None,
        }
    }
}

/// Sim engine using exhaustive alpha-beta search.
#[derive(Debug)]
pub struct AlphaBetaEngine {
    searcher: Searcher,
    config: EngineConfig,
    rng: StdRng,
}

impl AlphaBetaEngine {
    pub fn new(rule: WinRule, config: EngineConfig) -> Self {
        let maximizer = rule.maximizer();
        let searcher = if config.transposition_table {
            Searcher::with_table(maximizer)
        } else {
            Searcher::new(maximizer)
        };
        let rng = match config.opening_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            searcher,
            config,
            rng,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Positions currently memoized.
    pub fn table_len(&self) -> usize {
        self.searcher.table_len()
    }

    fn opening_move(&mut self, state: &GraphState, to_move: Color) -> Result<SearchResult> {
        let moves = legal_moves(state);
        let edge = *moves.choose(&mut self.rng).ok_or_else(|| {
            SimError::InternalConsistency("empty board has no legal moves".into())
        })?;
        let next = state.apply_move(edge.a, edge.b, to_move)?;
        info!("opening shortcut: {to_move} plays {edge}");

        Ok(SearchResult {
            edge,
            state: next,
            score: 0, // not searched
            nodes: 0,
            from_book: true,
        })
    }
}

impl Engine for AlphaBetaEngine {
    fn choose_move(&mut self, state: &GraphState, to_move: Color) -> Result<SearchResult> {
        if self.config.random_opening && state.is_empty() {
            return self.opening_move(state, to_move);
        }

        self.searcher.reset_nodes();
        let choice = self.searcher.select_move(state, to_move)?;
        debug!(
            "{to_move} plays {} (score {}, {} nodes, {} table entries)",
            choice.edge,
            choice.score,
            self.searcher.nodes(),
            self.searcher.table_len()
        );

        Ok(SearchResult {
            edge: choice.edge,
            state: choice.state,
            score: choice.score,
            nodes: self.searcher.nodes(),
            from_book: false,
        })
    }

    fn name(&self) -> &str {
        "AlphaBeta v1.0"
    }

    fn new_game(&mut self) {
        self.searcher.clear();
    }
}
