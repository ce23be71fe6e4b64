pub mod error;
pub mod graph;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod search;
pub mod triangle;
pub mod types;
pub mod zobrist;

// Re-export core game logic (not engine-specific)
pub use error::{Result, SimError};
pub use graph::*;
pub use movegen::*;
pub use notation::parse_edge;
pub use perft::perft;
pub use search::{INFINITY, RootChoice, Score, Searcher, TranspositionTable};
pub use triangle::*;
pub use types::*;
pub use zobrist::ZOBRIST;

// =============================================================================
// Engine trait — implemented by move pickers the controller can drive
// =============================================================================

/// Result of a move selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// The edge the engine colors
    pub edge: Edge,
    /// Position after the move
    pub state: GraphState,
    /// Minimax score of `state` (-1 solid triangle, +1 dashed triangle; the
    /// win rule decides which side that favors)
    pub score: Score,
    /// Number of nodes searched
    pub nodes: u64,
    /// True when the move came from the opening shortcut rather than search
    pub from_book: bool,
}

/// Trait for anything that picks a move for the side to play.
pub trait Engine {
    /// Choose a move for `to_move` in `state`.
    ///
    /// # Errors
    /// `GameOver` if `state` already holds a triangle, `InternalConsistency`
    /// if the search meets a full board without one.
    fn choose_move(&mut self, state: &GraphState, to_move: Color) -> Result<SearchResult>;

    /// Returns the engine's name for display
    fn name(&self) -> &str;

    /// Reset internal state for a new game (clear hash tables etc.)
    fn new_game(&mut self) {}
}
