use crate::{graph::GraphState, movegen::generate_successors, triangle::evaluate, types::Color};

/// Leaf count of the game tree below `state` to `depth` plies.
/// Positions with a triangle are leaves regardless of remaining depth.
pub fn perft(state: &GraphState, to_move: Color, depth: u8) -> u64 {
    if depth == 0 || evaluate(state).is_some() {
        return 1;
    }
    generate_successors(state, to_move)
        .iter()
        .map(|child| perft(child, to_move.other(), depth - 1))
        .sum()
}
