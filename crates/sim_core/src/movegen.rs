use crate::{graph::GraphState, types::*};

/// Every uncolored edge, in ascending lexicographic order on (a, b).
pub fn legal_moves(state: &GraphState) -> Vec<Edge> {
    state.free_edges().collect()
}

/// One successor per uncolored edge, each with that edge colored `color`.
///
/// The order matches [`legal_moves`]: the i-th successor is the i-th legal
/// move applied. Search tie-breaking depends on this order.
pub fn generate_successors(state: &GraphState, color: Color) -> Vec<GraphState> {
    state
        .free_edges()
        .filter_map(|e| state.apply_move(e.a, e.b, color).ok())
        .collect()
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
