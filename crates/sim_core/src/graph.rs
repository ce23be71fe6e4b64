use std::hash::{Hash, Hasher};

use crate::error::{Result, SimError};
use crate::types::*;
use crate::zobrist::ZOBRIST;

/// Edge coloring of the complete graph on six points.
///
/// The 6x6 matrix is always symmetric: `cells[a][b] == cells[b][a]`, and the
/// diagonal stays `Uncolored`. A state is never modified after construction;
/// [`GraphState::apply_move`] returns a new value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GraphState {
    cells: [[EdgeColor; VERTICES]; VERTICES],
    /// Zobrist key of `cells`, kept in step with every write.
    key: u64,
}

impl Default for GraphState {
    fn default() -> Self {
        Self::empty()
    }
}

impl Hash for GraphState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.key);
    }
}

impl GraphState {
    /// The board with no colored edges.
    pub const fn empty() -> Self {
        Self {
            cells: [[EdgeColor::Uncolored; VERTICES]; VERTICES],
            key: 0,
        }
    }

    /// Colors edge `{a, b}` and returns the resulting state.
    ///
    /// Fails with [`SimError::InvalidMove`] for self-loops, vertices outside
    /// 0..6 and edges that already carry a color; `self` is untouched either way.
    pub fn apply_move(&self, a: Vertex, b: Vertex, color: Color) -> Result<GraphState> {
        let invalid = |reason| SimError::InvalidMove { a, b, reason };
        if a == b {
            return Err(invalid("self-loop"));
        }
        let edge = Edge::new(a, b).ok_or_else(|| invalid("vertex out of range"))?;
        if !self.is_edge_free(a, b) {
            return Err(invalid("edge already colored"));
        }

        let mut next = *self;
        let (a, b) = (a as usize, b as usize);
        next.cells[a][b] = color.into();
        next.cells[b][a] = color.into();
        next.key ^= ZOBRIST.edge_key(edge, color);
        Ok(next)
    }

    /// True iff `{a, b}` is a valid edge with no color yet.
    pub fn is_edge_free(&self, a: Vertex, b: Vertex) -> bool {
        a != b && in_range(a) && in_range(b) && !self.cells[a as usize][b as usize].is_colored()
    }

    /// Coloring of `{a, b}`; `Uncolored` for the diagonal and out-of-range pairs.
    pub fn edge_color(&self, a: Vertex, b: Vertex) -> EdgeColor {
        if !in_range(a) || !in_range(b) {
            return EdgeColor::Uncolored;
        }
        self.cells[a as usize][b as usize]
    }

    pub fn colored_count(&self) -> usize {
        EDGES
            .iter()
            .filter(|e| self.edge_color(e.a, e.b).is_colored())
            .count()
    }

    /// Uncolored edges in canonical order.
    pub fn free_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        EDGES.iter().copied().filter(|e| self.is_edge_free(e.a, e.b))
    }

    pub fn is_empty(&self) -> bool {
        self.colored_count() == 0
    }

    pub fn is_full(&self) -> bool {
        self.colored_count() == EDGE_COUNT
    }

    /// Zobrist key of the coloring; equal boards always have equal keys.
    pub fn key(&self) -> u64 {
        self.key
    }

    /// The first edge, in canonical order, whose color differs from `other`.
    pub fn first_difference(&self, other: &GraphState) -> Option<Edge> {
        EDGES
            .iter()
            .copied()
            .find(|e| self.edge_color(e.a, e.b) != other.edge_color(e.a, e.b))
    }

    /// Full matrix, row by row.
    pub fn rows(&self) -> &[[EdgeColor; VERTICES]; VERTICES] {
        &self.cells
    }
}

#[cfg(test)]
#[path = "graph_tests.rs"]
mod graph_tests;
