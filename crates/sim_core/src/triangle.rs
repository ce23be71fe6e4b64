//! Terminal detection: monochromatic triangles.

use crate::error::{Result, SimError};
use crate::graph::GraphState;
use crate::types::*;

/// Score of a position holding a dashed triangle.
pub const DASHED_TRIANGLE: i32 = 1;
/// Score of a position holding a solid triangle.
pub const SOLID_TRIANGLE: i32 = -1;

/// A monochromatic triangle, vertices ascending.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Triangle {
    pub color: Color,
    pub vertices: [Vertex; 3],
}

impl Triangle {
    /// Terminal score: solid triangles score -1, dashed +1.
    pub fn score(&self) -> i32 {
        match self.color {
            Color::Solid => SOLID_TRIANGLE,
            Color::Dashed => DASHED_TRIANGLE,
        }
    }
}

/// First monochromatic triangle in canonical (i, j, k) order, if any.
///
/// A single move can close several triangles at once; only the first is
/// reported.
pub fn evaluate(state: &GraphState) -> Option<Triangle> {
    TRIANGLES.iter().find_map(|&[i, j, k]| {
        let ij = state.edge_color(i, j);
        let color = ij.color()?;
        (ij == state.edge_color(j, k) && ij == state.edge_color(i, k)).then_some(Triangle {
            color,
            vertices: [i, j, k],
        })
    })
}

/// [`evaluate`] plus the Ramsey check: two colors on all 15 edges always
/// contain a triangle, so a full board without one means the state is corrupt.
pub fn check_terminal(state: &GraphState) -> Result<Option<Triangle>> {
    match evaluate(state) {
        Some(t) => Ok(Some(t)),
        None if state.is_full() => Err(SimError::InternalConsistency(format!(
            "fully colored board {} has no monochromatic triangle",
            state.to_notation()
        ))),
        None => Ok(None),
    }
}

#[cfg(test)]
#[path = "triangle_tests.rs"]
mod triangle_tests;
