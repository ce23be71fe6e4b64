//! Text forms of edges and boards.
//!
//! Board notation lists the 15 edges in canonical order, one digit each:
//! `0` (or `.`) uncolored, `1` solid, `2` dashed. Whitespace is ignored, so
//! `"00000 0000 000 00 0"` is the empty board.

use crate::error::{Result, SimError};
use crate::graph::GraphState;
use crate::types::*;

fn notation_error(input: &str, message: impl Into<String>) -> SimError {
    SimError::Notation {
        input: input.to_string(),
        message: message.into(),
    }
}

/// Parses a human edge entry such as `"0 1"`.
///
/// Syntax problems (missing or non-numeric tokens) are `Notation` errors;
/// self-loops and out-of-range vertices are `InvalidMove`.
pub fn parse_edge(txt: &str) -> Result<Edge> {
    let mut tokens = txt.split_whitespace();
    let mut vertex = || -> Result<u8> {
        let tok = tokens
            .next()
            .ok_or_else(|| notation_error(txt, "expected two vertex numbers"))?;
        tok.parse::<u8>()
            .map_err(|_| notation_error(txt, format!("'{tok}' is not a vertex number")))
    };
    let a = vertex()?;
    let b = vertex()?;
    if tokens.next().is_some() {
        return Err(notation_error(txt, "expected exactly two vertex numbers"));
    }
    Edge::new(a, b).ok_or(SimError::InvalidMove {
        a,
        b,
        reason: if a == b { "self-loop" } else { "vertex out of range" },
    })
}

impl GraphState {
    /// Parses the 15-digit board notation.
    pub fn from_notation(txt: &str) -> Result<GraphState> {
        let codes: Vec<char> = txt.chars().filter(|c| !c.is_whitespace()).collect();
        if codes.len() != EDGE_COUNT {
            return Err(notation_error(
                txt,
                format!("expected {EDGE_COUNT} edge codes, got {}", codes.len()),
            ));
        }

        let mut state = GraphState::empty();
        for (edge, code) in EDGES.iter().zip(codes) {
            let color = match code {
                '0' | '.' => continue,
                '1' => Color::Solid,
                '2' => Color::Dashed,
                other => return Err(notation_error(txt, format!("invalid edge code '{other}'"))),
            };
            state = state.apply_move(edge.a, edge.b, color)?;
        }
        Ok(state)
    }

    pub fn to_notation(&self) -> String {
        EDGES
            .iter()
            .map(|e| self.edge_color(e.a, e.b).code())
            .collect()
    }
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
