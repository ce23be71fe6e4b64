//! Zobrist hashing for edge colorings.
//!
//! Every (edge, color) pair gets a fixed random value; the key of a state is the
//! XOR of the values of its colored edges. Coloring one edge updates the key in
//! O(1), and the key depends only on the coloring, never on move order, so two
//! move sequences reaching the same board share a transposition entry.

use crate::types::{Color, EDGE_COUNT, Edge};

/// Pre-computed random values for Zobrist hashing.
/// Generated using a fixed seed for reproducibility.
pub struct ZobristKeys {
    /// Indexed by [canonical edge index][color index]
    pub edges: [[u64; 2]; EDGE_COUNT],
}

impl Default for ZobristKeys {
    fn default() -> Self {
        Self::new()
    }
}

impl ZobristKeys {
    /// Generate keys with xorshift64 from a fixed seed.
    pub const fn new() -> Self {
        const fn xorshift64(mut state: u64) -> u64 {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state
        }

        let mut state = 0x5EED_0F_5101_C0DEu64;

        let mut edges = [[0u64; 2]; EDGE_COUNT];
        let mut e = 0;
        while e < EDGE_COUNT {
            let mut c = 0;
            while c < 2 {
                state = xorshift64(state);
                edges[e][c] = state;
                c += 1;
            }
            e += 1;
        }

        ZobristKeys { edges }
    }

    #[inline(always)]
    pub fn edge_key(&self, edge: Edge, color: Color) -> u64 {
        self.edges[edge.index()][color.idx()]
    }
}

/// Global static Zobrist keys, computed at compile time.
pub static ZOBRIST: ZobristKeys = ZobristKeys::new();

#[cfg(test)]
#[path = "zobrist_tests.rs"]
mod zobrist_tests;
