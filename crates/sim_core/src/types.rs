use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of board points.
pub const VERTICES: usize = 6;
/// Number of edges of the complete graph on six points.
pub const EDGE_COUNT: usize = VERTICES * (VERTICES - 1) / 2;
/// Number of vertex triples, C(6,3).
pub const TRIANGLE_COUNT: usize = 20;

/// A player's line color. `Solid` is the first color, `Dashed` the second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Solid,
    Dashed,
}

impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::Solid => Color::Dashed,
            Color::Dashed => Color::Solid,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Color::Solid => 0,
            Color::Dashed => 1,
        }
    }
    pub fn name(self) -> &'static str {
        match self {
            Color::Solid => "solid",
            Color::Dashed => "dashed",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Coloring of a single edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeColor {
    #[default]
    Uncolored,
    Solid,
    Dashed,
}

impl EdgeColor {
    pub fn color(self) -> Option<Color> {
        match self {
            EdgeColor::Uncolored => None,
            EdgeColor::Solid => Some(Color::Solid),
            EdgeColor::Dashed => Some(Color::Dashed),
        }
    }

    pub fn is_colored(self) -> bool {
        self != EdgeColor::Uncolored
    }

    /// Digit used by the board notation: 0 uncolored, 1 solid, 2 dashed.
    pub fn code(self) -> char {
        match self {
            EdgeColor::Uncolored => '0',
            EdgeColor::Solid => '1',
            EdgeColor::Dashed => '2',
        }
    }
}

impl From<Color> for EdgeColor {
    fn from(c: Color) -> Self {
        match c {
            Color::Solid => EdgeColor::Solid,
            Color::Dashed => EdgeColor::Dashed,
        }
    }
}

/// Board point, 0..6.
pub type Vertex = u8;

/// Unordered pair of distinct vertices, stored with `a < b`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    pub a: Vertex,
    pub b: Vertex,
}

impl Edge {
    /// Builds the canonical edge for `{a, b}`. Returns `None` for self-loops and
    /// out-of-range vertices.
    pub fn new(a: Vertex, b: Vertex) -> Option<Self> {
        if a == b || !in_range(a) || !in_range(b) {
            return None;
        }
        Some(Self {
            a: a.min(b),
            b: a.max(b),
        })
    }

    /// Position of this edge in canonical (lexicographic) order.
    pub fn index(self) -> usize {
        edge_index(self.a, self.b)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.a, self.b)
    }
}

pub fn in_range(v: Vertex) -> bool {
    (v as usize) < VERTICES
}

/// All 15 edges in ascending lexicographic order on (a, b).
pub const EDGES: [Edge; EDGE_COUNT] = {
    let mut edges = [Edge { a: 0, b: 0 }; EDGE_COUNT];
    let mut n = 0;
    let mut i = 0;
    while i < VERTICES {
        let mut j = i + 1;
        while j < VERTICES {
            edges[n] = Edge {
                a: i as u8,
                b: j as u8,
            };
            n += 1;
            j += 1;
        }
        i += 1;
    }
    edges
};

/// All 20 vertex triples `i < j < k`, i outermost.
pub const TRIANGLES: [[Vertex; 3]; TRIANGLE_COUNT] = {
    let mut tris = [[0u8; 3]; TRIANGLE_COUNT];
    let mut n = 0;
    let mut i = 0;
    while i < VERTICES {
        let mut j = i + 1;
        while j < VERTICES {
            let mut k = j + 1;
            while k < VERTICES {
                tris[n] = [i as u8, j as u8, k as u8];
                n += 1;
                k += 1;
            }
            j += 1;
        }
        i += 1;
    }
    tris
};

/// Canonical index of the edge `{a, b}`; the caller guarantees a valid pair.
pub fn edge_index(a: Vertex, b: Vertex) -> usize {
    let (lo, hi) = (a.min(b) as usize, a.max(b) as usize);
    // Edges before row `lo`: sum of (VERTICES - 1 - r) for r < lo.
    lo * (2 * VERTICES - lo - 1) / 2 + (hi - lo - 1)
}

/// Who a terminal triangle favors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WinRule {
    /// The owner of the triangle's color wins.
    #[default]
    CompleterWins,
    /// The owner of the triangle's color loses (classic Sim).
    CompleterLoses,
}

impl WinRule {
    /// Color that wins when a triangle of `triangle` color appears.
    pub fn winner(self, triangle: Color) -> Color {
        match self {
            WinRule::CompleterWins => triangle,
            WinRule::CompleterLoses => triangle.other(),
        }
    }

    /// The color whose player seeks the +1 (dashed triangle) outcome.
    pub fn maximizer(self) -> Color {
        self.winner(Color::Dashed)
    }
}
