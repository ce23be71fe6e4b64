//! Ramsey guarantee regression: R(3,3) = 6, so every two-coloring of the
//! 15 edges of K6 holds a monochromatic triangle.

use rayon::prelude::*;

use sim_core::{Color, EDGES, GraphState, check_terminal, evaluate};

/// Coloring number `mask`: bit i set means edge i is dashed.
fn full_coloring(mask: u32) -> GraphState {
    EDGES.iter().enumerate().fold(GraphState::empty(), |s, (i, e)| {
        let color = if mask & (1 << i) != 0 {
            Color::Dashed
        } else {
            Color::Solid
        };
        s.apply_move(e.a, e.b, color).unwrap()
    })
}

#[test]
fn test_every_full_coloring_has_triangle() {
    let missing: Vec<u32> = (0..1u32 << EDGES.len())
        .into_par_iter()
        .filter(|&mask| evaluate(&full_coloring(mask)).is_none())
        .collect();
    assert!(missing.is_empty(), "triangle-free full colorings: {missing:?}");
}

#[test]
fn test_full_colorings_pass_terminal_check() {
    let failures = (0..1u32 << EDGES.len())
        .into_par_iter()
        .filter(|&mask| !matches!(check_terminal(&full_coloring(mask)), Ok(Some(_))))
        .count();
    assert_eq!(failures, 0);
}

#[test]
fn test_five_vertices_can_avoid_triangles() {
    // Pentagon solid, pentagram dashed on vertices 0..5: no triangle, so six
    // vertices are really needed.
    let mut s = GraphState::empty();
    for i in 0..5u8 {
        s = s.apply_move(i, (i + 1) % 5, Color::Solid).unwrap();
        s = s.apply_move(i, (i + 2) % 5, Color::Dashed).unwrap();
    }
    assert_eq!(s.colored_count(), 10);
    assert_eq!(evaluate(&s), None);
}
