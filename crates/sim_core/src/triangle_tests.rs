use super::*;
use std::collections::HashSet;

fn board(moves: &[(u8, u8, Color)]) -> GraphState {
    moves.iter().fold(GraphState::empty(), |s, &(a, b, c)| {
        s.apply_move(a, b, c).unwrap()
    })
}

#[test]
fn test_empty_board_has_no_triangle() {
    assert_eq!(evaluate(&GraphState::empty()), None);
    assert_eq!(check_terminal(&GraphState::empty()), Ok(None));
}

#[test]
fn test_solid_triangle_found() {
    let s = board(&[
        (0, 1, Color::Solid),
        (1, 2, Color::Solid),
        (0, 2, Color::Solid),
        (3, 4, Color::Dashed),
    ]);
    let t = evaluate(&s).unwrap();
    assert_eq!(t.color, Color::Solid);
    assert_eq!(t.vertices, [0, 1, 2]);
    assert_eq!(t.score(), SOLID_TRIANGLE);
}

#[test]
fn test_mixed_triangle_is_not_terminal() {
    let s = board(&[
        (0, 1, Color::Solid),
        (1, 2, Color::Dashed),
        (0, 2, Color::Solid),
    ]);
    assert_eq!(evaluate(&s), None);
}

#[test]
fn test_two_sides_colored_is_not_terminal() {
    let s = board(&[(2, 4, Color::Dashed), (4, 5, Color::Dashed)]);
    assert_eq!(evaluate(&s), None);
}

#[test]
fn test_first_triangle_in_canonical_order() {
    // Coloring 3-4 last closes both 1-3-4 and 2-3-4 at once.
    let s = board(&[
        (2, 3, Color::Dashed),
        (2, 4, Color::Dashed),
        (1, 3, Color::Dashed),
        (1, 4, Color::Dashed),
        (3, 4, Color::Dashed),
    ]);
    let t = evaluate(&s).unwrap();
    assert_eq!(t.vertices, [1, 3, 4]);
    assert_eq!(t.color, Color::Dashed);
    assert_eq!(t.score(), DASHED_TRIANGLE);
}

#[test]
fn test_triple_enumeration_is_complete() {
    assert_eq!(TRIANGLES.len(), 20);
    let unique: HashSet<[u8; 3]> = TRIANGLES.iter().copied().collect();
    assert_eq!(unique.len(), 20, "duplicate triple");
    for t in TRIANGLES {
        assert!(t[0] < t[1] && t[1] < t[2], "{t:?} not ascending");
        assert!(t[2] < 6);
    }
    assert!(TRIANGLES.windows(2).all(|w| w[0] < w[1]), "not canonical order");

    // Every triple is detected when it is the only colored one.
    for [i, j, k] in TRIANGLES {
        let s = board(&[(i, j, Color::Solid), (j, k, Color::Solid), (i, k, Color::Solid)]);
        assert_eq!(evaluate(&s).map(|t| t.vertices), Some([i, j, k]));
    }
}
