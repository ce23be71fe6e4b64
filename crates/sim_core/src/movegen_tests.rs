use super::*;
use std::collections::HashSet;

#[test]
fn test_empty_board_moves() {
    let moves = legal_moves(&GraphState::empty());
    assert_eq!(moves.len(), 15);
    assert_eq!(moves[0], Edge::new(0, 1).unwrap());
    assert_eq!(moves[14], Edge::new(4, 5).unwrap());
    assert!(moves.windows(2).all(|w| w[0] < w[1]), "moves out of order");
}

#[test]
fn test_successors_cover_free_edges_once() {
    let parent = GraphState::from_notation("120000102000010").unwrap();
    let free: Vec<Edge> = parent.free_edges().collect();
    let successors = generate_successors(&parent, Color::Dashed);

    assert_eq!(successors.len(), free.len());
    assert_eq!(successors.len(), 15 - parent.colored_count());

    let mut covered = HashSet::new();
    for (child, expected) in successors.iter().zip(&free) {
        assert_eq!(child.colored_count(), parent.colored_count() + 1);
        let edge = child.first_difference(&parent).unwrap();
        assert_eq!(edge, *expected);
        assert_eq!(child.edge_color(edge.a, edge.b), EdgeColor::Dashed);
        assert_eq!(child.edge_color(edge.b, edge.a), EdgeColor::Dashed);
        // Exactly one differing edge.
        let diffs = EDGES
            .iter()
            .filter(|e| child.edge_color(e.a, e.b) != parent.edge_color(e.a, e.b))
            .count();
        assert_eq!(diffs, 1);
        assert!(covered.insert(edge));
    }
}

#[test]
fn test_full_board_has_no_successors() {
    let full = GraphState::from_notation("111112222211111").unwrap();
    assert!(generate_successors(&full, Color::Solid).is_empty());
    assert!(legal_moves(&full).is_empty());
}

#[test]
fn test_legal_moves_skip_colored_edges() {
    let s = GraphState::empty().apply_move(0, 1, Color::Solid).unwrap();
    let moves = legal_moves(&s);
    assert_eq!(moves.len(), 14);
    assert!(!moves.contains(&Edge::new(0, 1).unwrap()));
    assert_eq!(moves[0], Edge::new(0, 2).unwrap());
}
