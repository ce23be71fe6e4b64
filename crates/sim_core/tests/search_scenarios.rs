//! Full-game search scenarios through the public API.

use sim_core::{
    Color, DASHED_TRIANGLE, Edge, GraphState, SOLID_TRIANGLE, Searcher, WinRule, evaluate,
    legal_moves,
};

#[test]
fn test_reply_to_opening_move() {
    // Human colors 0-1 solid; computer answers with dashed.
    let pos = GraphState::empty().apply_move(0, 1, Color::Solid).unwrap();
    let mut searcher = Searcher::with_table(WinRule::CompleterWins.maximizer());
    let choice = searcher.select_move(&pos, Color::Dashed).unwrap();

    assert!([SOLID_TRIANGLE, 0, DASHED_TRIANGLE].contains(&choice.score));
    assert!(legal_moves(&pos).contains(&choice.edge));
    assert!(pos.is_edge_free(choice.edge.a, choice.edge.b));
    assert_eq!(choice.state.colored_count(), 2);

    // Same answer the second time round, with or without a warm table.
    let again = searcher.select_move(&pos, Color::Dashed).unwrap();
    assert_eq!(choice, again);
    let fresh = Searcher::with_table(Color::Dashed)
        .select_move(&pos, Color::Dashed)
        .unwrap();
    assert_eq!(choice, fresh);
}

#[test]
fn test_closing_move_wins() {
    let pos = GraphState::from_notation("211122111221000").unwrap();
    let mut searcher = Searcher::new(WinRule::CompleterWins.maximizer());
    let choice = searcher.select_move(&pos, Color::Dashed).unwrap();

    assert_eq!(choice.score, DASHED_TRIANGLE);
    assert_eq!(choice.edge, Edge::new(3, 4).unwrap());
    let triangle = evaluate(&choice.state).unwrap();
    assert_eq!(triangle.color, Color::Dashed);
    assert_eq!(triangle.vertices, [2, 3, 4]);
}

#[test]
fn test_self_play_reaches_triangle() {
    // Both sides searching must end the game within 15 plies, never on a
    // full board without a triangle.
    let mut pos = GraphState::from_notation("120000210000000").unwrap();
    let mut to_move = Color::Solid;
    let mut searcher = Searcher::with_table(Color::Dashed);
    let mut plies = 0;
    while evaluate(&pos).is_none() {
        let choice = searcher.select_move(&pos, to_move).unwrap();
        pos = choice.state;
        to_move = to_move.other();
        plies += 1;
        assert!(plies <= 15);
    }
    assert!(pos.colored_count() <= 15);
}

#[test]
fn test_win_rules_pick_opposite_maximizers() {
    assert_eq!(WinRule::CompleterWins.maximizer(), Color::Dashed);
    assert_eq!(WinRule::CompleterLoses.maximizer(), Color::Solid);
    assert_eq!(WinRule::CompleterWins.winner(Color::Solid), Color::Solid);
    assert_eq!(WinRule::CompleterLoses.winner(Color::Solid), Color::Dashed);
}
