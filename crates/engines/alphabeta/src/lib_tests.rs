use super::*;
use sim_core::{evaluate, Edge, EdgeColor, DASHED_TRIANGLE};

fn seeded(seed: u64) -> EngineConfig {
    EngineConfig {
        opening_seed: Some(seed),
        ..EngineConfig::default()
    }
}

#[test]
fn opening_shortcut_plays_legal_move() {
    let mut engine = AlphaBetaEngine::new(WinRule::CompleterWins, seeded(7));
    let empty = GraphState::empty();

    let result = engine.choose_move(&empty, Color::Solid).unwrap();

    assert!(result.from_book);
    assert_eq!(result.nodes, 0);
    assert!(legal_moves(&empty).contains(&result.edge));
    assert_eq!(result.state.colored_count(), 1);
    assert_eq!(
        result.state.edge_color(result.edge.a, result.edge.b),
        EdgeColor::Solid
    );
}

#[test]
fn opening_shortcut_is_reproducible_with_seed() {
    let empty = GraphState::empty();
    let first = AlphaBetaEngine::new(WinRule::CompleterWins, seeded(42))
        .choose_move(&empty, Color::Dashed)
        .unwrap();
    let second = AlphaBetaEngine::new(WinRule::CompleterWins, seeded(42))
        .choose_move(&empty, Color::Dashed)
        .unwrap();
    assert_eq!(first, second);
}

#[test]
fn searches_when_not_empty() {
    let mut engine = AlphaBetaEngine::new(WinRule::CompleterWins, EngineConfig::default());
    let pos = GraphState::from_notation("211122111221000").unwrap();

    let result = engine.choose_move(&pos, Color::Dashed).unwrap();

    assert!(!result.from_book);
    assert!(result.nodes > 0);
    assert_eq!(result.edge, Edge::new(3, 4).unwrap());
    assert_eq!(result.score, DASHED_TRIANGLE);
    assert!(evaluate(&result.state).is_some());
}

#[test]
fn table_toggle_gives_same_move() {
    let pos = GraphState::from_notation("120000210000000").unwrap();
    let mut with_table = AlphaBetaEngine::new(WinRule::CompleterLoses, EngineConfig::default());
    let mut without = AlphaBetaEngine::new(
        WinRule::CompleterLoses,
        EngineConfig {
            transposition_table: false,
            ..EngineConfig::default()
        },
    );

    let a = with_table.choose_move(&pos, Color::Solid).unwrap();
    let b = without.choose_move(&pos, Color::Solid).unwrap();
    assert_eq!((a.edge, a.score), (b.edge, b.score));
    assert!(with_table.table_len() > 0);
    assert_eq!(without.table_len(), 0);
}

#[test]
fn new_game_clears_table() {
    // Deep enough that interior nodes get stored.
    let mut engine = AlphaBetaEngine::new(WinRule::CompleterLoses, EngineConfig::default());
    let pos = GraphState::from_notation("120000210000000").unwrap();
    engine.choose_move(&pos, Color::Solid).unwrap();
    assert!(engine.table_len() > 0);

    engine.new_game();
    assert_eq!(engine.table_len(), 0);
}

#[test]
fn finished_game_is_an_error() {
    let mut engine = AlphaBetaEngine::new(WinRule::CompleterWins, EngineConfig::default());
    let done = GraphState::from_notation("110001000000000").unwrap();
    assert_eq!(
        engine.choose_move(&done, Color::Dashed),
        Err(SimError::GameOver)
    );
}

#[test]
fn config_is_kept() {
    let config = EngineConfig {
        random_opening: false,
        ..EngineConfig::default()
    };
    let engine = AlphaBetaEngine::new(WinRule::CompleterWins, config);
    assert!(!engine.config().random_opening);
    assert_eq!(engine.name(), "AlphaBeta v1.0");
}
