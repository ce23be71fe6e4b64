//! Perft and solve benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p sim_core -- [depth] [board]
//!
//! Examples:
//!   # Default: depth 6 from every test position
//!   cargo flamegraph --example perft_bench -p sim_core
//!
//!   # Custom depth and position (15-digit board notation)
//!   cargo flamegraph --example perft_bench -p sim_core -- 7 "120000210000000"

use sim_core::{Color, GraphState, Searcher, perft};
use std::env;
use std::time::Instant;

/// Test positions, solid to move
const TEST_POSITIONS: &[(&str, &str)] = &[
    ("Empty board", "000000000000000"),
    ("One solid edge", "100000000000000"),
    ("Opening skirmish", "120000210000000"),
    ("Closing board", "211122111221000"),
];

fn main() {
    let args: Vec<String> = env::args().collect();

    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(6);

    if let Some(board) = args.get(2) {
        match GraphState::from_notation(board) {
            Ok(pos) => run_single_position(&pos, depth),
            Err(e) => eprintln!("{e}"),
        }
    } else {
        run_all_positions(depth);
    }
}

fn run_single_position(pos: &GraphState, depth: u8) {
    println!("Position: {}", pos.to_notation());
    println!("Depth: {depth}");
    println!();

    let start = Instant::now();
    let nodes = perft(pos, Color::Solid, depth);
    let elapsed = start.elapsed();
    println!("Perft nodes: {nodes} in {elapsed:.3?}");

    let mut searcher = Searcher::with_table(Color::Dashed);
    let start = Instant::now();
    match searcher.select_move(pos, Color::Solid) {
        Ok(choice) => println!(
            "Solve: {} scores {} ({} nodes, {} table entries) in {:.3?}",
            choice.edge,
            choice.score,
            searcher.nodes(),
            searcher.table_len(),
            start.elapsed()
        ),
        Err(e) => println!("Solve: {e}"),
    }
}

fn run_all_positions(depth: u8) {
    println!("=== Perft Benchmark Suite ===");
    println!("Depth: {depth}");
    println!();

    let mut total_nodes = 0u64;
    let mut total_time = std::time::Duration::ZERO;

    for (name, board) in TEST_POSITIONS {
        let Ok(pos) = GraphState::from_notation(board) else {
            continue;
        };

        print!("{name:.<30}");

        let start = Instant::now();
        let nodes = perft(&pos, Color::Solid, depth);
        let elapsed = start.elapsed();

        total_nodes += nodes;
        total_time += elapsed;

        let nps = if elapsed.as_secs_f64() > 0.0 {
            nodes as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        println!(" {nodes:>12} nodes in {elapsed:>8.3?} ({nps:>10.0} nps)");
    }

    println!();
    println!("{:=<70}", "");
    let total_nps = if total_time.as_secs_f64() > 0.0 {
        total_nodes as f64 / total_time.as_secs_f64()
    } else {
        0.0
    };
    println!("TOTAL: {total_nodes} nodes in {total_time:.3?} ({total_nps:.0} nps)");
}
