//! Sim console game
//!
//! Two players take turns coloring the 15 edges of six points; the first
//! single-colored triangle ends the game.

use std::io;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use clap::Parser;
use log::LevelFilter;

use alphabeta_engine::AlphaBetaEngine;
use sim_cli::{GameConfig, GameController, GameEnd, Side};
use sim_core::{Color, WinRule};

#[derive(Parser)]
#[command(name = "sim")]
#[command(version, about = "Play Sim on six points against an alpha-beta engine", long_about = None)]
struct Cli {
    /// TOML config file; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Who moves first: computer or human (asked at startup if unset)
    #[arg(long, value_parser = parse_side)]
    first: Option<Side>,

    /// The computer's color: solid or dashed
    #[arg(long, value_parser = parse_color)]
    computer_color: Option<Color>,

    /// completer-wins or completer-loses
    #[arg(long, value_parser = parse_rule)]
    rule: Option<WinRule>,

    /// Start from a partial board in 15-digit notation
    #[arg(long)]
    position: Option<String>,

    /// Seed for the computer's opening move
    #[arg(long)]
    seed: Option<u64>,

    /// Disable the transposition table
    #[arg(long)]
    no_table: bool,

    /// Search the opening move instead of picking one at random
    #[arg(long)]
    no_random_opening: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn apply(&self, config: &mut GameConfig) {
        if let Some(first) = self.first {
            config.first = Some(first);
        }
        if let Some(color) = self.computer_color {
            config.computer_color = color;
        }
        if let Some(rule) = self.rule {
            config.rule = rule;
        }
        if let Some(position) = &self.position {
            config.start_position = Some(position.clone());
        }
        if let Some(seed) = self.seed {
            config.engine.opening_seed = Some(seed);
        }
        if self.no_table {
            config.engine.transposition_table = false;
        }
        if self.no_random_opening {
            config.engine.random_opening = false;
        }
    }

    fn log_level(&self, config: &GameConfig) -> Result<LevelFilter> {
        Ok(match self.verbose {
            0 => match &config.log_level {
                Some(level) => LevelFilter::from_str(level)
                    .map_err(|_| anyhow!("invalid log_level '{level}'"))?,
                None => LevelFilter::Warn,
            },
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
    }
}

fn parse_side(s: &str) -> Result<Side, String> {
    match s.to_ascii_lowercase().as_str() {
        "computer" | "ai" | "1" => Ok(Side::Computer),
        "human" | "you" | "2" => Ok(Side::Human),
        _ => Err(format!("unknown side '{s}' (expected computer or human)")),
    }
}

fn parse_color(s: &str) -> Result<Color, String> {
    match s.to_ascii_lowercase().as_str() {
        "solid" => Ok(Color::Solid),
        "dashed" => Ok(Color::Dashed),
        _ => Err(format!("unknown color '{s}' (expected solid or dashed)")),
    }
}

fn parse_rule(s: &str) -> Result<WinRule, String> {
    match s.to_ascii_lowercase().replace('_', "-").as_str() {
        "completer-wins" => Ok(WinRule::CompleterWins),
        "completer-loses" => Ok(WinRule::CompleterLoses),
        _ => Err(format!(
            "unknown rule '{s}' (expected completer-wins or completer-loses)"
        )),
    }
}

/// Terminal logging on stderr so it never interleaves with the board on stdout.
fn init_logging(level: LevelFilter) -> Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .map_err(|e| anyhow!("failed to initialize logger: {e}"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    cli.apply(&mut config);
    init_logging(cli.log_level(&config)?)?;

    let start = config.start_state()?;
    let engine = AlphaBetaEngine::new(config.rule, config.engine.clone());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut controller = GameController::new(engine, &config, stdin.lock(), stdout.lock());

    let first = match config.first {
        Some(side) => side,
        None => match controller.ask_first()? {
            Some(side) => side,
            None => return Ok(()),
        },
    };

    match controller.play(start, first)? {
        GameEnd::Finished(outcome) => {
            log::info!("{:?} won in {} plies", outcome.winner, outcome.plies)
        }
        GameEnd::InputClosed => log::info!("session ended without a result"),
    }
    Ok(())
}
