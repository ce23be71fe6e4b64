//! Game configuration, read from an optional TOML file.
//!
//! ```toml
//! first = "human"
//! computer_color = "dashed"
//! rule = "completer_wins"
//! start_position = "100000000000000"
//! log_level = "info"
//!
//! [engine]
//! transposition_table = true
//! random_opening = true
//! opening_seed = 7
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use alphabeta_engine::EngineConfig;
use sim_core::{Color, GraphState, WinRule};

/// Who makes the first move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Computer,
    Human,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Computer => Side::Human,
            Side::Human => Side::Computer,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side to move first (None = ask at startup)
    pub first: Option<Side>,
    /// The computer's line color; the human plays the other one
    pub computer_color: Color,
    /// Whether closing a triangle wins or loses
    pub rule: WinRule,
    /// Board to start from, in 15-digit notation (None = empty board)
    pub start_position: Option<String>,
    /// Log level used when no -v flag is given
    pub log_level: Option<String>,
    pub engine: EngineConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first: None,
            computer_color: Color::Dashed,
            rule: WinRule::default(),
            start_position: None,
            log_level: None,
            engine: EngineConfig::default(),
        }
    }
}

impl GameConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("failed to parse config {}", path.display()))
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn human_color(&self) -> Color {
        self.computer_color.other()
    }

    /// The configured starting board.
    pub fn start_state(&self) -> Result<GraphState> {
        match &self.start_position {
            Some(board) => GraphState::from_notation(board).context("invalid start_position"),
            None => Ok(GraphState::empty()),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
