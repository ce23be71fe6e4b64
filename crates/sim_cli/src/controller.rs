//! Turn loop between a human on a text stream and an engine.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use log::info;

use sim_core::{check_terminal, parse_edge, Color, Engine, GraphState, Triangle, WinRule};

use crate::config::{GameConfig, Side};
use crate::render::{describe_triangle, render};

/// A finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    pub winner: Side,
    pub triangle: Triangle,
    pub final_state: GraphState,
    /// Moves played in this session, not counting the start position
    pub plies: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEnd {
    Finished(GameOutcome),
    /// The human's input stream ended before the game did
    InputClosed,
}

/// Drives one game: prompts the human, asks the engine, detects the end.
pub struct GameController<E, R, W> {
    engine: E,
    input: R,
    output: W,
    computer_color: Color,
    rule: WinRule,
}

impl<E: Engine, R: BufRead, W: Write> GameController<E, R, W> {
    pub fn new(engine: E, config: &GameConfig, input: R, output: W) -> Self {
        Self {
            engine,
            input,
            output,
            computer_color: config.computer_color,
            rule: config.rule,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn color_of(&self, side: Side) -> Color {
        match side {
            Side::Computer => self.computer_color,
            Side::Human => self.computer_color.other(),
        }
    }

    fn side_of(&self, color: Color) -> Side {
        if color == self.computer_color {
            Side::Computer
        } else {
            Side::Human
        }
    }

    /// Reads one line; `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let n = self
            .input
            .read_line(&mut line)
            .context("failed to read input")?;
        Ok((n > 0).then_some(line))
    }

    /// Asks who should move first until the answer is 1 or 2.
    pub fn ask_first(&mut self) -> Result<Option<Side>> {
        loop {
            write!(
                self.output,
                "Who should start the game? (1 for the computer, 2 for you): "
            )?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.trim() {
                "1" => return Ok(Some(Side::Computer)),
                "2" => return Ok(Some(Side::Human)),
                _ => writeln!(self.output, "Please enter 1 or 2.")?,
            }
        }
    }

    /// Plays from `start` with `first` to move until a triangle appears or the
    /// input runs out.
    pub fn play(&mut self, start: GraphState, first: Side) -> Result<GameEnd> {
        self.engine.new_game();
        info!(
            "new game: {} vs you, computer plays {}, {:?}",
            self.engine.name(),
            self.computer_color,
            self.rule
        );
        writeln!(
            self.output,
            "Starting game. You play {}, the computer plays {}.\n",
            self.color_of(Side::Human),
            self.computer_color
        )?;

        let mut state = start;
        let mut turn = first;
        let mut plies = 0;
        writeln!(self.output, "{}", render(&state))?;

        loop {
            if let Some(triangle) = check_terminal(&state)? {
                return self.finish(state, triangle, plies).map(GameEnd::Finished);
            }

            state = match turn {
                Side::Human => match self.human_move(&state)? {
                    Some(next) => next,
                    None => {
                        info!("input closed after {plies} plies");
                        writeln!(self.output, "\nInput closed, leaving the game.")?;
                        return Ok(GameEnd::InputClosed);
                    }
                },
                Side::Computer => self.computer_move(&state)?,
            };
            plies += 1;
            turn = turn.other();
            writeln!(self.output, "{}", render(&state))?;
        }
    }

    fn computer_move(&mut self, state: &GraphState) -> Result<GraphState> {
        writeln!(self.output, "Computer's turn. Thinking...")?;
        self.output.flush()?;
        let result = self
            .engine
            .choose_move(state, self.computer_color)
            .context("engine failed to choose a move")?;
        writeln!(
            self.output,
            "Computer colors {} {}.",
            result.edge, self.computer_color
        )?;
        Ok(result.state)
    }

    /// Prompts until a legal edge is entered; `None` at end of input.
    fn human_move(&mut self, state: &GraphState) -> Result<Option<GraphState>> {
        let color = self.color_of(Side::Human);
        writeln!(self.output, "Your turn ({color}).")?;
        loop {
            write!(
                self.output,
                "Enter the two points to connect (example: 0 1): "
            )?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };

            let attempt =
                parse_edge(&line).and_then(|edge| state.apply_move(edge.a, edge.b, color));
            match attempt {
                Ok(next) => return Ok(Some(next)),
                Err(e) => writeln!(self.output, "Sorry, that move is not valid ({e}). Try again.")?,
            }
        }
    }

    fn finish(&mut self, state: GraphState, triangle: Triangle, plies: usize) -> Result<GameOutcome> {
        let winner = self.side_of(self.rule.winner(triangle.color));
        info!("game over after {plies} plies: {winner:?} wins with {:?}", triangle.vertices);

        match winner {
            Side::Human => writeln!(self.output, "Congratulations, you WIN!")?,
            Side::Computer => writeln!(self.output, "Computer WINS.")?,
        }
        writeln!(self.output, "{}", describe_triangle(&triangle))?;
        writeln!(self.output, "Game Over")?;
        self.output.flush()?;

        Ok(GameOutcome {
            winner,
            triangle,
            final_state: state,
            plies,
        })
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
