//! Console front end for Sim on six points.
//!
//! The binary wires these pieces together:
//! - `config`: TOML game configuration
//! - `controller`: the human/computer turn loop over any `BufRead`/`Write`
//! - `render`: text rendering of the coloring matrix

pub mod config;
pub mod controller;
pub mod render;

pub use config::{GameConfig, Side};
pub use controller::{GameController, GameEnd, GameOutcome};
