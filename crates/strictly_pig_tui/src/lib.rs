//! Terminal front ends for Strictly Pig.
//!
//! Two ways to play the same [`strictly_pig::Presentation`]: a full-screen
//! ratatui table ([`run_tui`]) and a line-oriented mode for pipes and
//! scripts ([`run_plain`]).

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod names;
mod plain;
mod tui;

pub use cli::{Cli, Command, GameArgs};
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILE, PigConfig};
pub use names::{NamePrompt, NameSource, resolve_names};
pub use plain::{JsonSink, LineSink, PlainCommand, TextSink, parse_command, run_plain};
pub use tui::{
    KeyAction, PanelView, TableView, close_marker_area, dice_art, draw, map_key, map_mouse,
    overlay_area, run_tui,
};
