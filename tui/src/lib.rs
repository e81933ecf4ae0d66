//! Terminal front end for saaty using ratatui and crossterm.

mod keys;
mod navigator;
mod report;
mod theme;

pub use keys::{CrosstermKeys, KeyAction, KeySource, ScriptedKeys, classify};
pub use navigator::{TerminalNavigator, draw_menu};
pub use report::{Report, render_json, render_report, render_text};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};
