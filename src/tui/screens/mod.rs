//! TUI screen implementations.

pub mod line_entry;

pub use line_entry::{LineEntryState, draw_line_entry};
