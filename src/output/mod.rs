//! Output formatting for resolved topologies.
//!
//! This module handles formatting and outputting topology data:
//! - [`csv`] - CSV output and JSON hand-off form
//! - [`terminal`] - terminal formatting helpers

mod csv;
mod terminal;

pub use csv::{topology_print, topology_to_json};
pub use terminal::{format_field, format_tags};
