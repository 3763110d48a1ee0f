// src/core/mod.rs

pub mod cell;
pub mod format;
pub mod net;

pub use cell::{try_parse_number, to_display_text};
