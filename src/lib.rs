// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod csv;
pub mod data;

pub mod controller;
pub mod file;
pub mod gui;
pub mod progress;
pub mod query;
pub mod render;
pub mod store;

#[cfg(feature = "cli")]
pub mod cli;
