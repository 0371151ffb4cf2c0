//! Gantt chart CLI library.
//!
//! This crate wires the spreadsheet importer, the timeline model and the PNG
//! canvas into the `gantt` command.

mod cli;
mod config;
pub mod render;
pub mod report;

pub use cli::Cli;
pub use config::Config;
