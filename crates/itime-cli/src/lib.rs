//! Interaction time CLI library.
//!
//! This crate provides the `itime` command-line interface over `itime-core`.

mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, Commands};
pub use config::{Config, OutputFormat};
