//! Spanmark CLI library
//!
//! This library provides the command-line interface for the spanmark
//! text annotation and cloze generation pipeline.

pub mod commands;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};
