//! phrasewrap CLI library
//!
//! This library provides the command-line interface for inserting phrase
//! separators into East-Asian text.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;
pub mod separator;

pub use error::{CliError, CliResult};
