//! Configurable bracket matching library.
//!
//! This library checks that delimiter characters in text are correctly
//! nested and matched, against a user-configured set of bracket pairs.

mod check;
mod config;

pub use check::{Diagnostic, check};
pub use config::{BracketRegistry, ConfigError, ConfigFile, PairSide, PairSpec};
