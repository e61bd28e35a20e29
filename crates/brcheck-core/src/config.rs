//! Bracket pair configuration and the validated registry built from it.

use std::collections::{HashMap, HashSet};

use serde::Deserialize;
use thiserror::Error;

/// A raw bracket pair as it appears in the configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PairSpec {
    /// The opening bracket (must be exactly one character).
    pub left: String,
    /// The closing bracket (must be exactly one character).
    pub right: String,
}

/// The shape of the configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConfigFile {
    /// The list of bracket pairs to enforce.
    pub bracket: Vec<PairSpec>,
}

/// Which side of a bracket pair a configuration error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairSide {
    /// The opening bracket.
    Left,
    /// The closing bracket.
    Right,
}

impl std::fmt::Display for PairSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

/// Configuration validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A pair side is not exactly one character.
    #[error("{side} bracket must be a single character, got {value:?}")]
    InvalidPairLength {
        /// Which side of the pair is malformed.
        side: PairSide,
        /// The offending string from the configuration.
        value: String,
    },
    /// The same opening bracket is configured more than once.
    #[error("duplicate opening bracket {opener:?} in configuration")]
    DuplicateOpener {
        /// The repeated opening bracket.
        opener: char,
    },
}

/// An immutable opener-to-closer mapping built from validated pair specs.
///
/// Construction is the only fallible step; afterwards the registry is
/// read-only and may be shared across concurrently running scans.
#[derive(Debug, Clone)]
pub struct BracketRegistry {
    pairs: HashMap<char, char>,
    closers: HashSet<char>,
}

impl BracketRegistry {
    /// Build a registry from an ordered sequence of pair specs.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPairLength`] when either side of a
    /// pair is not exactly one character, and [`ConfigError::DuplicateOpener`]
    /// when two specs share the same opening bracket.
    pub fn from_specs(specs: &[PairSpec]) -> Result<Self, ConfigError> {
        let mut pairs = HashMap::with_capacity(specs.len());
        let mut closers = HashSet::with_capacity(specs.len());

        for spec in specs {
            let opener = single_char(&spec.left, PairSide::Left)?;
            let closer = single_char(&spec.right, PairSide::Right)?;

            if pairs.insert(opener, closer).is_some() {
                return Err(ConfigError::DuplicateOpener { opener });
            }
            closers.insert(closer);
        }

        Ok(Self { pairs, closers })
    }

    /// Whether `c` is a configured opening bracket.
    #[must_use]
    pub fn is_opener(&self, c: char) -> bool {
        self.pairs.contains_key(&c)
    }

    /// Whether `c` is a configured closing bracket.
    #[must_use]
    pub fn is_closer(&self, c: char) -> bool {
        self.closers.contains(&c)
    }

    /// The closing bracket expected for `opener`, if `opener` is configured.
    #[must_use]
    pub fn closer_for(&self, opener: char) -> Option<char> {
        self.pairs.get(&opener).copied()
    }
}

fn single_char(value: &str, side: PairSide) -> Result<char, ConfigError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ConfigError::InvalidPairLength {
            side,
            value: value.to_string(),
        }),
    }
}
