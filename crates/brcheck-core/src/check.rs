//! Single-pass bracket matching over a character sequence.

use thiserror::Error;

use crate::BracketRegistry;

/// Why a scan failed. Positions are 0-based character offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Diagnostic {
    /// A closing bracket appeared with no bracket open.
    #[error("unexpected closing bracket {found:?} at position {position}")]
    UnexpectedCloser {
        /// The closing bracket that was found.
        found: char,
        /// Where it was found.
        position: usize,
    },
    /// A closing bracket did not match the innermost open bracket.
    #[error(
        "expected closing bracket {expected:?} for opening {opener:?} at position \
         {opener_position}, found {found:?} at position {found_position}"
    )]
    MismatchedCloser {
        /// The closer the innermost open bracket requires.
        expected: char,
        /// The innermost open bracket.
        opener: char,
        /// Where the open bracket was found.
        opener_position: usize,
        /// The closing bracket that was found instead.
        found: char,
        /// Where it was found.
        found_position: usize,
    },
    /// A bracket was still open at the end of input.
    #[error("unclosed bracket {opener:?} at position {position}")]
    UnclosedOpener {
        /// The bracket left open.
        opener: char,
        /// Where it was opened.
        position: usize,
    },
}

/// An opening bracket awaiting its closer.
#[derive(Debug, Clone, Copy)]
struct PendingOpener {
    bracket: char,
    position: usize,
}

/// Scan `content` left to right and verify that every configured bracket
/// is correctly nested and matched.
///
/// Non-bracket characters are ignored. A character configured as both an
/// opener and a closer is treated as an opener. The first violation wins;
/// when several brackets are left open at the end of input, the most
/// recently opened one is reported.
///
/// # Errors
///
/// Returns the [`Diagnostic`] describing the first violation found.
pub fn check(content: &str, registry: &BracketRegistry) -> Result<(), Diagnostic> {
    let mut stack: Vec<PendingOpener> = Vec::new();

    for (position, c) in content.chars().enumerate() {
        if registry.is_opener(c) {
            stack.push(PendingOpener {
                bracket: c,
                position,
            });
        } else if registry.is_closer(c) {
            let Some(top) = stack.pop() else {
                return Err(Diagnostic::UnexpectedCloser { found: c, position });
            };

            // Entries are only pushed for configured openers, so the
            // lookup always yields the expected closer.
            if let Some(expected) = registry.closer_for(top.bracket)
                && expected != c
            {
                return Err(Diagnostic::MismatchedCloser {
                    expected,
                    opener: top.bracket,
                    opener_position: top.position,
                    found: c,
                    found_position: position,
                });
            }
        }
    }

    if let Some(top) = stack.pop() {
        return Err(Diagnostic::UnclosedOpener {
            opener: top.bracket,
            position: top.position,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PairSpec;

    fn registry(pairs: &[(&str, &str)]) -> BracketRegistry {
        let specs: Vec<PairSpec> = pairs
            .iter()
            .map(|(left, right)| PairSpec {
                left: (*left).to_string(),
                right: (*right).to_string(),
            })
            .collect();
        BracketRegistry::from_specs(&specs).unwrap()
    }

    #[test]
    fn test_empty_content_passes() {
        let registry = registry(&[("(", ")")]);
        assert_eq!(check("", &registry), Ok(()));
    }

    #[test]
    fn test_balanced_nesting_passes() {
        let registry = registry(&[("(", ")"), ("[", "]"), ("{", "}")]);
        assert_eq!(check("({[]})[]{}", &registry), Ok(()));
    }

    #[test]
    fn test_single_unmatched_opener() {
        let registry = registry(&[("(", ")")]);
        assert_eq!(
            check("(", &registry),
            Err(Diagnostic::UnclosedOpener {
                opener: '(',
                position: 0,
            })
        );
    }

    #[test]
    fn test_single_unexpected_closer() {
        let registry = registry(&[("(", ")")]);
        assert_eq!(
            check(")", &registry),
            Err(Diagnostic::UnexpectedCloser {
                found: ')',
                position: 0,
            })
        );
    }

    #[test]
    fn test_mismatch_across_pair_types() {
        let registry = registry(&[("(", ")"), ("[", "]")]);
        assert_eq!(
            check("(]", &registry),
            Err(Diagnostic::MismatchedCloser {
                expected: ')',
                opener: '(',
                opener_position: 0,
                found: ']',
                found_position: 1,
            })
        );
    }

    #[test]
    fn test_innermost_unclosed_reported_first() {
        let registry = registry(&[("(", ")"), ("[", "]")]);
        assert_eq!(
            check("([", &registry),
            Err(Diagnostic::UnclosedOpener {
                opener: '[',
                position: 1,
            })
        );
    }

    #[test]
    fn test_non_bracket_characters_ignored() {
        let registry = registry(&[("(", ")")]);
        assert_eq!(check("a(b)c", &registry), Ok(()));
    }

    #[test]
    fn test_closer_after_matched_pair_is_unexpected() {
        let registry = registry(&[("(", ")")]);
        assert_eq!(
            check("())", &registry),
            Err(Diagnostic::UnexpectedCloser {
                found: ')',
                position: 2,
            })
        );
    }

    #[test]
    fn test_positions_count_chars_not_bytes() {
        let registry = registry(&[("(", ")")]);
        // 'é' is two bytes but one char; '(' sits at char offset 5.
        assert_eq!(
            check("héllo(", &registry),
            Err(Diagnostic::UnclosedOpener {
                opener: '(',
                position: 5,
            })
        );
    }

    #[test]
    fn test_overlapping_opener_closer_treated_as_opener() {
        // '|' opens per one pair and closes per another; the opener branch
        // takes priority, so a lone '|' is reported as unclosed.
        let registry = registry(&[("|", ">"), ("<", "|")]);
        assert_eq!(
            check("|", &registry),
            Err(Diagnostic::UnclosedOpener {
                opener: '|',
                position: 0,
            })
        );
    }

    #[test]
    fn test_shared_closer_matches_either_opener() {
        let registry = registry(&[("(", ">"), ("[", ">")]);
        assert_eq!(check("(>[>", &registry), Ok(()));
    }

    #[test]
    fn test_first_violation_wins() {
        let registry = registry(&[("(", ")"), ("[", "]")]);
        // Both a mismatch and an unclosed opener are present; the mismatch
        // comes first in scan order.
        assert_eq!(
            check("(][", &registry),
            Err(Diagnostic::MismatchedCloser {
                expected: ')',
                opener: '(',
                opener_position: 0,
                found: ']',
                found_position: 1,
            })
        );
    }

    #[test]
    fn test_diagnostic_display_messages() {
        let registry = registry(&[("(", ")"), ("[", "]")]);

        let err = check(")", &registry).unwrap_err();
        assert_eq!(
            err.to_string(),
            "unexpected closing bracket ')' at position 0"
        );

        let err = check("(]", &registry).unwrap_err();
        assert_eq!(
            err.to_string(),
            "expected closing bracket ')' for opening '(' at position 0, \
             found ']' at position 1"
        );

        let err = check("[", &registry).unwrap_err();
        assert_eq!(err.to_string(), "unclosed bracket '[' at position 0");
    }
}
