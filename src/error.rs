//! Error types produced at the boundary of the library.
//!
//! Inside a grammar there is exactly one way to fail: producing no candidates. The types here exist only for the
//! places where a result leaves the combinator algebra, such as [`Parser::parse`](crate::Parser::parse) applying an
//! acceptance policy to a list of candidates, or [`try_pattern`](crate::regex::try_pattern) compiling a regular
//! expression.

use std::fmt;

/// The reason [`Parser::parse`](crate::Parser::parse) rejected the candidates produced by a parser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The parser produced no candidates at all.
    NoMatch,
    /// The parser produced candidates, but none of them consumed the entire input.
    Incomplete {
        /// The shortest input left over by any candidate.
        remaining: String,
    },
    /// More than one candidate consumed the entire input.
    Ambiguous {
        /// How many candidates consumed the entire input.
        candidates: usize,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoMatch => write!(f, "input did not match"),
            Self::Incomplete { remaining } => {
                let preview: String = remaining.chars().take(16).collect();
                if preview.len() < remaining.len() {
                    write!(f, "unexpected trailing input {:?}...", preview)
                } else {
                    write!(f, "unexpected trailing input {:?}", preview)
                }
            }
            Self::Ambiguous { candidates } => {
                write!(f, "ambiguous input: {} complete parses", candidates)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// A regular expression given to [`try_pattern`](crate::regex::try_pattern) could not be compiled.
#[derive(Debug)]
pub struct PatternError {
    pub(crate) expr: String,
    pub(crate) source: regex_automata::meta::BuildError,
}

impl PatternError {
    /// The expression that failed to compile.
    pub fn expr(&self) -> &str {
        &self.expr
    }
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid pattern {:?}: {}", self.expr, self.source)
    }
}

impl std::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}
