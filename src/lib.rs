//! A small backtracking parser combinator library.
//!
//! A [`Parser`] is a value wrapping a function from an input suffix to an ordered list of *candidates*: every way
//! the parser could consume a prefix of the input, each paired with the input that remains afterwards. An empty list
//! means the parser failed. Grammars are built by combining small parsers into larger ones, no grammar compiler or
//! generated code required.
//!
//! Ambiguity is never an error. Combinators such as [`Parser::union`] keep every candidate, while deterministic ones
//! such as [`Parser::committed`], [`Parser::many`] and [`Parser::chain`] keep only the first, which keeps the number
//! of candidates in flight small for the common repetition and precedence idioms.
//!
//! # Example
//!
//! ```
//! use parsekit::prelude::*;
//!
//! let digit = satisfy(|c: &char| c.is_ascii_digit()).map(|c| c.to_digit(10).unwrap());
//! let digits = digit.separated_by_at_least_one(literal(","));
//!
//! assert_eq!(digits.apply("1,2,3"), vec![(vec![1, 2, 3], "")]);
//! assert_eq!(digits.parse("  4,5"), Ok(vec![4, 5]));
//! ```
//!
//! # Features
//!
//! - `sync` (default): parsers are backed by [`std::sync::Arc`] and may be shared between threads. Every closure and
//!   value captured by a parser must then be [`Send`] and [`Sync`] (see [`MaybeSync`]).
//! - `stacker` (default): deeply nested parsers grow the stack on the heap rather than overflowing it.
#![deny(missing_docs)]

pub mod combinator;
pub mod debug;
pub mod error;
/// Splitting text into its smallest parseable units.
pub mod input;
pub mod primitive;
/// Recursive parsers (parser that include themselves within their patterns).
pub mod recursive;
pub mod regex;
pub mod text;

pub use crate::{
    debug::Debugger,
    error::{ParseError, PatternError},
    sync::MaybeSync,
};

use crate::{
    debug::{Silent, Verbose},
    sync::RefC,
};

/// Commonly used functions, traits and types.
pub mod prelude {
    pub use super::{
        input::Uncons as _,
        primitive::{empty, end, grapheme, item, one_of, pure, satisfy},
        recursive::recursive,
        regex::{pattern, try_pattern},
        text::{literal, symbol, whitespace},
        Candidates, ParseError, Parser,
    };
}

#[cfg(feature = "sync")]
mod sync {
    pub(crate) type RefC<T> = std::sync::Arc<T>;
    pub(crate) type RefW<T> = std::sync::Weak<T>;
    pub(crate) type OnceCell<T> = once_cell::sync::OnceCell<T>;

    /// A trait that requires either nothing or [`Send`] and [`Sync`] bounds depending on whether the `sync` feature
    /// is enabled. Used to constrain everything a parser captures.
    pub trait MaybeSync: Send + Sync {}
    impl<T: Send + Sync + ?Sized> MaybeSync for T {}
}

#[cfg(not(feature = "sync"))]
mod sync {
    pub(crate) type RefC<T> = std::rc::Rc<T>;
    pub(crate) type RefW<T> = std::rc::Weak<T>;
    pub(crate) type OnceCell<T> = once_cell::unsync::OnceCell<T>;

    /// A trait that requires either nothing or [`Send`] and [`Sync`] bounds depending on whether the `sync` feature
    /// is enabled. Used to constrain everything a parser captures.
    pub trait MaybeSync {}
    impl<T: ?Sized> MaybeSync for T {}
}

/// Every way a parser consumed a prefix of its input: each result paired with the input left over after producing it.
///
/// An empty list means that the parser failed. The remaining input of each candidate is always a suffix of (or equal
/// to) the input the parser was given.
pub type Candidates<'a, O> = Vec<(O, &'a str)>;

trait ParseFn<'a, O>: Fn(&'a str, &mut dyn Debugger) -> Candidates<'a, O> + MaybeSync {}
impl<'a, O, F> ParseFn<'a, O> for F where F: Fn(&'a str, &mut dyn Debugger) -> Candidates<'a, O> + MaybeSync {}

// Run `f`, growing the stack first if it's close to running out.
#[cfg(feature = "stacker")]
#[inline]
pub(crate) fn recurse<R, F: FnOnce() -> R>(f: F) -> R {
    stacker::maybe_grow(1024 * 64, 1024 * 1024, f)
}
#[cfg(not(feature = "stacker"))]
#[inline]
pub(crate) fn recurse<R, F: FnOnce() -> R>(f: F) -> R {
    f()
}

/// A parser that produces outputs of type `O` from text with lifetime `'a`.
///
/// Parsers are immutable once constructed: every combinator consumes its receiver and returns a new parser. Cloning a
/// parser is cheap (it only bumps a reference count) and the clone behaves identically to the original.
///
/// Running a parser twice on the same input always yields the same candidates.
///
/// # Input lifetime
///
/// Results such as the slices produced by [`literal`](text::literal) borrow from the input, so the input must outlive
/// the parser: a parser can't be run on text that is dropped before the parser is. There are two ways to reuse a
/// grammar on many inputs:
///
/// - Keep the inputs alive for longer than the parser, by declaring them (or the buffer holding them) first.
/// - Write the grammar as a function `fn grammar<'a>() -> Parser<'a, O>` and build a fresh parser for each input. This
///   is the usual pattern for inputs that are read one at a time.
///
/// # Examples
///
/// ```
/// # use parsekit::prelude::*;
/// fn words<'a>() -> Parser<'a, Vec<&'a str>> {
///     pattern("[a-z]+").token().many()
/// }
///
/// for n in 1..4 {
///     let line = "word ".repeat(n);
///     assert_eq!(words().parse(&line).map(|ws| ws.len()), Ok(n));
/// }
/// ```
pub struct Parser<'a, O> {
    go: RefC<dyn ParseFn<'a, O> + 'a>,
}

impl<'a, O> Clone for Parser<'a, O> {
    fn clone(&self) -> Self {
        Self { go: self.go.clone() }
    }
}

impl<'a, O: 'a> Parser<'a, O> {
    /// Create a parser from a function that produces the candidates for a given input.
    ///
    /// This is the escape hatch for writing your own primitives. The function must only ever return remaining inputs
    /// that are suffixes of the input it was given.
    ///
    /// # Examples
    ///
    /// ```
    /// # use parsekit::prelude::*;
    /// // Consumes either one or two characters, keeping both interpretations.
    /// let one_or_two = Parser::new(|inp| {
    ///     inp.char_indices()
    ///         .skip(1)
    ///         .map(|(i, _)| i)
    ///         .chain(Some(inp.len()))
    ///         .take(2)
    ///         .filter(|&i| i > 0)
    ///         .map(|i| (&inp[..i], &inp[i..]))
    ///         .collect()
    /// });
    ///
    /// assert_eq!(one_or_two.run("abc"), vec![("a", "bc"), ("ab", "c")]);
    /// ```
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&'a str) -> Candidates<'a, O> + MaybeSync + 'a,
    {
        Self::from_go(move |inp, _| f(inp))
    }

    pub(crate) fn from_go<F>(f: F) -> Self
    where
        F: Fn(&'a str, &mut dyn Debugger) -> Candidates<'a, O> + MaybeSync + 'a,
    {
        Self { go: RefC::new(f) }
    }

    #[inline]
    pub(crate) fn go(&self, inp: &'a str, debugger: &mut dyn Debugger) -> Candidates<'a, O> {
        (self.go)(inp, debugger)
    }

    /// Run the parser on the input exactly as given, without skipping leading whitespace.
    pub fn run(&self, input: &'a str) -> Candidates<'a, O> {
        self.go(input, &mut Silent::new())
    }

    /// Skip any leading whitespace, then run the parser.
    ///
    /// This is the usual entry point for a grammar: combined with [`Parser::token`] on every lexeme, it makes a
    /// grammar insensitive to whitespace at both of its boundaries.
    ///
    /// # Examples
    ///
    /// ```
    /// # use parsekit::prelude::*;
    /// let hello = symbol("hello");
    ///
    /// assert_eq!(hello.apply("  hello  world"), vec![("hello", "world")]);
    /// assert!(hello.run("  hello").is_empty());
    /// ```
    pub fn apply(&self, input: &'a str) -> Candidates<'a, O> {
        self.apply_with_debugger(input, &mut Silent::new())
    }

    /// [`Parser::apply`], reporting every parser marked with [`Parser::debug`] to the given debugger.
    pub fn apply_with_debugger(&self, input: &'a str, debugger: &mut dyn Debugger) -> Candidates<'a, O> {
        let mut out = Vec::new();
        for (_, rest) in text::whitespace().go(input, debugger) {
            out.extend(self.go(rest, debugger));
        }
        out
    }

    /// [`Parser::apply`], printing a trace of every parser marked with [`Parser::debug`] to stdout.
    ///
    /// You'll probably want to make sure that this doesn't end up in production code: it exists only to help you debug
    /// your parser.
    pub fn apply_verbose(&self, input: &'a str) -> Candidates<'a, O> {
        let mut debugger = Verbose::new();
        let out = self.apply_with_debugger(input, &mut debugger);
        debugger.print();
        out
    }

    /// Apply the parser (see [`Parser::apply`]) and accept its output only if exactly one candidate consumed the entire
    /// input.
    ///
    /// This is the most common acceptance policy for a complete grammar. Callers that want a different policy (e.g.
    /// preferring the first candidate) should inspect the result of [`Parser::apply`] directly.
    ///
    /// # Examples
    ///
    /// ```
    /// # use parsekit::prelude::*;
    /// let word = satisfy(|c: &char| c.is_alphabetic()).some().collect::<String>().token();
    ///
    /// assert_eq!(word.parse(" hello "), Ok("hello".to_string()));
    /// assert_eq!(word.parse("42"), Err(ParseError::NoMatch));
    /// assert_eq!(word.parse("hello world"), Err(ParseError::Incomplete { remaining: "world".to_string() }));
    /// ```
    pub fn parse(&self, input: &'a str) -> Result<O, ParseError> {
        let mut complete = Vec::new();
        let mut shortest: Option<&'a str> = None;
        for (out, rest) in self.apply(input) {
            if rest.is_empty() {
                complete.push(out);
            } else if shortest.map_or(true, |s| rest.len() < s.len()) {
                shortest = Some(rest);
            }
        }

        let candidates = complete.len();
        match (complete.into_iter().next(), shortest) {
            (Some(out), _) if candidates == 1 => Ok(out),
            (Some(_), _) => Err(ParseError::Ambiguous { candidates }),
            (None, Some(rest)) => Err(ParseError::Incomplete {
                remaining: rest.to_string(),
            }),
            (None, None) => Err(ParseError::NoMatch),
        }
    }
}

impl<'a, O> std::fmt::Debug for Parser<'a, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn apply_skips_leading_whitespace() {
        let p = literal("x");
        assert_eq!(p.apply(" \t\n x y"), vec![("x", " y")]);
        assert!(p.run(" x").is_empty());
    }

    #[test]
    fn parse_ambiguous() {
        let p = literal("ab").union(literal("a").then_ignore(literal("b")));
        assert_eq!(p.parse("ab"), Err(ParseError::Ambiguous { candidates: 2 }));
    }

    #[test]
    fn parse_reports_shortest_remaining() {
        let p = literal("a").union(literal("ab"));
        assert_eq!(
            p.parse("abc"),
            Err(ParseError::Incomplete {
                remaining: "c".to_string()
            })
        );
    }

    #[test]
    fn parse_prefers_the_complete_candidate() {
        let p = literal("a").union(literal("ab"));
        assert_eq!(p.parse("ab"), Ok("ab"));
    }

    #[test]
    fn clones_are_equivalent() {
        let p = satisfy(|c: &char| c.is_ascii_digit()).many();
        let q = p.clone();
        assert_eq!(p.run("12a"), q.run("12a"));
    }
}
