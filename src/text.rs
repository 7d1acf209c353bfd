//! Text-specific parsers and utilities.
//!
//! These are the building blocks of whitespace-insensitive grammars: [`literal`] matches exact text, [`whitespace`]
//! skips blanks, and [`Parser::token`] (or [`symbol`], for punctuation) swallows the whitespace that follows a lexeme.

use super::*;

use once_cell::sync::Lazy;
use regex_automata::meta::Regex;

static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*").expect("the whitespace pattern is a valid regex"));

/// A parser that accepts any amount of whitespace, including none at all.
///
/// It always succeeds with exactly one candidate, whose result is the whitespace that was consumed.
///
/// # Examples
///
/// ```
/// # use parsekit::prelude::*;
/// assert_eq!(whitespace().run(" \t\n x"), vec![(" \t\n ", "x")]);
/// assert_eq!(whitespace().run("x"), vec![("", "x")]);
/// ```
pub fn whitespace<'a>() -> Parser<'a, &'a str> {
    regex::from_regex(WHITESPACE.clone())
}

/// A parser that accepts only the given text, exactly (and case-sensitively).
///
/// The result is the matched slice of the input. There are no partial matches: if the input does not start with the
/// whole text, the parser fails.
///
/// # Examples
///
/// ```
/// # use parsekit::prelude::*;
/// let token = literal("token");
///
/// assert_eq!(token.run("tokenstr"), vec![("token", "str")]);
/// assert!(token.run("toke").is_empty());
/// assert!(token.run("Token").is_empty());
/// ```
pub fn literal<'a, T>(text: T) -> Parser<'a, &'a str>
where
    T: AsRef<str> + MaybeSync + 'a,
{
    Parser::from_go(move |inp: &'a str, _| {
        let text = text.as_ref();
        if inp.starts_with(text) {
            vec![(&inp[..text.len()], &inp[text.len()..])]
        } else {
            Vec::new()
        }
    })
}

/// A [`literal`] followed by any amount of whitespace: the usual way to match punctuation and keywords.
///
/// # Examples
///
/// ```
/// # use parsekit::prelude::*;
/// let open = symbol("(");
///
/// assert_eq!(open.run("(  42"), vec![("(", "42")]);
/// ```
pub fn symbol<'a, T>(text: T) -> Parser<'a, &'a str>
where
    T: AsRef<str> + MaybeSync + 'a,
{
    literal(text).token()
}

impl<'a, O: 'a> Parser<'a, O> {
    /// Parse a pattern, then consume and discard any whitespace that follows it.
    ///
    /// The result is unchanged. Making every lexeme a token, and running the grammar with [`Parser::apply`], makes a
    /// grammar insensitive to whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// # use parsekit::prelude::*;
    /// let word = satisfy(|c: &char| c.is_alphabetic()).some().collect::<String>().token();
    ///
    /// assert_eq!(word.run("hello   world"), vec![("hello".to_string(), "world")]);
    /// ```
    pub fn token(self) -> Self {
        let whitespace = whitespace();
        Parser::from_go(move |inp, debugger| {
            let mut out = Vec::new();
            for (value, rest) in self.go(inp, debugger) {
                if let Some((_, rest)) = whitespace.go(rest, debugger).into_iter().next() {
                    out.push((value, rest));
                }
            }
            out
        })
    }
}
