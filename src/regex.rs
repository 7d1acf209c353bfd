//! Implementations of regex-based parsers

use super::*;

use regex_automata::{meta::Regex, Anchored, Input};

/// Match a prefix of the input against the given regular expression.
///
/// The match is anchored at the start of the input and follows leftmost-first semantics, so `a|ab` matches only the
/// `a` of `"ab"`. The result is the matched slice of the input.
///
/// # Panics
///
/// Panics if `expr` is not a valid regular expression. Use [`try_pattern`] to handle that case instead.
///
/// # Examples
///
/// ```
/// # use parsekit::prelude::*;
/// let ident = pattern("[a-zA-Z_][a-zA-Z0-9_]*").token().many();
///
/// assert_eq!(ident.run("hello world this works"), vec![(vec!["hello", "world", "this", "works"], "")]);
/// assert!(pattern("[0-9]+").run("x1").is_empty());
/// ```
#[track_caller]
pub fn pattern<'a>(expr: &str) -> Parser<'a, &'a str> {
    match try_pattern(expr) {
        Ok(parser) => parser,
        Err(err) => panic!("{}", err),
    }
}

/// Like [`pattern`], but returns an error instead of panicking if `expr` is not a valid regular expression.
///
/// # Examples
///
/// ```
/// # use parsekit::prelude::*;
/// assert!(try_pattern("[0-9]+").is_ok());
/// assert!(try_pattern("[0-9").is_err());
/// ```
pub fn try_pattern<'a>(expr: &str) -> Result<Parser<'a, &'a str>, PatternError> {
    let regex = Regex::new(expr).map_err(|source| PatternError {
        expr: expr.to_string(),
        source,
    })?;
    Ok(from_regex(regex))
}

pub(crate) fn from_regex<'a>(regex: Regex) -> Parser<'a, &'a str> {
    Parser::from_go(move |inp: &'a str, _| match match_prefix(&regex, inp) {
        Some(len) => vec![(&inp[..len], &inp[len..])],
        None => Vec::new(),
    })
}

// The length of the prefix of `trailing` matched by the regex, if any.
#[inline]
fn match_prefix(regex: &Regex, trailing: &str) -> Option<usize> {
    regex
        .find(Input::new(trailing).anchored(Anchored::Yes))
        .map(|m| m.end())
}
