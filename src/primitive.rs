//! Parser primitives that are defined directly against the input.
//!
//! Every other parser in the crate is built by combining these.

use super::*;

use crate::input::Uncons;

impl<'a, O: 'a> Parser<'a, O> {
    /// See [`pure`].
    pub fn pure(value: O) -> Self
    where
        O: Clone + MaybeSync,
    {
        pure(value)
    }

    /// See [`empty`].
    pub fn empty() -> Self {
        empty()
    }
}

/// A parser that always succeeds with the given value, consuming nothing.
///
/// This is the identity of sequencing: `pure(v).bind(f)` behaves exactly like `f(v)`.
///
/// # Examples
///
/// ```
/// # use parsekit::prelude::*;
/// assert_eq!(pure(10).run("test"), vec![(10, "test")]);
/// ```
pub fn pure<'a, O>(value: O) -> Parser<'a, O>
where
    O: Clone + MaybeSync + 'a,
{
    Parser::from_go(move |inp, _| vec![(value.clone(), inp)])
}

/// A parser that always fails, whatever the input.
///
/// This is the identity of [`Parser::union`].
///
/// # Examples
///
/// ```
/// # use parsekit::prelude::*;
/// assert!(empty::<()>().run("anything").is_empty());
/// ```
pub fn empty<'a, O: 'a>() -> Parser<'a, O> {
    Parser::from_go(|_, _| Vec::new())
}

/// A parser that accepts only the end of the input.
///
/// # Examples
///
/// ```
/// # use parsekit::prelude::*;
/// assert_eq!(end().run(""), vec![((), "")]);
/// assert!(end().run("x").is_empty());
/// ```
pub fn end<'a>() -> Parser<'a, ()> {
    Parser::from_go(|inp, _| if inp.is_empty() { vec![((), inp)] } else { Vec::new() })
}

/// A parser that consumes exactly one character (Unicode scalar value), whatever it is.
///
/// It fails only on empty input.
///
/// # Examples
///
/// ```
/// # use parsekit::prelude::*;
/// assert_eq!(item().run("test"), vec![('t', "est")]);
/// assert!(item().run("").is_empty());
/// ```
pub fn item<'a>() -> Parser<'a, char> {
    Parser::from_go(|inp: &'a str, _| inp.uncons().into_iter().collect())
}

/// A parser that consumes exactly one extended grapheme cluster, whatever it is.
///
/// Unlike [`item`], a user-perceived character made up of several scalar values (such as a letter followed by a
/// combining accent) is consumed as a whole.
///
/// # Examples
///
/// ```
/// # use parsekit::prelude::*;
/// assert_eq!(grapheme().run("e\u{301}!"), vec![("e\u{301}", "!")]);
/// ```
pub fn grapheme<'a>() -> Parser<'a, &'a str> {
    Parser::from_go(|inp: &'a str, _| inp.uncons_grapheme().into_iter().collect())
}

/// A parser that consumes one character, succeeding only if it satisfies the given predicate.
///
/// # Examples
///
/// ```
/// # use parsekit::prelude::*;
/// let lowercase = satisfy(char::is_ascii_lowercase);
///
/// assert_eq!(lowercase.run("xY"), vec![('x', "Y")]);
/// assert!(lowercase.run("Yx").is_empty());
/// ```
pub fn satisfy<'a, F>(predicate: F) -> Parser<'a, char>
where
    F: Fn(&char) -> bool + MaybeSync + 'a,
{
    item().filter(predicate)
}

/// A parser that consumes one character, succeeding only if it is one of the given characters.
///
/// # Examples
///
/// ```
/// # use parsekit::prelude::*;
/// let sign = one_of("+-");
///
/// assert_eq!(sign.run("-1"), vec![('-', "1")]);
/// assert!(sign.run("1").is_empty());
/// ```
pub fn one_of<'a, T>(chars: T) -> Parser<'a, char>
where
    T: AsRef<str> + MaybeSync + 'a,
{
    satisfy(move |c| chars.as_ref().contains(*c))
}
