//! Utilities for debugging parsers.
//!
//! Mark interesting parsers with [`Parser::debug`], then run the grammar with [`Parser::apply_verbose`] (or
//! [`Parser::apply_with_debugger`] and a [`Verbose`] of your own) to see which of them were entered, on what input,
//! and how many candidates each produced.

use super::*;

use std::{fmt, panic::Location};

/// Information about a specific parser.
#[derive(Clone, Debug)]
pub struct ParserInfo {
    label: String,
    location: Location<'static>,
}

impl ParserInfo {
    pub(crate) fn new(label: impl fmt::Display, location: Location<'static>) -> Self {
        Self {
            label: label.to_string(),
            location,
        }
    }

    /// The label given to [`Parser::debug`].
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Where in the source code the parser was marked.
    pub fn location(&self) -> &Location<'static> {
        &self.location
    }
}

/// A trait implemented by parser debuggers.
///
/// Every parser invocation carries a debugger, but only parsers marked with [`Parser::debug`] report to it. Each
/// [`Debugger::enter`] is matched by exactly one [`Debugger::exit`], with any nested marked parsers reported in
/// between.
pub trait Debugger {
    /// A marked parser is about to run on the given input.
    fn enter(&mut self, info: &ParserInfo, input: &str);

    /// The most recently entered parser finished, producing the given number of candidates.
    fn exit(&mut self, info: &ParserInfo, candidates: usize);
}

/// A silent debugger that emits no debugging messages nor collects any debugging data.
#[derive(Debug, Default)]
pub struct Silent {
    _private: (),
}

impl Silent {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

impl Debugger for Silent {
    fn enter(&mut self, _: &ParserInfo, _: &str) {}
    fn exit(&mut self, _: &ParserInfo, _: usize) {}
}

/// One scope recorded by a [`Verbose`] debugger.
#[derive(Clone, Debug)]
pub struct Scope {
    /// The parser that was entered.
    pub info: ParserInfo,
    /// The input it was given.
    pub input: String,
    /// How many candidates it produced, or `None` if it never finished.
    pub candidates: Option<usize>,
    /// Scopes of the marked parsers that ran while this one was running.
    pub children: Vec<Scope>,
}

/// A verbose debugger that records every marked parser invocation as a tree of [`Scope`]s.
///
/// Its [`fmt::Display`] implementation renders the tree with one line per scope, indented by nesting depth.
#[derive(Debug, Default)]
pub struct Verbose {
    roots: Vec<Scope>,
    // Scopes that have been entered but not yet exited, innermost last.
    open: Vec<Scope>,
}

impl Verbose {
    /// Create a debugger with nothing recorded yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// The outermost scopes recorded so far.
    pub fn scopes(&self) -> &[Scope] {
        &self.roots
    }

    pub(crate) fn print(&self) {
        print!("{}", self);
    }

    fn fmt_scope(scope: &Scope, depth: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:indent$}Entered {} at line {} in {} on {:?}",
            "",
            scope.info.label,
            scope.info.location.line(),
            scope.info.location.file(),
            scope.input,
            indent = depth * 4,
        )?;
        match scope.candidates {
            Some(n) => writeln!(f, " -> {} candidate(s)", n)?,
            None => writeln!(f, " -> unfinished")?,
        }
        scope
            .children
            .iter()
            .try_for_each(|child| Self::fmt_scope(child, depth + 1, f))
    }
}

impl Debugger for Verbose {
    fn enter(&mut self, info: &ParserInfo, input: &str) {
        self.open.push(Scope {
            info: info.clone(),
            input: input.to_string(),
            candidates: None,
            children: Vec::new(),
        });
    }

    fn exit(&mut self, info: &ParserInfo, candidates: usize) {
        if let Some(mut scope) = self.open.pop() {
            debug_assert!(
                scope.info.label == info.label && scope.info.location == info.location,
                "exited {:?} while {:?} was the innermost open scope",
                info.label,
                scope.info.label,
            );
            scope.candidates = Some(candidates);
            match self.open.last_mut() {
                Some(parent) => parent.children.push(scope),
                None => self.roots.push(scope),
            }
        }
    }
}

impl fmt::Display for Verbose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.roots
            .iter()
            .chain(self.open.iter())
            .try_for_each(|scope| Self::fmt_scope(scope, 0, f))
    }
}

impl<'a, O: 'a> Parser<'a, O> {
    /// Include this parser in the trace recorded by [`Parser::apply_verbose`] and [`Verbose`].
    ///
    /// The parser's behaviour is unchanged. You'll probably want to make sure that this doesn't end up in production
    /// code: it exists only to help you debug your parser.
    ///
    /// # Examples
    ///
    /// ```
    /// # use parsekit::{prelude::*, debug::Verbose};
    /// let digit = satisfy(|c: &char| c.is_ascii_digit()).debug("digit");
    /// let digits = digit.many().debug("digits");
    ///
    /// let mut debugger = Verbose::new();
    /// digits.apply_with_debugger("12", &mut debugger);
    ///
    /// let root = &debugger.scopes()[0];
    /// assert_eq!(root.info.label(), "digits");
    /// // Two successful digits, then one failed attempt at the end of the input.
    /// assert_eq!(root.children.len(), 3);
    /// ```
    #[track_caller]
    pub fn debug<T: fmt::Display>(self, label: T) -> Self {
        let info = ParserInfo::new(label, *Location::caller());
        Parser::from_go(move |inp, debugger| {
            debugger.enter(&info, inp);
            let out = self.go(inp, debugger);
            debugger.exit(&info, out.len());
            out
        })
    }
}
