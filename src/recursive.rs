use super::*;

use crate::sync::{OnceCell, RefW};

/// Construct a recursive parser (i.e: a parser that may contain itself as part of its pattern).
///
/// The given function receives a handle to the parser being defined and must return its definition. The handle may
/// be cloned and combined freely, but must not be run before this function returns.
///
/// Parsers are built eagerly, so a grammar that refers to itself through plain function calls would never finish
/// being constructed. Tie the knot with this function instead. Left recursion (a parser whose first step is itself)
/// still never terminates; use [`Parser::chain`] for left-associative operators.
///
/// # Panics
///
/// Running the handle panics if it escaped the function it was given to and the parser it refers to has since been
/// dropped.
///
/// # Examples
///
/// ```
/// # use parsekit::prelude::*;
/// #[derive(Clone, Debug, PartialEq)]
/// enum Tree {
///     Leaf(String),
///     Branch(Vec<Tree>),
/// }
///
/// // Parser that recursively parses nested lists
/// let tree = recursive(|tree| {
///     let leaf = satisfy(|c: &char| c.is_alphabetic())
///         .some()
///         .collect::<String>()
///         .map(Tree::Leaf)
///         .token();
///     let branch = tree
///         .separated_by(symbol(","))
///         .bind(|items| symbol("]").map(move |_| Tree::Branch(items.clone())));
///     leaf.union(symbol("[").ignore_then(branch))
/// });
///
/// assert_eq!(tree.parse("hello"), Ok(Tree::Leaf("hello".to_string())));
/// assert_eq!(tree.parse("[a, [b, c], []]"), Ok(Tree::Branch(vec![
///     Tree::Leaf("a".to_string()),
///     Tree::Branch(vec![
///         Tree::Leaf("b".to_string()),
///         Tree::Leaf("c".to_string()),
///     ]),
///     Tree::Branch(vec![]),
/// ])));
/// ```
pub fn recursive<'a, O: 'a, F>(f: F) -> Parser<'a, O>
where
    F: FnOnce(Parser<'a, O>) -> Parser<'a, O>,
{
    let cell: RefC<OnceCell<Parser<'a, O>>> = RefC::new(OnceCell::new());

    // The handle only holds a weak reference, so the definition doesn't keep itself alive.
    let weak: RefW<OnceCell<Parser<'a, O>>> = RefC::downgrade(&cell);
    let handle = Parser::from_go(move |inp, debugger| {
        let cell = weak
            .upgrade()
            .expect("Recursive parser used after its definition was dropped");
        match cell.get() {
            Some(parser) => recurse(|| parser.go(inp, debugger)),
            None => panic!("Recursive parser used prior to construction"),
        }
    });

    let definition = f(handle);
    if cell.set(definition).is_err() {
        unreachable!("a freshly created cell is always empty");
    }

    Parser::from_go(move |inp, debugger| match cell.get() {
        Some(parser) => parser.go(inp, debugger),
        None => Vec::new(),
    })
}
