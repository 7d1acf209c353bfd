//! Combinators that allow combining and extending existing parsers.
//!
//! All of them are methods on [`Parser`]. Each one consumes its receiver (clone the parser first if you need it
//! elsewhere; cloning is cheap) and returns a new parser.
//!
//! Unless stated otherwise, a combinator is *ordered*: it returns candidates in the order its sub-parsers produced
//! them. The *deterministic* ones ([`Parser::committed`], [`Parser::many`], [`Parser::separated_by`],
//! [`Parser::chain`] and friends) return at most one candidate per input, the first one found trying the left
//! alternative first.

use super::*;

use crate::primitive::pure;

impl<'a, O: 'a> Parser<'a, O> {
    /// Map the result of this parser to another value.
    ///
    /// The remaining input, the order, and the number of candidates are all unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use parsekit::prelude::*;
    /// let digit = satisfy(|c: &char| c.is_ascii_digit()).map(|c| c as u8 - b'0');
    ///
    /// assert_eq!(digit.run("7up"), vec![(7, "up")]);
    /// ```
    pub fn map<U: 'a, F>(self, f: F) -> Parser<'a, U>
    where
        F: Fn(O) -> U + MaybeSync + 'a,
    {
        Parser::from_go(move |inp, debugger| {
            self.go(inp, debugger)
                .into_iter()
                .map(|(out, rest)| (f(out), rest))
                .collect()
        })
    }

    /// Sequence this parser with another one that depends on its result.
    ///
    /// For every candidate `(a, rest)` of this parser, `f(a)` is run on `rest`. The resulting candidates are
    /// concatenated in the order of the candidates they came from. Every other sequencing combinator can be written in
    /// terms of this one.
    ///
    /// # Examples
    ///
    /// ```
    /// # use parsekit::prelude::*;
    /// // A string delimited by whichever quote character it starts with.
    /// let quote = one_of("'\"");
    /// let string = quote.bind(|q| {
    ///     satisfy(move |c| *c != q)
    ///         .many()
    ///         .collect::<String>()
    ///         .then_ignore(literal(q.to_string()))
    /// });
    ///
    /// assert_eq!(string.run("'say \"hi\"'"), vec![("say \"hi\"".to_string(), "")]);
    /// assert!(string.run("'unclosed\"").is_empty());
    /// ```
    pub fn bind<U: 'a, F>(self, f: F) -> Parser<'a, U>
    where
        F: Fn(O) -> Parser<'a, U> + MaybeSync + 'a,
    {
        Parser::from_go(move |inp, debugger| {
            let mut out = Vec::new();
            for (value, rest) in self.go(inp, debugger) {
                let next = f(value);
                out.extend(recurse(|| next.go(rest, debugger)));
            }
            out
        })
    }

    /// Run both parsers on the same input and keep every candidate: first this parser's, then the other's.
    ///
    /// Use this where an ambiguity must be preserved. See [`Parser::committed`] and [`Parser::or_else`] for choices
    /// that keep fewer candidates.
    ///
    /// # Examples
    ///
    /// ```
    /// # use parsekit::prelude::*;
    /// let a_or_ab = literal("a").union(literal("ab"));
    ///
    /// assert_eq!(a_or_ab.run("abc"), vec![("a", "bc"), ("ab", "c")]);
    /// ```
    pub fn union(self, other: Self) -> Self {
        Parser::from_go(move |inp, debugger| {
            let mut out = self.go(inp, debugger);
            out.extend(other.go(inp, debugger));
            out
        })
    }

    /// Like [`Parser::union`], but keep only the first candidate.
    ///
    /// The result is empty only if both alternatives fail. The other parser is not run at all if this one succeeds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use parsekit::prelude::*;
    /// let a_or_ab = literal("a").committed(literal("ab"));
    ///
    /// assert_eq!(a_or_ab.run("abc"), vec![("a", "bc")]);
    /// assert!(a_or_ab.run("b").is_empty());
    /// ```
    pub fn committed(self, other: Self) -> Self {
        Parser::from_go(move |inp, debugger| {
            let mut out = self.go(inp, debugger);
            if out.is_empty() {
                out = other.go(inp, debugger);
            }
            out.truncate(1);
            out
        })
    }

    /// Keep every candidate of this parser if it has any, otherwise every candidate of the other.
    ///
    /// # Examples
    ///
    /// ```
    /// # use parsekit::prelude::*;
    /// let p = literal("a").union(literal("ab")).or_else(literal("b"));
    ///
    /// assert_eq!(p.run("ab"), vec![("a", "b"), ("ab", "")]);
    /// assert_eq!(p.run("b"), vec![("b", "")]);
    /// ```
    pub fn or_else(self, other: Self) -> Self {
        Parser::from_go(move |inp, debugger| {
            let out = self.go(inp, debugger);
            if out.is_empty() {
                other.go(inp, debugger)
            } else {
                out
            }
        })
    }

    /// Keep only the candidates whose result satisfies the predicate.
    ///
    /// # Examples
    ///
    /// ```
    /// # use parsekit::prelude::*;
    /// let vowel = item().filter(|c| "aeiou".contains(*c));
    ///
    /// assert_eq!(vowel.run("apple"), vec![('a', "pple")]);
    /// assert!(vowel.run("pear").is_empty());
    /// ```
    pub fn filter<F>(self, predicate: F) -> Self
    where
        F: Fn(&O) -> bool + MaybeSync + 'a,
    {
        Parser::from_go(move |inp, debugger| {
            let mut out = self.go(inp, debugger);
            out.retain(|(value, _)| predicate(value));
            out
        })
    }

    /// Parse a pattern, or nothing at all.
    ///
    /// Every candidate of this parser is wrapped in [`Some`], then a final `None` candidate that consumed nothing is
    /// added. The parser never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// # use parsekit::prelude::*;
    /// let sign = one_of("+-").optional();
    ///
    /// assert_eq!(sign.run("-1"), vec![(Some('-'), "1"), (None, "-1")]);
    /// assert_eq!(sign.run("1"), vec![(None, "1")]);
    /// ```
    pub fn optional(self) -> Parser<'a, Option<O>> {
        Parser::from_go(move |inp, debugger| {
            let mut out: Candidates<'a, Option<O>> = self
                .go(inp, debugger)
                .into_iter()
                .map(|(value, rest)| (Some(value), rest))
                .collect();
            out.push((None, inp));
            out
        })
    }

    /// Parse a pattern zero or more times, as many times as possible.
    ///
    /// This produces exactly one candidate: the greedy left-to-right match, taking the first candidate of this parser
    /// at every step. It never fails. If a step succeeds without consuming any input, its result is kept and the
    /// repetition stops there.
    ///
    /// # Examples
    ///
    /// ```
    /// # use parsekit::prelude::*;
    /// let digits = satisfy(|c: &char| c.is_ascii_digit()).many();
    ///
    /// assert_eq!(digits.run("123abc"), vec![(vec!['1', '2', '3'], "abc")]);
    /// assert_eq!(digits.run("abc"), vec![(vec![], "abc")]);
    /// ```
    pub fn many(self) -> Parser<'a, Vec<O>> {
        Parser::from_go(move |inp, debugger| vec![repeat(&self, Vec::new(), inp, debugger)])
    }

    /// Parse a pattern one or more times.
    ///
    /// The first application may be ambiguous: there is one candidate for each of its candidates, each followed by
    /// [`Parser::many`] on what it left over.
    ///
    /// # Examples
    ///
    /// ```
    /// # use parsekit::prelude::*;
    /// let digits = satisfy(|c: &char| c.is_ascii_digit()).some();
    ///
    /// assert_eq!(digits.run("12a"), vec![(vec!['1', '2'], "a")]);
    /// assert!(digits.run("a").is_empty());
    /// ```
    pub fn some(self) -> Parser<'a, Vec<O>> {
        Parser::from_go(move |inp, debugger| {
            self.go(inp, debugger)
                .into_iter()
                .map(|(first, rest)| repeat(&self, vec![first], rest, debugger))
                .collect()
        })
    }

    /// Parse one or more patterns separated by another pattern, discarding the separators.
    ///
    /// Like [`Parser::some`], only the first element may be ambiguous; the rest of the list is matched greedily.
    ///
    /// # Examples
    ///
    /// ```
    /// # use parsekit::prelude::*;
    /// let digit = satisfy(|c: &char| c.is_ascii_digit()).map(|c| c.to_digit(10).unwrap());
    /// let list = digit.separated_by_at_least_one(literal(","));
    ///
    /// assert_eq!(list.run("1,2,3"), vec![(vec![1, 2, 3], "")]);
    /// assert_eq!(list.run("1,2,"), vec![(vec![1, 2], ",")]);
    /// assert!(list.run(",1").is_empty());
    /// ```
    pub fn separated_by_at_least_one<U: 'a>(self, separator: Parser<'a, U>) -> Parser<'a, Vec<O>> {
        let next = separator.ignore_then(self.clone());
        Parser::from_go(move |inp, debugger| {
            self.go(inp, debugger)
                .into_iter()
                .map(|(first, rest)| repeat(&next, vec![first], rest, debugger))
                .collect()
        })
    }

    /// Parse zero or more patterns separated by another pattern, discarding the separators.
    ///
    /// This produces exactly one candidate: the first candidate of [`Parser::separated_by_at_least_one`], or an empty
    /// list that consumed nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// # use parsekit::prelude::*;
    /// let list = item().separated_by(symbol(","));
    ///
    /// assert_eq!(list.run("a, b,c"), vec![(vec!['a', 'b', 'c'], "")]);
    /// assert_eq!(list.run(""), vec![(vec![], "")]);
    /// ```
    pub fn separated_by<U: 'a>(self, separator: Parser<'a, U>) -> Parser<'a, Vec<O>> {
        let at_least_one = self.separated_by_at_least_one(separator);
        Parser::from_go(move |inp, debugger| {
            let mut out = at_least_one.go(inp, debugger);
            out.truncate(1);
            if out.is_empty() {
                out.push((Vec::new(), inp));
            }
            out
        })
    }

    /// Parse a sequence of terms joined by binary operators, folding them together from the left.
    ///
    /// This parser's results are the terms. The operator parser produces the function that combines the result so far
    /// with the next term. After the first term, the first `(operator, term)` pair that matches is folded in, and so
    /// on until no pair matches. This gives left-associative operators without a left-recursive grammar, and keeps only
    /// one partial result in flight.
    ///
    /// Chain parsers for operators of higher precedence into those of lower precedence to build an expression grammar.
    ///
    /// # Examples
    ///
    /// ```
    /// # use parsekit::prelude::*;
    /// fn sub(a: i64, b: i64) -> i64 { a - b }
    ///
    /// let int = satisfy(|c: &char| c.is_ascii_digit())
    ///     .some()
    ///     .collect::<String>()
    ///     .map(|s| s.parse::<i64>().unwrap())
    ///     .token();
    /// let difference = int.chain(symbol("-").to(sub as fn(i64, i64) -> i64));
    ///
    /// // (10 - 3) - 2, not 10 - (3 - 2)
    /// assert_eq!(difference.parse("10 - 3 - 2"), Ok(5));
    /// ```
    pub fn chain<F>(self, op: Parser<'a, F>) -> Self
    where
        F: Fn(O, O) -> O + 'a,
    {
        Parser::from_go(move |inp, debugger| {
            self.go(inp, debugger)
                .into_iter()
                .map(|(first, rest)| fold_left(&self, &op, first, rest, debugger))
                .collect()
        })
    }

    /// Like [`Parser::chain`], but falls back to `seed` (consuming nothing) if not even the first term matches.
    ///
    /// # Examples
    ///
    /// ```
    /// # use parsekit::prelude::*;
    /// fn add(a: u32, b: u32) -> u32 { a + b }
    ///
    /// let digit = satisfy(|c: &char| c.is_ascii_digit()).map(|c| c.to_digit(10).unwrap());
    /// let sum = digit.chain_seeded(literal("+").to(add as fn(u32, u32) -> u32), 0);
    ///
    /// assert_eq!(sum.run("1+2+3"), vec![(6, "")]);
    /// assert_eq!(sum.run("+2"), vec![(0, "+2")]);
    /// ```
    pub fn chain_seeded<F>(self, op: Parser<'a, F>, seed: O) -> Self
    where
        F: Fn(O, O) -> O + 'a,
        O: Clone + MaybeSync,
    {
        self.chain(op).committed(pure(seed))
    }

    /// Parse one thing and then another thing, yielding a tuple of the two results.
    pub fn then<U: 'a>(self, other: Parser<'a, U>) -> Parser<'a, (O, U)>
    where
        O: Clone,
    {
        Parser::from_go(move |inp, debugger| {
            let mut out = Vec::new();
            for (a, rest) in self.go(inp, debugger) {
                for (b, rest) in recurse(|| other.go(rest, debugger)) {
                    out.push(((a.clone(), b), rest));
                }
            }
            out
        })
    }

    /// Parse one thing and then another thing, yielding only the result of the latter.
    pub fn ignore_then<U: 'a>(self, other: Parser<'a, U>) -> Parser<'a, U> {
        self.bind(move |_| other.clone())
    }

    /// Parse one thing and then another thing, yielding only the result of the former.
    ///
    /// # Examples
    ///
    /// ```
    /// # use parsekit::prelude::*;
    /// let statement = literal("x").then_ignore(literal(";"));
    ///
    /// assert_eq!(statement.run("x;y"), vec![("x", "y")]);
    /// ```
    pub fn then_ignore<U: 'a>(self, other: Parser<'a, U>) -> Self
    where
        O: Clone,
    {
        self.then(other).map(|(a, _)| a)
    }

    /// Parse a pattern between two others, keeping only the result of the middle one.
    ///
    /// # Examples
    ///
    /// ```
    /// # use parsekit::prelude::*;
    /// let word = satisfy(|c: &char| c.is_alphabetic()).some().collect::<String>().token();
    /// let group = word.delimited_by(symbol("("), symbol(")"));
    ///
    /// assert_eq!(group.apply("( hello )"), vec![("hello".to_string(), "")]);
    /// ```
    pub fn delimited_by<U: 'a, V: 'a>(self, open: Parser<'a, U>, close: Parser<'a, V>) -> Self
    where
        O: Clone,
    {
        open.ignore_then(self).then_ignore(close)
    }

    /// Replace every result of this parser with the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// # use parsekit::prelude::*;
    /// #[derive(Clone, Debug, PartialEq)]
    /// enum Op { Add, Sub }
    ///
    /// let op = symbol("+").to(Op::Add).union(symbol("-").to(Op::Sub));
    ///
    /// assert_eq!(op.run("- 1"), vec![(Op::Sub, "1")]);
    /// ```
    pub fn to<U>(self, value: U) -> Parser<'a, U>
    where
        U: Clone + MaybeSync + 'a,
    {
        self.map(move |_| value.clone())
    }

    /// Ignore the result of this parser, yielding `()` instead.
    pub fn ignored(self) -> Parser<'a, ()> {
        self.map(|_| ())
    }
}

impl<'a, F: 'a> Parser<'a, F> {
    /// Apply the functions produced by this parser to the arguments produced by the parser that follows it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use parsekit::prelude::*;
    /// fn negate(n: i32) -> i32 { -n }
    /// fn keep(n: i32) -> i32 { n }
    ///
    /// let sign = literal("-").to(negate as fn(i32) -> i32).committed(pure(keep as fn(i32) -> i32));
    /// let digit = satisfy(|c: &char| c.is_ascii_digit()).map(|c| c.to_digit(10).unwrap() as i32);
    /// let signed = sign.ap(digit);
    ///
    /// assert_eq!(signed.run("-4"), vec![(-4, "")]);
    /// assert_eq!(signed.run("4"), vec![(4, "")]);
    /// ```
    pub fn ap<T: 'a, U: 'a>(self, arg: Parser<'a, T>) -> Parser<'a, U>
    where
        F: Fn(T) -> U,
    {
        Parser::from_go(move |inp, debugger| {
            let mut out = Vec::new();
            for (f, rest) in self.go(inp, debugger) {
                for (x, rest) in recurse(|| arg.go(rest, debugger)) {
                    out.push((f(x), rest));
                }
            }
            out
        })
    }
}

impl<'a, T: 'a> Parser<'a, Vec<T>> {
    /// Collect the items produced by this parser into any type implementing [`FromIterator`].
    ///
    /// This is commonly useful for turning a `Vec<char>` into a [`String`].
    pub fn collect<C: FromIterator<T> + 'a>(self) -> Parser<'a, C> {
        self.map(|items| items.into_iter().collect())
    }
}

// Greedily apply `parser` until it fails, keeping only its first candidate at every step. A step that consumes nothing
// ends the repetition, since repeating it would never stop.
fn repeat<'a, O: 'a>(
    parser: &Parser<'a, O>,
    mut items: Vec<O>,
    mut inp: &'a str,
    debugger: &mut dyn Debugger,
) -> (Vec<O>, &'a str) {
    while let Some((item, rest)) = parser.go(inp, debugger).into_iter().next() {
        items.push(item);
        let progressed = rest.len() < inp.len();
        inp = rest;
        if !progressed {
            break;
        }
    }
    (items, inp)
}

// Fold `(op, term)` pairs into `acc` until none match, taking the first pair that does at every step.
fn fold_left<'a, O: 'a, F: Fn(O, O) -> O + 'a>(
    term: &Parser<'a, O>,
    op: &Parser<'a, F>,
    mut acc: O,
    mut inp: &'a str,
    debugger: &mut dyn Debugger,
) -> (O, &'a str) {
    loop {
        let step = op.go(inp, debugger).into_iter().find_map(|(f, rest)| {
            term.go(rest, debugger)
                .into_iter()
                .next()
                .map(|(rhs, rest)| (f, rhs, rest))
        });
        let (f, rhs, rest) = match step {
            Some(step) => step,
            None => break,
        };
        acc = f(acc, rhs);
        let progressed = rest.len() < inp.len();
        inp = rest;
        if !progressed {
            break;
        }
    }
    (acc, inp)
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    fn digit<'a>() -> Parser<'a, u32> {
        satisfy(|c: &char| c.is_ascii_digit()).map(|c| c.to_digit(10).unwrap())
    }

    fn add(a: u32, b: u32) -> u32 {
        a + b
    }

    fn sub(a: i64, b: i64) -> i64 {
        a - b
    }

    #[test]
    fn map_preserves_candidates() {
        let p = literal("a").union(literal("ab")).map(str::len);
        assert_eq!(p.run("abc"), vec![(1, "bc"), (2, "c")]);
    }

    #[test]
    fn map_pure() {
        let p = pure(10).map(|n: i32| f64::from(n + 5));
        assert_eq!(p.run("test"), vec![(15.0, "test")]);
    }

    #[test]
    fn bind_concatenates_in_candidate_order() {
        let p = literal("a")
            .union(literal("ab"))
            .bind(|s| item().map(move |c| format!("{}{}", s, c)));
        assert_eq!(
            p.run("abc"),
            vec![("ab".to_string(), "c"), ("abc".to_string(), "")]
        );
    }

    #[test]
    fn bind_into_failure() {
        let p = item().bind(|_| empty::<char>());
        assert!(p.run("abc").is_empty());
    }

    #[test]
    fn union_keeps_both_sides_in_order() {
        let p = literal("x").union(literal("x"));
        assert_eq!(p.run("x"), vec![("x", ""), ("x", "")]);
        assert!(literal("x").union(literal("y")).run("z").is_empty());
    }

    #[test]
    fn committed_falls_back_to_the_right() {
        let p = literal("a").committed(literal("b").union(literal("b")));
        assert_eq!(p.run("b"), vec![("b", "")]);
        assert!(p.run("c").is_empty());
    }

    #[test]
    fn or_else_keeps_left_ambiguity() {
        let p = literal("a").union(literal("a")).or_else(literal("a"));
        assert_eq!(p.run("a").len(), 2);
    }

    #[test]
    fn filter_by_result() {
        let even = digit().filter(|n| n % 2 == 0);
        assert_eq!(even.run("4"), vec![(4, "")]);
        assert!(even.run("3").is_empty());
    }

    #[test]
    fn optional_never_fails() {
        let p = literal("x").optional();
        assert_eq!(p.run("xy"), vec![(Some("x"), "y"), (None, "xy")]);
        assert_eq!(p.run(""), vec![(None, "")]);
    }

    #[test]
    fn many_is_greedy_and_unique() {
        let p = literal("a").many();
        assert_eq!(p.run("aaab"), vec![(vec!["a", "a", "a"], "b")]);
        assert_eq!(p.run(""), vec![(vec![], "")]);
    }

    #[test]
    fn many_takes_the_first_candidate_each_step() {
        let p = literal("a").union(literal("aa")).many();
        assert_eq!(p.run("aaa"), vec![(vec!["a", "a", "a"], "")]);
    }

    #[test]
    fn many_stops_on_zero_width_match() {
        let p = pure(1).many();
        assert_eq!(p.run("abc"), vec![(vec![1], "abc")]);
        let p = whitespace().many();
        assert_eq!(p.run("  x"), vec![(vec!["  ", ""], "x")]);
    }

    #[test]
    fn some_is_ambiguous_only_in_its_first_element() {
        let p = literal("a").union(literal("aa")).some();
        assert_eq!(
            p.run("aaa"),
            vec![(vec!["a", "a", "a"], ""), (vec!["aa", "a"], "")]
        );
    }

    #[test]
    fn some_requires_one() {
        assert!(literal("a").some().run("b").is_empty());
        assert_eq!(literal("a").some().run("ab"), vec![(vec!["a"], "b")]);
    }

    #[test]
    fn separated_by_at_least_one_digits() {
        let p = digit().separated_by_at_least_one(literal(","));
        assert_eq!(p.run("1,2,3"), vec![(vec![1, 2, 3], "")]);
        assert_eq!(p.run("7"), vec![(vec![7], "")]);
        assert!(p.run("").is_empty());
    }

    #[test]
    fn separated_by_allows_empty() {
        let p = digit().separated_by(literal(";"));
        assert_eq!(p.run("x"), vec![(vec![], "x")]);
        assert_eq!(p.run("1;2x"), vec![(vec![1, 2], "x")]);
    }

    #[test]
    fn separated_by_leaves_dangling_separator() {
        let p = digit().separated_by(literal(","));
        assert_eq!(p.run("1,2,"), vec![(vec![1, 2], ",")]);
    }

    #[test]
    fn chain_single_term() {
        let p = digit().chain(literal("+").to(add as fn(u32, u32) -> u32));
        assert_eq!(p.run("5"), vec![(5, "")]);
        assert_eq!(p.run("5+"), vec![(5, "+")]);
    }

    #[test]
    fn chain_is_left_associative() {
        let int = digit().map(i64::from);
        let p = int.chain(literal("-").to(sub as fn(i64, i64) -> i64));
        assert_eq!(p.run("9-3-2"), vec![(4, "")]);
    }

    #[test]
    fn chain_folds_in_order() {
        let item = satisfy(|c: &char| c.is_alphabetic()).map(|c| c.to_string());
        let join = literal("+").to(|a: String, b: String| format!("({}+{})", a, b));
        let p = item.chain(join);
        assert_eq!(p.run("a+b+c"), vec![("((a+b)+c)".to_string(), "")]);
    }

    #[test]
    fn chain_tries_later_operator_candidates() {
        // The first operator candidate is not followed by a term, the second one is.
        let op = literal("+")
            .union(literal("+-"))
            .to(add as fn(u32, u32) -> u32);
        let p = digit().chain(op);
        assert_eq!(p.run("1+-2"), vec![(3, "")]);
    }

    #[test]
    fn chain_keeps_first_term_ambiguity() {
        let term = digit().union(digit().then_ignore(literal("'")));
        let p = term.chain(literal("+").to(add as fn(u32, u32) -> u32));
        assert_eq!(p.run("1'+2"), vec![(1, "'+2"), (3, "")]);
    }

    #[test]
    fn chain_seeded_falls_back_to_seed() {
        let p = digit().chain_seeded(literal("+").to(add as fn(u32, u32) -> u32), 0);
        assert_eq!(p.run("x"), vec![(0, "x")]);
        assert_eq!(p.run("1+1"), vec![(2, "")]);
    }

    #[test]
    fn then_pairs_results() {
        let p = item().then(item());
        assert_eq!(p.run("abc"), vec![(('a', 'b'), "c")]);
        assert!(p.run("a").is_empty());
    }

    #[test]
    fn ignore_then_keeps_the_right() {
        let p = literal("-").ignore_then(digit());
        assert_eq!(p.run("-3"), vec![(3, "")]);
    }

    #[test]
    fn to_and_ignored() {
        assert_eq!(literal("yes").to(true).run("yes"), vec![(true, "")]);
        assert_eq!(literal("x").ignored().run("xy"), vec![((), "y")]);
    }

    #[test]
    fn ap_applies_parsed_functions() {
        let f = pure(|n: u32| n * 10);
        assert_eq!(f.ap(digit()).run("4"), vec![(40, "")]);
    }

    #[test]
    fn collect_into_string() {
        let p = item().many().collect::<String>();
        assert_eq!(p.run("abc"), vec![("abc".to_string(), "")]);
    }
}
