use parsekit::prelude::*;
use test_case::test_case;

type BinOp = fn(i64, i64) -> i64;

fn add(a: i64, b: i64) -> i64 {
    a + b
}

fn sub(a: i64, b: i64) -> i64 {
    a - b
}

fn mul(a: i64, b: i64) -> i64 {
    a * b
}

fn div(a: i64, b: i64) -> i64 {
    a / b
}

fn number<'a>() -> Parser<'a, i64> {
    satisfy(|c: &char| c.is_ascii_digit())
        .some()
        .collect::<String>()
        .map(|s| s.parse::<i64>().unwrap())
        .token()
}

fn expr<'a>() -> Parser<'a, i64> {
    recursive(|expr| {
        let atom = number().union(expr.delimited_by(symbol("("), symbol(")")));
        let unary = symbol("-").ignore_then(atom.clone()).map(|n| -n).union(atom);
        let product = unary.chain(
            symbol("*")
                .to(mul as BinOp)
                .union(symbol("/").to(div as BinOp)),
        );
        product.chain(
            symbol("+")
                .to(add as BinOp)
                .union(symbol("-").to(sub as BinOp)),
        )
    })
}

#[test_case("( 42 )" ; "spaced")]
#[test_case("(42)" ; "tight")]
#[test_case("(  42)" ; "uneven")]
#[test_case("\n( 42 )\t" ; "surrounding whitespace")]
fn parenthesised_number(input: &str) {
    assert_eq!(
        number()
            .delimited_by(symbol("("), symbol(")"))
            .apply(input),
        vec![(42, "")]
    );
}

#[test]
fn comma_separated() {
    let list = number().separated_by_at_least_one(symbol(","));
    assert_eq!(list.parse("1,2, 3"), Ok(vec![1, 2, 3]));
}

#[test]
fn precedence() {
    assert_eq!(expr().parse("1 + 2 * 3"), Ok(7));
    assert_eq!(expr().parse("2 * (3 + 4)"), Ok(14));
    assert_eq!(expr().parse(" -(2 + 3) * 2 "), Ok(-10));
}

#[test]
fn left_associative() {
    assert_eq!(expr().parse("1 - 2 - 3"), Ok(-4));
    assert_eq!(expr().parse("10 - 4 - 3"), Ok(3));
    assert_eq!(expr().parse("100 / 10 / 5"), Ok(2));
}

#[test]
fn incomplete_expression() {
    assert_eq!(
        expr().parse("1 +"),
        Err(ParseError::Incomplete {
            remaining: "+".to_string()
        })
    );
    assert_eq!(
        expr().parse("(1 + 2"),
        Err(ParseError::NoMatch)
    );
    assert_eq!(expr().parse(""), Err(ParseError::NoMatch));
}

#[test]
fn deeply_nested() {
    let input = format!("{}1{}", "(".repeat(200), ")".repeat(200));
    assert_eq!(expr().parse(&input), Ok(1));
}

#[test]
fn negation_by_seeding() {
    let signed = number()
        .committed(pure(0))
        .chain(symbol("-").to(sub as BinOp));
    assert_eq!(signed.parse("-5"), Ok(-5));
    assert_eq!(signed.parse("7 - 2"), Ok(5));
}

#[cfg(feature = "sync")]
#[test]
fn shared_between_threads() {
    let inputs: Vec<String> = (1..=4).map(|n| format!("{} * ({} + 1)", n, n)).collect();
    let calc = expr();

    let results: Vec<_> = std::thread::scope(|s| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|input| {
                let calc = &calc;
                s.spawn(move || calc.parse(input))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(results, vec![Ok(2), Ok(6), Ok(12), Ok(20)]);
}
