use parsekit::prelude::*;

fn words<'a>() -> Parser<'a, Vec<&'a str>> {
    pattern("[a-z]+").token().many()
}

#[test]
fn grammar_built_per_input() {
    for n in 0..5 {
        let line = format!("{} end", "word ".repeat(n));
        let out = words().parse(&line);
        assert_eq!(out.map(|ws| ws.len()), Ok(n + 1));
    }
}

#[test]
fn one_parser_many_inputs() {
    let lines: Vec<String> = (0..5).map(|n| "ab ".repeat(n)).collect();
    let words = words();

    for (n, line) in lines.iter().enumerate() {
        assert_eq!(words.parse(line), Ok(vec!["ab"; n]));
    }
    // Reusing the same value gives the same result again.
    assert_eq!(words.parse(&lines[2]), words.parse(&lines[2]));
}

#[test]
fn clone_reused_on_borrowed_buffer() {
    let buffer = String::from("alpha beta\ngamma\n\ndelta epsilon zeta");
    let words = words();

    let counts: Vec<_> = buffer
        .lines()
        .map(|line| words.clone().parse(line).map(|ws| ws.len()))
        .collect();
    assert_eq!(counts, vec![Ok(2), Ok(1), Ok(0), Ok(3)]);
}
