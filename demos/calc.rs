//! A calculator with variables.
//!
//! Run it with `cargo run --example calc -- "let x = 2; (x + 1) * -x"`, adding `--trace` before the expression to see
//! which parsers ran on what input.

use parsekit::prelude::*;

#[derive(Clone, Copy, Debug)]
enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

#[derive(Clone, Debug)]
enum Expr<'src> {
    Num(f64),
    Var(&'src str),

    Neg(Box<Expr<'src>>),
    Binary(BinOp, Box<Expr<'src>>, Box<Expr<'src>>),

    Let {
        name: &'src str,
        rhs: Box<Expr<'src>>,
        then: Box<Expr<'src>>,
    },
}

fn parser<'src>() -> Parser<'src, Expr<'src>> {
    let ident = pattern("[a-zA-Z_][a-zA-Z0-9_]*")
        .filter(|name| *name != "let")
        .token();

    let expr = recursive(|expr| {
        let num = pattern(r"[0-9]+(\.[0-9]+)?")
            .map(|s| Expr::Num(s.parse().unwrap()))
            .token();

        let atom = num
            .or_else(expr.delimited_by(symbol("("), symbol(")")))
            .or_else(ident.clone().map(Expr::Var))
            .debug("atom");

        let unary = recursive(|unary| {
            symbol("-")
                .ignore_then(unary)
                .map(|rhs| Expr::Neg(Box::new(rhs)))
                .or_else(atom)
        });

        let op = |text: &'static str, kind: BinOp| {
            symbol(text).to(move |lhs, rhs| Expr::Binary(kind, Box::new(lhs), Box::new(rhs)))
        };

        let product = unary.chain(op("*", BinOp::Mul).union(op("/", BinOp::Div)));
        product.chain(op("+", BinOp::Add).union(op("-", BinOp::Sub)))
    });

    recursive(|decl| {
        let binding = pattern(r"let\b")
            .token()
            .ignore_then(ident)
            .then_ignore(symbol("="))
            .then(expr.clone())
            .then_ignore(symbol(";"))
            .then(decl)
            .map(|((name, rhs), then)| Expr::Let {
                name,
                rhs: Box::new(rhs),
                then: Box::new(then),
            });

        binding.or_else(expr).debug("decl")
    })
}

fn eval<'src>(expr: &Expr<'src>, vars: &mut Vec<(&'src str, f64)>) -> Result<f64, String> {
    match expr {
        Expr::Num(x) => Ok(*x),
        Expr::Var(name) => vars
            .iter()
            .rev()
            .find(|(var, _)| var == name)
            .map(|(_, val)| *val)
            .ok_or_else(|| format!("Cannot find variable `{}` in scope", name)),
        Expr::Neg(a) => Ok(-eval(a, vars)?),
        Expr::Binary(op, a, b) => {
            let (a, b) = (eval(a, vars)?, eval(b, vars)?);
            Ok(match op {
                BinOp::Add => a + b,
                BinOp::Sub => a - b,
                BinOp::Mul => a * b,
                BinOp::Div => a / b,
            })
        }
        Expr::Let { name, rhs, then } => {
            let rhs = eval(rhs, vars)?;
            vars.push((*name, rhs));
            let output = eval(then, vars);
            vars.pop();
            output
        }
    }
}

fn main() {
    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let trace = args.first().map_or(false, |arg| arg == "--trace");
    if trace {
        args.remove(0);
    }

    let usage = "Run `cargo run --example calc -- [--trace] <expression>`";
    if args.is_empty() {
        println!("{}", usage);
        return;
    }
    let src = args.join(" ");

    let parser = parser();
    if trace {
        parser.apply_verbose(&src);
    }

    match parser.parse(&src) {
        Ok(ast) => match eval(&ast, &mut Vec::new()) {
            Ok(output) => println!("{}", output),
            Err(eval_err) => println!("Evaluation error: {}", eval_err),
        },
        Err(parse_err) => println!("Parse error: {}", parse_err),
    }
}
