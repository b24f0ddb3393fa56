use crate::ast::{BinaryOp, Constant, Expr, Function};
use chumsky::prelude::*;
use lexer::token::Token;
use std::ops::Range;

/// Parses a whole calculator expression; trailing tokens are an error.
pub fn parser() -> impl Parser<Token, Expr, Error = Simple<Token>> {
    expr_parser().then_ignore(end())
}

#[derive(Clone, Copy)]
enum Sign {
    Plus,
    Minus,
}

/// Resolve an identifier against the closed constant/function tables.
///
/// Failures are emitted rather than returned so the message survives
/// alternative merging; the placeholder value is never evaluated because
/// the parse as a whole reports the emitted error.
fn resolve_name(
    name: String,
    args: Option<Vec<Expr>>,
    span: Range<usize>,
    emit: &mut dyn FnMut(Simple<Token>),
) -> Expr {
    let placeholder = Expr::Number(f64::NAN);

    match args {
        Some(mut args) => {
            let Some(func) = Function::from_name(&name) else {
                emit(Simple::custom(span, format!("unknown function '{}'", name)));
                return placeholder;
            };
            if args.len() != 1 {
                emit(Simple::custom(
                    span,
                    format!("'{}' takes exactly one argument, found {}", name, args.len()),
                ));
                return placeholder;
            }
            Expr::call(func, args.remove(0))
        }
        None => match Constant::from_name(&name) {
            Some(constant) => Expr::Constant(constant),
            None => {
                let msg = if Function::from_name(&name).is_some() {
                    format!("'{}' is a function and needs an argument, e.g. {}(x)", name, name)
                } else {
                    format!("unknown name '{}'", name)
                };
                emit(Simple::custom(span, msg));
                placeholder
            }
        },
    }
}

fn apply_signs(signs: Vec<Sign>, expr: Expr) -> Expr {
    signs.into_iter().rev().fold(expr, |acc, sign| match sign {
        Sign::Minus => Expr::negate(acc),
        Sign::Plus => acc,
    })
}

pub fn expr_parser() -> impl Parser<Token, Expr, Error = Simple<Token>> {
    recursive(|expr| {
        let number = select! { Token::Number(s) => s }.validate(|s: String, span, emit| {
            match s.parse::<f64>() {
                Ok(n) => Expr::Number(n),
                Err(e) => {
                    emit(Simple::custom(span, format!("invalid number '{}': {}", s, e)));
                    Expr::Number(f64::NAN)
                }
            }
        });

        // 5% -> (5 / 100). Only a literal takes the percent suffix.
        let literal = number
            .then(just(Token::Percent).or_not())
            .map(|(n, percent)| match percent {
                Some(_) => Expr::binary(BinaryOp::Div, n, Expr::Number(100.0)),
                None => n,
            });

        let group = expr
            .clone()
            .delimited_by(just(Token::LParen), just(Token::RParen));

        let args = expr
            .clone()
            .separated_by(just(Token::Comma))
            .delimited_by(just(Token::LParen), just(Token::RParen));

        let named = select! { Token::Identifier(name) => name }
            .then(args.or_not())
            .validate(|(name, args), span, emit| resolve_name(name, args, span, emit));

        // The flag says whether a factorial suffix may follow
        let core = literal
            .map(|e| (e, true))
            .or(group.map(|e| (e, true)))
            .or(named.map(|e| (e, false)))
            .boxed();

        let sign = just(Token::Minus)
            .to(Sign::Minus)
            .or(just(Token::Plus).to(Sign::Plus));

        // signs core !* (^ factor)?
        //
        // Signs written directly before a factorial operand belong to the
        // operand (-1! is fact(-1)); otherwise they bind looser than ^
        // (-2^2 is -(2^2)). ^ is right associative through the recursion.
        let factor = recursive(|factor| {
            sign.repeated()
                .then(core.clone())
                .then(just(Token::Bang).repeated())
                .then(just(Token::Caret).ignore_then(factor).or_not())
                .validate(|(((signs, (base, factorial_ok)), bangs), exponent), span, emit| {
                    if bangs.is_empty() {
                        let body = match exponent {
                            Some(exp) => Expr::binary(BinaryOp::Pow, base, exp),
                            None => base,
                        };
                        return apply_signs(signs, body);
                    }

                    if !factorial_ok {
                        emit(Simple::custom(
                            span,
                            "'!' applies only to a number or a parenthesized group",
                        ));
                    }

                    let operand = apply_signs(signs, base);
                    let body = bangs
                        .iter()
                        .fold(operand, |acc, _| Expr::call(Function::Fact, acc));
                    match exponent {
                        Some(exp) => Expr::binary(BinaryOp::Pow, body, exp),
                        None => body,
                    }
                })
        })
        .boxed();

        let product = factor
            .clone()
            .then(
                just(Token::Star)
                    .to(BinaryOp::Mul)
                    .or(just(Token::Slash).to(BinaryOp::Div))
                    .then(factor)
                    .repeated(),
            )
            .foldl(|lhs, (op, rhs)| Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            })
            .boxed();

        let sum = product
            .clone()
            .then(
                just(Token::Plus)
                    .to(BinaryOp::Add)
                    .or(just(Token::Minus).to(BinaryOp::Sub))
                    .then(product)
                    .repeated(),
            )
            .foldl(|lhs, (op, rhs)| Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            });

        sum.boxed()
    })
}
