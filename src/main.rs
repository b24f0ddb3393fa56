use clap::Parser;
use evaluator::{
    format_result, report_eval_error, AngleMode, CalculatorSession, ErrorKind, EvalError,
};
use lexer::token::Token;
use logos::Logos;
use std::io::{self, BufRead, Write};
use std::process;

#[derive(Parser, Debug)]
#[command(name = "scicalc")]
#[command(version, about = "Scientific calculator expression evaluator")]
struct Cli {
    /// Expressions to evaluate in order. Reads lines from stdin when omitted.
    exprs: Vec<String>,

    /// Angle mode for trigonometric functions (deg or rad)
    #[arg(short, long, env = "SCICALC_ANGLE", default_value = "deg")]
    angle: AngleMode,

    /// Render failures as annotated reports on stderr
    #[arg(long)]
    explain: bool,

    /// Print the token stream instead of evaluating
    #[arg(long, conflicts_with = "ast")]
    tokens: bool,

    /// Print the parsed expression tree instead of evaluating
    #[arg(long)]
    ast: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let mut session = CalculatorSession::new(cli.angle);
    let mut last_failure: Option<EvalError> = None;

    if cli.exprs.is_empty() {
        if let Err(e) = repl(&cli, &mut session, &mut last_failure) {
            eprintln!("scicalc: {}", e);
            process::exit(1);
        }
    } else {
        for input in &cli.exprs {
            if let Err(err) = run_line(&cli, &mut session, input) {
                last_failure = Some(err);
            }
        }
    }

    if let Some(err) = last_failure {
        process::exit(err.exit_code());
    }
}

fn repl(
    cli: &Cli,
    session: &mut CalculatorSession,
    last_failure: &mut Option<EvalError>,
) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();

        match line {
            ":quit" | ":q" => break,
            ":deg" => {
                session.set_angle_mode(AngleMode::Degrees);
                println!("deg");
            }
            ":rad" => {
                session.set_angle_mode(AngleMode::Radians);
                println!("rad");
            }
            ":ans" => println!("{}", format_result(session.last_answer())),
            ":history" => {
                for entry in session.history() {
                    println!("{} = {}", entry.expression, format_result(entry.result));
                }
            }
            _ => {
                if let Err(err) = run_line(cli, session, line) {
                    *last_failure = Some(err);
                }
            }
        }
        stdout.flush()?;
    }

    Ok(())
}

/// Handle one expression according to the output flags
fn run_line(cli: &Cli, session: &mut CalculatorSession, input: &str) -> Result<(), EvalError> {
    let result = if cli.tokens {
        print_tokens(input)
    } else if cli.ast {
        print_ast(input, cli.explain)
    } else {
        match session.submit(input) {
            Ok(value) => {
                println!("{}", format_result(value));
                Ok(())
            }
            Err(err) => {
                println!("Error");
                Err(err)
            }
        }
    };

    if let Err(err) = &result {
        log::info!("'{}' failed: {}", input, err);
        // --ast already drew the parser's own report for syntax errors
        let reported = cli.ast && err.kind() == ErrorKind::Syntax;
        if cli.explain && !reported {
            explain(input, err);
        }
    }
    result
}

fn print_tokens(input: &str) -> Result<(), EvalError> {
    let prepared = evaluator::prepare(input)?;

    for (token, span) in Token::lexer(&prepared).spanned() {
        match token {
            Ok(token) => println!("{:?} @ {:?}", token, span),
            Err(_) => println!("<invalid> @ {:?}", span),
        }
    }
    Ok(())
}

fn print_ast(input: &str, explain: bool) -> Result<(), EvalError> {
    let prepared = evaluator::prepare(input)?;
    if prepared.trim().is_empty() {
        println!("0");
        return Ok(());
    }

    let tokens = evaluator::tokenize(&prepared)?;
    match parser::parse(tokens, prepared.len()) {
        Ok(expr) => {
            println!("{}", expr);
            Ok(())
        }
        Err(errors) => {
            if explain {
                if let Err(e) = parser::error::report_errors("<input>", &prepared, &errors) {
                    eprintln!("scicalc: failed to render report: {}", e);
                }
            }
            Err(EvalError::from_parse_errors(errors))
        }
    }
}

// Spans refer to the normalized text, so the report is drawn against it
fn explain(input: &str, err: &EvalError) {
    let source = evaluator::prepare(input).unwrap_or_else(|_| lexer::normalize(input));

    if let Err(e) = report_eval_error("<input>", &source, err) {
        eprintln!("scicalc: failed to render report: {}", e);
    }
}
