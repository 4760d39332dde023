use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use reckon::{
    Number,
    interpreter::{evaluator::core::evaluate, lexer::tokenize},
    parse,
};
use tracing_subscriber::filter::LevelFilter;

/// reckon evaluates integer arithmetic expressions with `+`, `-`, `*`, `/`
/// and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Reject anything left over after a complete expression.
    #[arg(short, long)]
    strict: bool,

    /// Print the token stream instead of evaluating.
    #[arg(short, long)]
    tokens: bool,

    /// Print the parsed expression, fully parenthesized, before the result.
    #[arg(short, long)]
    ast: bool,

    /// Show more in logs, may be provided multiple times.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// The expression to evaluate. Read from stdin when omitted.
    expression: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level_filter = match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(log_level_filter)
                             .with_ansi(false)
                             .with_target(false)
                             .with_writer(io::stderr)
                             .init();

    let source = match args.expression.clone() {
        Some(expression) => expression,
        None => read_expression().context("reading expression from stdin")?,
    };

    if args.tokens {
        match tokenize(&source) {
            Ok(tokens) => tokens.iter().for_each(|token| println!("{token:?}")),
            Err(e) => println!("Error: {e}"),
        }
        return Ok(());
    }

    match run(&args, &source) {
        Ok(value) => println!("Result: {value}"),
        Err(e) => println!("Error: {e}"),
    }

    Ok(())
}

fn run(args: &Args, source: &str) -> Result<Number, reckon::Error> {
    let expr = parse(source, args.strict)?;
    if args.ast {
        println!("{expr}");
    }
    Ok(evaluate(&expr)?)
}

fn read_expression() -> io::Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "Enter an expression: ")?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}
