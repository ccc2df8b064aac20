use std::{fs, io, process::ExitCode};

use clap::Parser;
use matlang::interpreter::{
    checker::TypeChecker, evaluator::core::Interpreter, parser::parse_source,
    printer::render_tree,
};
use tracing::{Level, debug};

/// matlang runs programs written in a small MATLAB-like matrix language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells matlang to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Prints the syntax tree of the program before running it.
    #[arg(long)]
    ast: bool,

    /// Skips the static type checker.
    #[arg(long, conflicts_with = "check_only")]
    no_check: bool,

    /// Runs the type checker and stops without executing the program.
    #[arg(long)]
    check_only: bool,

    /// Raises the log level (`-v` for debug, `-vv` for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    contents: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level)
                             .with_writer(io::stderr)
                             .init();

    let script = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(script) => script,
            Err(_) => {
                eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                          &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    let outcome = parse_source(&script);
    if outcome.had_errors() {
        for error in &outcome.errors {
            eprintln!("{error}");
        }
        return ExitCode::FAILURE;
    }

    if args.ast {
        print!("{}", render_tree(&outcome.program));
    }

    if !args.no_check {
        let diagnostics = TypeChecker::new().check(&outcome.program);
        for diagnostic in &diagnostics {
            eprintln!("{diagnostic}");
        }
        if args.check_only {
            return if diagnostics.is_empty() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            };
        }
    }

    let mut interpreter = Interpreter::new(io::stdout().lock());
    match interpreter.run(&outcome.program) {
        Ok(returned) => {
            if let Some(value) = returned {
                debug!(%value, "program returned a value");
            }
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
