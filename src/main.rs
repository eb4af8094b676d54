use std::{fs, io, process::ExitCode};

use arithmo::{evaluate, repl};
use clap::Parser;

/// arithmo evaluates arithmetic expressions over integers with `+`, `-`, `*`,
/// `/` and parentheses.
///
/// Without an expression it starts an interactive prompt.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the argument as a file and evaluate each of its lines.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// The expression to evaluate, or the path of the file with `--file`.
    contents: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match (args.contents, args.file) {
        (Some(path), true) => run_file(&path),
        (Some(expression), false) => match evaluate(&expression) {
            Ok(value) => {
                println!("{value}");
                ExitCode::SUCCESS
            },
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        },
        (None, _) => {
            let stdin = io::stdin();
            if let Err(e) = repl::run(stdin.lock(), io::stdout().lock()) {
                eprintln!("I/O error: {e}");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        },
    }
}

/// Evaluates every non-blank line of the file at `path`.
fn run_file(path: &str) -> ExitCode {
    let Ok(script) = fs::read_to_string(path) else {
        eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
        return ExitCode::FAILURE;
    };

    let mut failed = false;
    for (number, line) in script.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match evaluate(line) {
            Ok(value) => println!("{value}"),
            Err(e) => {
                eprintln!("Line {}: {e}", number + 1);
                failed = true;
            },
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}
