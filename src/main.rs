use bfi::{evaluate, EofPolicy, EvalError, ProgramSource, RunOptions};
use clap::Parser;
use std::env;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

/// A naive Brainfuck interpreter.
///
/// Runs PROGRAM (or CODE given with --eval) on an unbounded tape, reading
/// `,` input from stdin and writing `.` output to stdout. Characters
/// outside `><+-.,[]` are comments.
#[derive(Parser, Debug)]
#[command(name = "bfi", version)]
struct Cli {
    /// Path to the Brainfuck program file
    #[arg(
        value_name = "PROGRAM",
        required_unless_present = "eval",
        conflicts_with = "eval"
    )]
    program: Option<PathBuf>,

    /// Run CODE from the command line instead of a program file
    #[arg(short = 'e', long = "eval", value_name = "CODE")]
    eval: Option<String>,

    /// Input a zero on EOF (default behavior)
    #[arg(short = 'z', long = "eof-zero", group = "eof")]
    eof_zero: bool,

    /// Input a negative one (0xFF) on EOF
    #[arg(short = 'o', long = "eof-neg-one", group = "eof")]
    eof_neg_one: bool,

    /// Do nothing on EOF (preserve the cell's existing value)
    #[arg(short = 'n', long = "eof-noop", group = "eof")]
    eof_noop: bool,

    /// Count executed instructions and report the total after the run
    #[arg(short = 'b', long = "benchmark")]
    benchmark: bool,
}

fn eof_policy(cli: &Cli) -> EofPolicy {
    match (cli.eof_zero, cli.eof_neg_one, cli.eof_noop) {
        (_, true, _) => EofPolicy::NegOne,
        (_, _, true) => EofPolicy::NoOp,
        // -z or no flag at all; zero is the default either way.
        _ => EofPolicy::Zero,
    }
}

fn run_with_args(program_name: &str, cli: Cli) -> i32 {
    let options = RunOptions {
        eof: eof_policy(&cli),
        benchmark: cli.benchmark,
    };

    let mut source = match &cli.eval {
        Some(code) => ProgramSource::from_code(code),
        None => {
            // clap guarantees a path when --eval is absent.
            let path = cli.program.as_deref().unwrap();
            match File::open(path) {
                Ok(file) => ProgramSource::from_file(file),
                Err(e) => {
                    eprintln!(
                        "{program_name}: error opening program file {}: {e}",
                        path.display()
                    );
                    let _ = io::stderr().flush();
                    return 1;
                }
            }
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    let result = evaluate(&mut source, &mut input, &mut output, options);
    let _ = output.flush();

    match result {
        Ok(count) => {
            if let Some(count) = count {
                eprintln!("executed {count} instructions");
            }
            0
        }
        Err(err @ (EvalError::UnmatchedOpenBracket | EvalError::UnmatchedCloseBracket)) => {
            eprintln!("{program_name}: error: {err}");
            1
        }
        Err(err) => {
            eprintln!("{program_name}: {err}");
            1
        }
    }
}

fn main() {
    // Pull the invoked name for diagnostic prefixes.
    let program_name = env::args().next().unwrap_or_else(|| String::from("bfi"));

    let cli = Cli::parse();
    let code = run_with_args(&program_name, cli);

    let _ = io::stdout().flush();
    let _ = io::stderr().flush();
    std::process::exit(code);
}
