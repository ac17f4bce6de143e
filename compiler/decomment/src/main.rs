//! decomment CLI
//!
//! Literal-aware comment stripping for C/C++ sources.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use decomment::cli::{parse_args, Command};
use decomment::commands::{check_files, explain_error, strip_file, Outcome};
use decomment::{init_tracing, DriverError};
use decomment_diagnostic::emitter::ColorMode;

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match parse_args(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!();
            eprintln!("Run `decomment help` for usage.");
            return ExitCode::from(e.exit_code());
        }
    };

    match run(command) {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(command: Command) -> Result<Outcome, DriverError> {
    let stdout = io::stdout();
    let stderr = io::stderr();
    let color = |mode: ColorMode| {
        if mode.should_use_colors(stderr.is_terminal()) {
            ColorMode::Always
        } else {
            ColorMode::Never
        }
    };

    match command {
        Command::Strip(mut options) => {
            options.report.color = color(options.report.color);
            strip_file(&options, &mut stdout.lock(), &mut stderr.lock())
        }
        Command::Check(mut options) => {
            options.report.color = color(options.report.color);
            check_files(&options, &mut stdout.lock(), &mut stderr.lock())
        }
        Command::Explain(code) => {
            explain_error(&code, &mut stdout.lock())?;
            Ok(Outcome::Clean)
        }
        Command::Help => {
            print_usage();
            Ok(Outcome::Clean)
        }
        Command::Version => {
            println!("decomment {}", env!("CARGO_PKG_VERSION"));
            Ok(Outcome::Clean)
        }
    }
}

fn print_usage() {
    println!("decomment: strip comments from C/C++ sources");
    println!();
    println!("Usage: decomment <command> [options]");
    println!();
    println!("Commands:");
    println!("  strip <file|->       Remove comments and tidy whitespace");
    println!("  check <files...>     Validate files without writing output");
    println!("  --explain <code>     Explain an error code (e.g., E0003)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Strip options:");
    println!("  -o, --output <path>  Write cleaned output to a file (default: stdout)");
    println!("  --raw                Only remove comments; keep whitespace and line endings");
    println!("  --keep-blank-lines   Tidy whitespace but keep empty lines");
    println!("  -q, --quiet          Do not print removal statistics");
    println!();
    println!("Report options (strip and check):");
    println!("  --format=<fmt>       Diagnostics format: terminal (default), json");
    println!("  --color=<when>       Colors: auto (default), always, never");
    println!();
    println!("Exit status:");
    println!("  0  no errors");
    println!("  1  errors found in the input (no output written)");
    println!("  2  usage or I/O error");
    println!();
    println!("Examples:");
    println!("  decomment strip main.cpp -o main.clean.cpp");
    println!("  cat main.cpp | decomment strip - --raw");
    println!("  decomment check src/*.cpp --format=json");
    println!("  decomment --explain E0004");
    println!();
    println!("Set RUST_LOG=decomment=debug to trace the pipeline.");
}
