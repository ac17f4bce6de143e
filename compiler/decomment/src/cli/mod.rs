//! Command-line parsing.
//!
//! Arguments are matched by hand: the surface is small and every flag is
//! either a switch or `--name=value`, with `-o <path>` the only lookahead.

use std::path::PathBuf;

use decomment_diagnostic::emitter::ColorMode;

use crate::config::PreprocessConfig;
use crate::error::DriverError;

/// How diagnostics are rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable, with source snippets.
    #[default]
    Terminal,
    /// A JSON array on stderr.
    Json,
}

/// Options shared by every command that reports diagnostics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReportOptions {
    pub format: OutputFormat,
    pub color: ColorMode,
}

/// Options for `decomment strip`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StripOptions {
    /// Input path, or `-` for stdin.
    pub input: String,
    /// Output path; stdout when absent.
    pub output: Option<PathBuf>,
    pub config: PreprocessConfig,
    pub report: ReportOptions,
    /// Suppress the statistics line.
    pub quiet: bool,
}

/// Options for `decomment check`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckOptions {
    pub inputs: Vec<String>,
    pub report: ReportOptions,
}

/// A parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Strip(StripOptions),
    Check(CheckOptions),
    Explain(String),
    Help,
    Version,
}

/// Parse `args` (without the program name).
pub fn parse_args(args: &[String]) -> Result<Command, DriverError> {
    let Some((command, rest)) = args.split_first() else {
        return Ok(Command::Help);
    };

    match command.as_str() {
        "strip" => parse_strip(rest).map(Command::Strip),
        "check" => parse_check(rest).map(Command::Check),
        "--explain" | "explain" => match rest {
            [code] => Ok(Command::Explain(code.clone())),
            _ => Err(usage("usage: decomment --explain <ERROR_CODE>")),
        },
        "help" | "--help" | "-h" => Ok(Command::Help),
        "version" | "--version" | "-V" => Ok(Command::Version),
        other => Err(usage(format!("unknown command: {other}"))),
    }
}

fn parse_strip(args: &[String]) -> Result<StripOptions, DriverError> {
    let mut input = None;
    let mut output = None;
    let mut raw = false;
    let mut keep_blank_lines = false;
    let mut report = ReportOptions::default();
    let mut quiet = false;

    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        i += 1;
        if parse_report_flag(arg, &mut report)? {
            continue;
        }
        match arg {
            "-o" | "--output" => {
                let Some(path) = args.get(i) else {
                    return Err(usage(format!("{arg} requires a path")));
                };
                output = Some(PathBuf::from(path));
                i += 1;
            }
            "--raw" => raw = true,
            "--keep-blank-lines" => keep_blank_lines = true,
            "-q" | "--quiet" => quiet = true,
            _ if arg.starts_with('-') && arg != "-" => {
                return Err(usage(format!("unknown option for strip: {arg}")));
            }
            _ => set_once(&mut input, arg)?,
        }
    }

    let Some(input) = input else {
        return Err(usage("usage: decomment strip <file|-> [options]"));
    };
    let config = if raw {
        if keep_blank_lines {
            return Err(usage("--keep-blank-lines cannot be combined with --raw"));
        }
        PreprocessConfig::raw()
    } else {
        PreprocessConfig {
            keep_blank_lines,
            ..PreprocessConfig::default()
        }
    };

    Ok(StripOptions {
        input,
        output,
        config,
        report,
        quiet,
    })
}

fn parse_check(args: &[String]) -> Result<CheckOptions, DriverError> {
    let mut inputs = Vec::new();
    let mut report = ReportOptions::default();

    for arg in args {
        if parse_report_flag(arg, &mut report)? {
            continue;
        }
        if arg.starts_with('-') && arg != "-" {
            return Err(usage(format!("unknown option for check: {arg}")));
        }
        inputs.push(arg.clone());
    }

    if inputs.is_empty() {
        return Err(usage("usage: decomment check <files...> [options]"));
    }
    Ok(CheckOptions { inputs, report })
}

/// Apply `--format=` or `--color=`. Returns `false` for any other argument.
fn parse_report_flag(arg: &str, report: &mut ReportOptions) -> Result<bool, DriverError> {
    if let Some(format) = arg.strip_prefix("--format=") {
        report.format = match format {
            "terminal" | "text" => OutputFormat::Terminal,
            "json" => OutputFormat::Json,
            _ => return Err(usage(format!("unknown format: {format}"))),
        };
        return Ok(true);
    }
    if let Some(color) = arg.strip_prefix("--color=") {
        report.color = match color {
            "auto" => ColorMode::Auto,
            "always" => ColorMode::Always,
            "never" => ColorMode::Never,
            _ => return Err(usage(format!("unknown color mode: {color}"))),
        };
        return Ok(true);
    }
    Ok(false)
}

fn set_once(slot: &mut Option<String>, arg: &str) -> Result<(), DriverError> {
    if slot.is_some() {
        return Err(usage(format!("unexpected extra input: {arg}")));
    }
    *slot = Some(arg.to_string());
    Ok(())
}

fn usage(message: impl Into<String>) -> DriverError {
    DriverError::Usage(message.into())
}
