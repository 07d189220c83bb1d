//! EBNF notes CLI - Command line interface
//!
//! `ebnf demo` prints every example, `ebnf check` evaluates one rule.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use ebnf_api::{evaluate, EbnfError, Rule};
use ebnf_config::{LogFormat, OutputFormat};
use tracing::{debug, info};

mod config;
mod demo;
mod logging;
mod platform;

use crate::config::{Overrides, Settings};
use crate::platform::{render_outcome, render_report, render_rules};

#[derive(Parser)]
#[command(
    name = "ebnf",
    about = "EBNF notation examples - grammar rules as string recognizers",
    version
)]
struct Cli {
    /// Configuration file path (default: ./ebnf.json when present)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level: silent, error, warn, info, debug, trace
    #[arg(long, global = true, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Log output format
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormatArg>,

    /// Also append logs to this file
    #[arg(long, global = true, value_name = "FILE")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run every example on its fixed samples (default)
    Demo,
    /// Evaluate one rule on an input
    Check {
        /// Rule name, see `ebnf rules`
        rule: String,
        /// Input text
        input: String,
        /// Result format
        #[arg(long, value_enum)]
        format: Option<OutputFormatArg>,
    },
    /// List rule names and their productions
    Rules,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormatArg {
    Text,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Text => OutputFormat::Text,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let check_format = match &cli.command {
        Some(Command::Check { format, .. }) => format.map(OutputFormat::from),
        _ => None,
    };
    let overrides = Overrides {
        log_level: cli.log_level,
        log_format: cli.log_format.map(LogFormat::from),
        log_file: cli.log_file,
        format: check_format,
    };

    let settings = match config::load(cli.config.as_deref())
        .and_then(|file| Settings::resolve(file, overrides))
    {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = logging::init(&settings.log, settings.log_format, settings.log_file.as_deref())
    {
        eprintln!("Error: cannot open log file: {}", e);
        process::exit(1);
    }
    debug!(target: "ebnf::cli", ?settings, "configuration loaded");

    let code = match cli.command.unwrap_or(Command::Demo) {
        Command::Demo => handle_demo(&settings),
        Command::Check { rule, input, .. } => handle_check(&rule, &input, settings.format),
        Command::Rules => {
            println!("{}", render_rules());
            0
        }
    };
    process::exit(code);
}

fn handle_demo(settings: &Settings) -> i32 {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match demo::run(&mut out, &settings.samples).and_then(|()| out.flush()) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn handle_check(rule: &str, input: &str, format: OutputFormat) -> i32 {
    let result = rule
        .parse::<Rule>()
        .and_then(|rule| evaluate(rule, input).map(|outcome| (rule, outcome)));

    match result {
        Ok((rule, outcome)) => {
            info!(target: "ebnf::cli", %rule, input, "check passed");
            match render_outcome(rule, input, &outcome, format) {
                Ok(text) => {
                    println!("{text}");
                    0
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    1
                }
            }
        }
        Err(e) => {
            report_error(&e, format);
            1
        }
    }
}

fn report_error(e: &EbnfError, format: OutputFormat) {
    match render_report(&e.to_report(), format) {
        Ok(text) => eprintln!("{text}"),
        Err(_) => eprintln!("Error: {}", e),
    }
}
