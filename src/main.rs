//! Purpose: `marshalite` CLI entry point for the process-per-test-case harness.
//! Role: Binary crate root; parses args, runs one case, emits the envelope on stdout.
//! Invariants: The envelope is the only stdout payload of `run`; diagnostics go
//! to stderr (JSON when stderr is not a terminal).
//! Invariants: A completed envelope exits 0 even when the routine failed;
//! non-zero exits happen only before any JSON work begins.
//! Invariants: Process exit code is derived from `api::to_exit_code`.
#![allow(clippy::result_large_err)]
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::{error::ErrorKind as ClapErrorKind, CommandFactory, Parser, Subcommand};
use clap_complete::aot::{generate, Shell};
use serde_json::{json, Map, Value};
use tracing_subscriber::EnvFilter;

mod routines;

use marshalite::api::{run_case, to_exit_code, Error, ErrorKind, Registry, ReturnType};
use routines::routine_for;

#[derive(Copy, Clone, Debug)]
struct RunOutcome {
    exit_code: i32,
}

impl RunOutcome {
    fn ok() -> Self {
        Self { exit_code: 0 }
    }

    fn with_code(exit_code: i32) -> Self {
        Self { exit_code }
    }
}

#[derive(Parser)]
#[command(
    name = "marshalite",
    version,
    about = "Type-directed JSON marshaling and timed execution harness"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run one test case: decode input, bind arguments, invoke, emit envelope.
    Run {
        /// Problem method name, e.g. `coin-change`.
        method: String,
        /// Raw test-case JSON, or `-` to read it from stdin.
        input: Option<String>,
        /// Read the test-case JSON from a file instead.
        #[arg(long, conflicts_with = "input")]
        input_file: Option<PathBuf>,
    },
    /// List built-in problem schemas as JSON.
    Problems,
    /// Generate shell completion scripts.
    Completions { shell: Shell },
}

fn main() {
    let exit_code = match run() {
        Ok(outcome) => outcome.exit_code,
        Err(err) => {
            emit_error(&err);
            to_exit_code(err.kind())
        }
    };
    std::process::exit(exit_code);
}

fn run() -> Result<RunOutcome, Error> {
    init_tracing();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ClapErrorKind::DisplayHelp
            | ClapErrorKind::DisplayVersion
            | ClapErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                err.print().map_err(|io_err| {
                    Error::new(ErrorKind::Io)
                        .with_message("failed to write help")
                        .with_source(io_err)
                })?;
                let exit_code = if matches!(
                    err.kind(),
                    ClapErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                ) {
                    2
                } else {
                    0
                };
                return Ok(RunOutcome::with_code(exit_code));
            }
            _ => {
                return Err(Error::new(ErrorKind::Usage).with_message(err.to_string()));
            }
        },
    };

    match cli.command {
        Command::Run {
            method,
            input,
            input_file,
        } => cmd_run(&method, input, input_file),
        Command::Problems => cmd_problems(),
        Command::Completions { shell } => cmd_completions(shell),
    }
}

fn cmd_run(
    method: &str,
    input: Option<String>,
    input_file: Option<PathBuf>,
) -> Result<RunOutcome, Error> {
    let registry = Registry::builtin();
    let problem = registry.find(method).ok_or_else(|| {
        Error::new(ErrorKind::Usage)
            .with_message("unknown method")
            .with_field(method)
    })?;
    let routine = routine_for(method).ok_or_else(|| {
        Error::new(ErrorKind::Usage)
            .with_message("method has a schema but no routine")
            .with_field(method)
    })?;
    let raw = read_input(input, input_file)?;

    tracing::debug!(method, bytes = raw.len(), "running test case");
    let envelope = run_case(problem, routine.as_ref(), &raw);
    println!("{}", envelope.render());
    Ok(RunOutcome::ok())
}

fn read_input(input: Option<String>, input_file: Option<PathBuf>) -> Result<String, Error> {
    if let Some(path) = input_file {
        return std::fs::read_to_string(&path).map_err(|err| {
            Error::new(ErrorKind::Io)
                .with_message(format!("failed to read {}", path.display()))
                .with_source(err)
        });
    }
    match input {
        Some(text) if text == "-" => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer).map_err(|err| {
                Error::new(ErrorKind::Io)
                    .with_message("failed to read stdin")
                    .with_source(err)
            })?;
            Ok(buffer)
        }
        Some(text) => Ok(text),
        None => Err(Error::new(ErrorKind::Usage)
            .with_message("missing test-case input: pass <input>, `-`, or --input-file")),
    }
}

fn cmd_problems() -> Result<RunOutcome, Error> {
    let registry = Registry::builtin();
    let listing: Vec<Value> = registry
        .problems()
        .iter()
        .map(|problem| {
            let mut entry = Map::new();
            entry.insert("name".to_string(), json!(problem.name()));
            entry.insert("params".to_string(), json!(problem.params()));
            let returns = match problem.returns() {
                ReturnType::Value(tag) => json!(tag),
                ReturnType::Void => json!("Void"),
            };
            entry.insert("returns".to_string(), returns);
            if let Some(name) = problem.mutated_param() {
                entry.insert("mutates".to_string(), json!(name));
            }
            Value::Object(entry)
        })
        .collect();
    let rendered = serde_json::to_string_pretty(&Value::Array(listing)).map_err(|err| {
        Error::new(ErrorKind::Io)
            .with_message("failed to encode problem listing")
            .with_source(err)
    })?;
    println!("{rendered}");
    Ok(RunOutcome::ok())
}

fn cmd_completions(shell: Shell) -> Result<RunOutcome, Error> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    generate(shell, &mut command, name, &mut io::stdout());
    Ok(RunOutcome::ok())
}

fn emit_error(err: &Error) {
    if io::stderr().is_terminal() {
        eprintln!("error: {err}");
        return;
    }
    let value = error_json(err);
    let json = serde_json::to_string(&value).unwrap_or_else(|_| {
        "{\"error\":{\"kind\":\"Io\",\"message\":\"json encode failed\"}}".to_string()
    });
    eprintln!("{json}");
}

fn error_json(err: &Error) -> Value {
    let mut inner = Map::new();
    inner.insert("kind".to_string(), json!(format!("{:?}", err.kind())));
    inner.insert("message".to_string(), json!(err.to_string()));
    if let Some(field) = err.field() {
        inner.insert("field".to_string(), json!(field));
    }
    if let Some(position) = err.position() {
        inner.insert("position".to_string(), json!(position));
    }
    let mut outer = Map::new();
    outer.insert("error".to_string(), Value::Object(inner));
    Value::Object(outer)
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}
