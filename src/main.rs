use std::{
    io::{self, BufRead},
    process::ExitCode,
};

use clap::Parser;
use dbgexpr::{
    config::{DEFAULT_MAX_INPUT_LEN, EvalConfig},
    evaluate_with,
    interpreter::{lexer::core::tokenize_with, machine::MachineSnapshot},
    util::num::{address_from_word, parse_word},
};

/// dbgexpr evaluates debugger expressions over a snapshot of emulated machine
/// state.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Set a register, e.g. `--reg a0=5` or `--reg '$sp=0x8000'`.
    #[arg(short, long = "reg", value_name = "NAME=VALUE", value_parser = parse_register)]
    registers: Vec<(String, i64)>,

    /// Set the machine word at an address, e.g. `--mem 0x8000=42`.
    #[arg(short, long = "mem", value_name = "ADDR=VALUE", value_parser = parse_memory)]
    memory: Vec<(u64, i64)>,

    /// Longest accepted expression, in bytes.
    #[arg(long, default_value_t = DEFAULT_MAX_INPUT_LEN)]
    max_len: usize,

    /// Print results in hexadecimal as well.
    #[arg(short = 'x', long)]
    hex: bool,

    /// Print the token stream before evaluating.
    #[arg(short, long)]
    tokens: bool,

    /// Log lexer and evaluator decisions to stderr. `RUST_LOG` overrides the
    /// level.
    #[arg(short, long)]
    verbose: bool,

    /// Expression to evaluate. Reads one expression per line from stdin when
    /// omitted.
    expression: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.verbose || std::env::var("RUST_LOG").is_ok() {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::EnvFilter::from_default_env()
        } else {
            tracing_subscriber::EnvFilter::new("trace")
        };
        tracing_subscriber::fmt().with_env_filter(filter)
                                 .with_writer(io::stderr)
                                 .init();
    }

    let mut machine = MachineSnapshot::new();
    for (name, value) in &args.registers {
        machine.set_register(name, *value);
    }
    for &(addr, value) in &args.memory {
        machine.set_memory(addr, value);
    }
    let config = EvalConfig { max_input_len: args.max_len };

    if let Some(expression) = &args.expression {
        return if run_line(expression, &machine, &config, &args) {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        };
    }

    let mut failed = false;
    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("Failed to read from stdin: {e}");
                return ExitCode::FAILURE;
            },
        };
        if line.trim().is_empty() {
            continue;
        }
        failed |= !run_line(&line, &machine, &config, &args);
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

/// Evaluates and prints one line. Returns `false` if it failed.
fn run_line(line: &str, machine: &MachineSnapshot, config: &EvalConfig, args: &Args) -> bool {
    if args.tokens
       && let Ok(tokens) = tokenize_with(line, config)
    {
        for token in &tokens {
            println!("{:>4}  {:<12} {}", token.offset, token.kind.to_string(), token.text);
        }
    }

    match evaluate_with(line, machine, config) {
        Ok(value) => {
            if args.hex {
                println!("{value} ({value:#x})");
            } else {
                println!("{value}");
            }
            true
        },
        Err(e) => {
            eprintln!("{e}\n{}", e.caret(line));
            false
        },
    }
}

/// Parses `NAME=VALUE` for `--reg`.
fn parse_register(arg: &str) -> Result<(String, i64), String> {
    let (name, value) = arg.split_once('=')
                           .ok_or_else(|| format!("expected NAME=VALUE, found '{arg}'"))?;
    let name = name.trim();
    if name.is_empty() || name == "$" {
        return Err("register name is empty".to_string());
    }
    Ok((name.to_string(), parse_value(value.trim())?))
}

/// Parses `ADDR=VALUE` for `--mem`.
fn parse_memory(arg: &str) -> Result<(u64, i64), String> {
    let (addr, value) = arg.split_once('=')
                           .ok_or_else(|| format!("expected ADDR=VALUE, found '{arg}'"))?;
    let addr = address_from_word(parse_value(addr.trim())?);
    Ok((addr, parse_value(value.trim())?))
}

/// Parses a decimal or `0x` hex machine word with an optional leading `-`.
fn parse_value(text: &str) -> Result<i64, String> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let word = match digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")) {
        Some(hex) => parse_word(hex, 16, 0),
        None => parse_word(digits, 10, 0),
    }.map_err(|_| format!("'{text}' is not a 64-bit number"))?;

    Ok(if negative { word.wrapping_neg() } else { word })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_accept_decimal_hex_and_sign() {
        assert_eq!(parse_value("42"), Ok(42));
        assert_eq!(parse_value("0x2a"), Ok(42));
        assert_eq!(parse_value("-0X10"), Ok(-16));
        assert_eq!(parse_value("0xffffffffffffffff"), Ok(-1));
        assert!(parse_value("forty").is_err());
    }

    #[test]
    fn register_arguments() {
        assert_eq!(parse_register("a0=5"), Ok(("a0".to_string(), 5)));
        assert_eq!(parse_register("$sp = 0x8000"), Ok(("$sp".to_string(), 0x8000)));
        assert!(parse_register("a0").is_err());
        assert!(parse_register("=5").is_err());
    }

    #[test]
    fn memory_arguments() {
        assert_eq!(parse_memory("0x8000=42"), Ok((0x8000, 42)));
        assert_eq!(parse_memory("-1=7"), Ok((u64::MAX, 7)));
        assert!(parse_memory("0x8000").is_err());
    }

    #[test]
    fn command_line_parses() {
        let args = Args::try_parse_from(["dbgexpr", "-r", "a0=5", "--mem", "16=3", "-x", "$a0+*16"]).unwrap();
        assert_eq!(args.registers, vec![("a0".to_string(), 5)]);
        assert_eq!(args.memory, vec![(16, 3)]);
        assert!(args.hex);
        assert_eq!(args.expression.as_deref(), Some("$a0+*16"));
    }
}
