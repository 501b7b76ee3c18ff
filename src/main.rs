//! collatz-path CLI entry point.
//!
//! Reads starting integers from a file or stdin (or generates them with
//! `--range LO..HI`) and writes the rendered SVG to a file or stdout.

use std::fs;
use std::io::{self, Read, Write};
use std::process;

use clap::Parser;
use regex::Regex;

use collatz_path::config::StyleConfig;
use collatz_path::render_svg;

/// Collatz trajectory tree to SVG angle-path output.
#[derive(Parser, Debug)]
#[command(
    name = "collatz-path",
    version = env!("COLLATZ_PATH_VERSION"),
    about = "Collatz trajectory tree to SVG angle-path output"
)]
struct Cli {
    /// Input file of whitespace-separated starting integers (reads from
    /// stdin if not provided)
    input: Option<String>,

    /// Render every integer in an inclusive range instead of reading input,
    /// e.g. --range 1..5000
    #[arg(short, long)]
    range: Option<String>,

    /// Canvas width in pixels
    #[arg(long, default_value = "640")]
    width: f64,

    /// Canvas height in pixels
    #[arg(long, default_value = "480")]
    height: f64,

    /// Style parameters as a JSON file (missing fields use defaults)
    #[arg(short, long)]
    style: Option<String>,

    /// Write output to this file instead of stdout
    #[arg(short, long)]
    output: Option<String>,
}

/// Parse an inclusive "LO..HI" range into the full list of integers.
fn parse_range(expr: &str) -> Result<Vec<i64>, String> {
    let re = Regex::new(r"^\s*(\d+)\s*\.\.\s*(\d+)\s*$").unwrap();
    let caps = re
        .captures(expr)
        .ok_or_else(|| format!("invalid range '{}', expected LO..HI", expr))?;
    let lo: i64 = caps[1]
        .parse()
        .map_err(|_| format!("range start '{}' out of range", &caps[1]))?;
    let hi: i64 = caps[2]
        .parse()
        .map_err(|_| format!("range end '{}' out of range", &caps[2]))?;
    if lo > hi {
        return Err(format!("empty range {}..{}", lo, hi));
    }
    Ok((lo..=hi).collect())
}

/// Parse whitespace-separated integers.
fn parse_numbers(text: &str) -> Result<Vec<i64>, String> {
    text.split_whitespace()
        .map(|tok| {
            tok.parse::<i64>()
                .map_err(|_| format!("invalid integer '{}'", tok))
        })
        .collect()
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    // Collect starting numbers from the range flag, a file, or stdin.
    let numbers = if let Some(ref expr) = cli.range {
        match parse_range(expr) {
            Ok(v) => v,
            Err(e) => {
                eprintln!("error: {}", e);
                process::exit(1);
            }
        }
    } else {
        let text = if let Some(ref path) = cli.input {
            match fs::read_to_string(path) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("error: cannot read '{}': {}", path, e);
                    process::exit(1);
                }
            }
        } else {
            let mut buf = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buf) {
                eprintln!("error: cannot read stdin: {}", e);
                process::exit(1);
            }
            buf
        };
        match parse_numbers(&text) {
            Ok(v) => v,
            Err(e) => {
                eprintln!("error: {}", e);
                process::exit(1);
            }
        }
    };

    // Load style overrides, if any.
    let style = if let Some(ref path) = cli.style {
        let text = match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("error: cannot read '{}': {}", path, e);
                process::exit(1);
            }
        };
        match serde_json::from_str::<StyleConfig>(&text) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("error: invalid style '{}': {}", path, e);
                process::exit(1);
            }
        }
    } else {
        StyleConfig::default()
    };

    // Render
    let rendered = match render_svg(&numbers, &style, cli.width, cli.height) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    // Write output to file or stdout
    if let Some(ref path) = cli.output {
        match fs::write(path, rendered) {
            Ok(()) => {}
            Err(e) => {
                eprintln!("error: cannot write '{}': {}", path, e);
                process::exit(1);
            }
        }
    } else {
        println!("{}", rendered);
        if let Err(e) = io::stdout().flush() {
            eprintln!("error: cannot flush stdout: {}", e);
            process::exit(1);
        }
    }
}
