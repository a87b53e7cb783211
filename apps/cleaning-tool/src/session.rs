//! Interactive session: one command per input line against the same stores.

use std::io::{BufRead, Write};

use clap::Parser;

use crate::commands::{App, Command};

/// One session line, parsed with the same grammar as the command line.
#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_version_flag = true)]
struct SessionLine {
    #[command(subcommand)]
    command: Command,
}

/// Reads commands until end of input or `quit`.
///
/// Errors from individual commands are reported and the session continues.
///
/// # Returns
/// Number of commands that ran successfully.
pub fn run<I, W>(app: &mut App, input: I, out: &mut W) -> anyhow::Result<usize>
where
    I: BufRead,
    W: Write,
{
    let mut succeeded = 0;
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }

        let words = match split_words(line) {
            Ok(words) => words,
            Err(e) => {
                writeln!(out, "error: {}", e)?;
                continue;
            }
        };
        let parsed = match SessionLine::try_parse_from(words) {
            Ok(parsed) => parsed,
            Err(e) => {
                write!(out, "{}", e)?;
                continue;
            }
        };
        if let Command::Session = parsed.command {
            writeln!(out, "error: a session is already running")?;
            continue;
        }
        match app.execute(parsed.command, out) {
            Ok(()) => succeeded += 1,
            Err(e) => {
                tracing::warn!("command failed: {}", e);
                writeln!(out, "error: {}", e)?;
            }
        }
    }
    Ok(succeeded)
}

/// Splits a line into words, honouring single and double quotes.
fn split_words(line: &str) -> Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), c) => current.push(c),
            (None, '"' | '\'') => {
                quote = Some(c);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }
    if let Some(q) = quote {
        return Err(format!("unterminated {} quote", q));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}
