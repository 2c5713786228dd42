//! Centralized warning and prompt messages for CLI output.

use std::io::{self, BufRead, Write};

use crossterm::style::Stylize;

use passgen::pass::ComplexityTier;

use super::{Error, parse_tier, quiet};

/// Print a warning message to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if quiet::enabled() {
        return;
    }
    if quiet::stderr_is_tty() {
        eprintln!("{}", msg.yellow());
    } else {
        eprintln!("{msg}");
    }
}

/// Print an error message to stderr (red) - NOT suppressed (errors are always shown)
pub fn error(msg: &str) {
    if quiet::stderr_is_tty() {
        eprintln!("{}", msg.red());
    } else {
        eprintln!("{msg}");
    }
}

/// Print a prompt and read one trimmed line. EOF reads as an empty answer.
pub fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> io::Result<String> {
    write!(out, "{prompt}")?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Ask for a count or length. Empty keeps `default`, negatives become 0 so
/// the generator reports them.
pub fn ask_number<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
    default: usize,
) -> Result<usize, Error> {
    let answer = ask(input, out, &format!("{prompt} [{default}]: "))?;
    if answer.is_empty() {
        return Ok(default);
    }
    let n: i64 = answer
        .parse()
        .map_err(|_| Error::InvalidNumber(answer.clone()))?;
    Ok(usize::try_from(n).unwrap_or(0))
}

pub fn ask_tier<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    default: ComplexityTier,
) -> Result<ComplexityTier, Error> {
    let answer = ask(
        input,
        out,
        &format!("Enter the desired complexity level (strong, medium, weak) [{default}]: "),
    )?;
    if answer.is_empty() {
        return Ok(default);
    }
    Ok(parse_tier(&answer)?)
}

/// Header printed before interactively requested passwords
pub fn generated_header() {
    if !quiet::enabled() {
        eprintln!("\nGenerated Passwords:");
    }
}

pub fn entropy(bits: f64, label: &str, source: &str) {
    if !quiet::enabled() {
        eprintln!("Entropy: {bits:.1} bits ({label}) \u{2022} Source: {source}");
    }
}

/// Print clipboard copied confirmation - suppressed in quiet mode
pub fn clipboard_copied() {
    if !quiet::enabled() {
        eprintln!("*** -COPIED TO CLIPBOARD- ***");
    }
}

/// Prompt user when clipboard is unavailable. Returns true to fallback to terminal, false to abort.
/// In quiet/non-interactive mode, silently falls back to terminal.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut err = io::stderr();
    match ask(
        &mut input,
        &mut err,
        "Clipboard unavailable. Print to terminal instead? [Y/n]: ",
    ) {
        Ok(answer) => {
            let answer = answer.to_lowercase();
            if answer.is_empty() || answer == "y" || answer == "yes" {
                eprintln!();
                return true;
            }
        }
        Err(_) => return true,
    }

    eprintln!("\nAborted.");
    false
}

/// Print password output summary - suppressed in quiet mode
pub fn passwords_written(count: usize, path: &str) {
    if !quiet::enabled() {
        eprintln!("{count} password(s) \u{2192} {path}");
    }
}

pub fn settings_saved(path: &str) {
    if !quiet::enabled() {
        eprintln!("Defaults saved \u{2192} {path}");
    }
}
