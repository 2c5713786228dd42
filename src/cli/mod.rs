//! Command-line shell around the generator.

mod context;
pub mod prompts;
pub mod quiet;

use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

use passgen::pass::{ComplexityTier, GenError};
use passgen::rng::Source;

pub use context::Context;

/// passgen - Generate random passwords in strong, medium or weak tiers.
///
/// With no options, asks for the number of passwords, their length and the tier.
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Number of passwords to generate
    #[arg(short, long)]
    pub number: Option<usize>,

    /// Length of each password
    #[arg(short, long)]
    pub length: Option<usize>,

    /// Complexity tier: strong, medium or weak
    #[arg(short, long, value_parser = parse_tier)]
    pub tier: Option<ComplexityTier>,

    /// Use saved defaults for anything not given, never prompt
    #[arg(short, long)]
    pub defaults: bool,

    /// Save the effective number, length and tier as the new defaults
    #[arg(short, long)]
    pub save: bool,

    /// Append passwords to a file (a directory writes passwords.txt inside it)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Copy passwords to the clipboard instead of printing them
    #[arg(short = 'b', long = "board")]
    pub clipboard: bool,

    /// Print an entropy estimate
    #[arg(short, long)]
    pub entropy: bool,

    /// Suppress warnings and confirmations
    #[arg(short, long)]
    pub quiet: bool,

    /// Random source: os or chacha
    #[arg(long, default_value_t = Source::Os)]
    pub rng: Source,
}

impl CliArgs {
    /// True when the user gave anything that replaces the interactive prompts.
    pub fn has_explicit_args(&self) -> bool {
        self.number.is_some() || self.length.is_some() || self.tier.is_some() || self.defaults
    }
}

/// Case-insensitive tier token.
pub fn parse_tier(s: &str) -> Result<ComplexityTier, GenError> {
    s.trim().to_lowercase().parse()
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Gen(#[from] GenError),

    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("Random source unavailable: {0}")]
    Rng(#[from] rand::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

/// Parse arguments and run. Errors are printed by the caller.
pub fn run() -> Result<(), Error> {
    let args = CliArgs::parse();
    Context::new(args).run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_flag_is_case_insensitive() {
        assert_eq!(parse_tier(" STRONG "), Ok(ComplexityTier::Strong));
        assert_eq!(parse_tier("Medium"), Ok(ComplexityTier::Medium));
        assert!(matches!(parse_tier("ultra"), Err(GenError::InvalidTier(_))));
    }

    #[test]
    fn explicit_args_skip_prompts() {
        let args = CliArgs::parse_from(["passgen"]);
        assert!(!args.has_explicit_args());
        assert_eq!(args.rng, Source::Os);

        let args = CliArgs::parse_from(["passgen", "-t", "weak"]);
        assert!(args.has_explicit_args());
        assert_eq!(args.tier, Some(ComplexityTier::Weak));

        let args = CliArgs::parse_from(["passgen", "--defaults", "--rng", "chacha"]);
        assert!(args.has_explicit_args());
        assert_eq!(args.rng, Source::ChaCha);
    }

    #[test]
    fn output_flags_do_not_count_as_values() {
        let args = CliArgs::parse_from(["passgen", "-q", "-b", "-e", "-o", "out.txt"]);
        assert!(!args.has_explicit_args());
        assert!(args.quiet && args.clipboard && args.entropy);
    }
}
