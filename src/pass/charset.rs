//! Character sets and the per-tier policies built from them.

use std::fmt;
use std::str::FromStr;

use super::GenError;

pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &[u8] = b"0123456789";
pub const PUNCTUATION: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

const LETTERS_DIGITS_PUNCTUATION: &[u8] = b"abcdefghijklmnopqrstuvwxyz\
ABCDEFGHIJKLMNOPQRSTUVWXYZ\
0123456789\
!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

const LETTERS_DIGITS: &[u8] = b"abcdefghijklmnopqrstuvwxyz\
ABCDEFGHIJKLMNOPQRSTUVWXYZ\
0123456789";

/// Named complexity level of a generated password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComplexityTier {
    Strong,
    Medium,
    Weak,
}

impl ComplexityTier {
    pub const ALL: [ComplexityTier; 3] = [Self::Strong, Self::Medium, Self::Weak];

    /// Lowercase token, as accepted by `FromStr`.
    pub fn token(self) -> &'static str {
        match self {
            Self::Strong => "strong",
            Self::Medium => "medium",
            Self::Weak => "weak",
        }
    }

    /// Capitalized name for messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Strong => "Strong",
            Self::Medium => "Medium",
            Self::Weak => "Weak",
        }
    }

    pub fn policy(self) -> CharsetPolicy {
        resolve(self)
    }
}

impl fmt::Display for ComplexityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Exact tokens only. Callers normalize case and whitespace first.
impl FromStr for ComplexityTier {
    type Err = GenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strong" => Ok(Self::Strong),
            "medium" => Ok(Self::Medium),
            "weak" => Ok(Self::Weak),
            other => Err(GenError::InvalidTier(other.to_string())),
        }
    }
}

/// Alphabet and constraints for one tier.
///
/// Every mandatory class is a non-empty subset of `filler`, so a password
/// built from this policy only ever contains bytes from `filler`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharsetPolicy {
    pub filler: &'static [u8],
    pub mandatory: &'static [&'static [u8]],
    pub minimum_length: usize,
}

impl CharsetPolicy {
    /// Upper-bound entropy estimate for a password of `length` characters.
    pub fn entropy_bits(&self, length: usize) -> f64 {
        if self.filler.is_empty() {
            return 0.0;
        }
        length as f64 * (self.filler.len() as f64).log2()
    }

    pub fn contains(&self, byte: u8) -> bool {
        self.filler.contains(&byte)
    }
}

/// Fixed policy table. Pure, no randomness.
pub fn resolve(tier: ComplexityTier) -> CharsetPolicy {
    match tier {
        ComplexityTier::Strong => CharsetPolicy {
            filler: LETTERS_DIGITS_PUNCTUATION,
            mandatory: &[LOWERCASE, UPPERCASE, DIGITS, PUNCTUATION],
            minimum_length: 8,
        },
        ComplexityTier::Medium => CharsetPolicy {
            filler: LETTERS_DIGITS,
            mandatory: &[],
            minimum_length: 6,
        },
        ComplexityTier::Weak => CharsetPolicy {
            filler: LOWERCASE,
            mandatory: &[],
            minimum_length: 4,
        },
    }
}

/// Rough label for an entropy estimate.
pub fn strength_label(bits: f64) -> &'static str {
    match bits {
        b if b < 50.0 => "weak",
        b if b < 80.0 => "fair",
        b if b < 128.0 => "strong",
        _ => "excellent",
    }
}
