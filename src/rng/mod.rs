//! Secure random sources.
//!
//! The generator takes any `RngCore + CryptoRng`; this module provides the
//! ones the CLI can pick between at runtime.

use std::fmt;
use std::str::FromStr;

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Source {
    /// Operating system CSPRNG, read on every draw.
    #[default]
    Os,
    /// ChaCha20 stream seeded once from the operating system.
    ChaCha,
}

impl Source {
    pub fn name(self) -> &'static str {
        match self {
            Source::Os => "os",
            Source::ChaCha => "chacha",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Source {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "os" => Ok(Source::Os),
            "chacha" => Ok(Source::ChaCha),
            other => Err(format!("unknown random source: {other}")),
        }
    }
}

pub enum SecureRng {
    Os(OsRng),
    ChaCha(Box<ChaCha20Rng>),
}

impl SecureRng {
    /// Fails only when the OS cannot provide a seed.
    pub fn new(source: Source) -> Result<Self, rand::Error> {
        match source {
            Source::Os => Ok(SecureRng::Os(OsRng)),
            Source::ChaCha => Ok(SecureRng::ChaCha(Box::new(ChaCha20Rng::from_rng(OsRng)?))),
        }
    }

    pub fn source(&self) -> Source {
        match self {
            SecureRng::Os(_) => Source::Os,
            SecureRng::ChaCha(_) => Source::ChaCha,
        }
    }

    /// Human readable description of where entropy comes from.
    pub fn name(&self) -> &'static str {
        match self {
            SecureRng::Os(_) => "OS CSPRNG",
            SecureRng::ChaCha(_) => "ChaCha20 (OS seeded)",
        }
    }
}

impl fmt::Debug for SecureRng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // never print generator state
        f.debug_tuple("SecureRng").field(&self.source()).finish()
    }
}

impl RngCore for SecureRng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        match self {
            SecureRng::Os(rng) => rng.next_u32(),
            SecureRng::ChaCha(rng) => rng.next_u32(),
        }
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        match self {
            SecureRng::Os(rng) => rng.next_u64(),
            SecureRng::ChaCha(rng) => rng.next_u64(),
        }
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        match self {
            SecureRng::Os(rng) => rng.fill_bytes(dest),
            SecureRng::ChaCha(rng) => rng.fill_bytes(dest),
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        match self {
            SecureRng::Os(rng) => rng.try_fill_bytes(dest),
            SecureRng::ChaCha(rng) => rng.try_fill_bytes(dest),
        }
    }
}

impl CryptoRng for SecureRng {}
