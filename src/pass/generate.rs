//! Password generation.

use rand::rngs::OsRng;
use rand::{CryptoRng, Rng, RngCore};
use zeroize::Zeroize;

use super::charset::{CharsetPolicy, ComplexityTier};
use super::error::{GenError, Result};

/// Generates passwords from an injected cryptographically secure source.
///
/// Holds no state besides the source itself, so every call is independent.
#[derive(Debug)]
pub struct PasswordGenerator<R> {
    rng: R,
}

impl Default for PasswordGenerator<OsRng> {
    fn default() -> Self {
        Self::new(OsRng)
    }
}

impl<R> PasswordGenerator<R>
where
    R: RngCore + CryptoRng,
{
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }

    /// Generate one password of exactly `length` characters.
    ///
    /// Mandatory classes each contribute one character, the rest is filler,
    /// and the whole buffer is shuffled so mandatory characters have no fixed
    /// position. Validation happens before any randomness is drawn.
    pub fn generate(&mut self, length: usize, tier: ComplexityTier) -> Result<String> {
        let policy = validate(length, tier)?;
        self.generate_unchecked(length, &policy)
    }

    /// Generate `count` independent passwords. The first failure aborts the batch.
    pub fn generate_batch(
        &mut self,
        count: usize,
        length: usize,
        tier: ComplexityTier,
    ) -> Result<Vec<String>> {
        if count < 1 {
            return Err(GenError::InvalidCount);
        }
        let policy = validate(length, tier)?;

        let too_large = GenError::TooLarge { count, length };
        if count.checked_mul(length).is_none() {
            return Err(too_large);
        }
        let mut passwords = Vec::new();
        passwords
            .try_reserve_exact(count)
            .map_err(|_| too_large)?;

        for _ in 0..count {
            passwords.push(self.generate_unchecked(length, &policy)?);
        }
        Ok(passwords)
    }

    /// Sizes come from the caller, so allocations are fallible.
    fn generate_unchecked(&mut self, length: usize, policy: &CharsetPolicy) -> Result<String> {
        let too_large = || GenError::TooLarge { count: 1, length };
        let mut buf: Vec<u8> = Vec::new();
        buf.try_reserve_exact(length).map_err(|_| too_large())?;
        let mut password = String::new();
        password.try_reserve_exact(length).map_err(|_| too_large())?;

        for class in policy.mandatory {
            buf.push(random_byte(class, &mut self.rng));
        }
        while buf.len() < length {
            buf.push(random_byte(policy.filler, &mut self.rng));
        }

        shuffle(&mut buf, &mut self.rng);

        // every policy alphabet is ASCII
        password.extend(buf.iter().map(|&b| char::from(b)));
        buf.zeroize();
        Ok(password)
    }
}

/// Resolve the tier's policy and check `length` against it.
pub fn validate(length: usize, tier: ComplexityTier) -> Result<CharsetPolicy> {
    if length < 1 {
        return Err(GenError::InvalidLength);
    }
    let policy = tier.policy();
    if length < policy.minimum_length {
        return Err(GenError::LengthBelowTierMinimum {
            tier,
            minimum: policy.minimum_length,
            length,
        });
    }
    Ok(policy)
}

/// Generate one password using the operating system CSPRNG.
pub fn generate(length: usize, tier: ComplexityTier) -> Result<String> {
    PasswordGenerator::new(OsRng).generate(length, tier)
}

/// Generate a batch using the operating system CSPRNG.
pub fn generate_batch(count: usize, length: usize, tier: ComplexityTier) -> Result<Vec<String>> {
    PasswordGenerator::new(OsRng).generate_batch(count, length, tier)
}

#[inline]
fn random_byte<R: Rng + ?Sized>(chars: &[u8], rng: &mut R) -> u8 {
    chars[rng.gen_range(0..chars.len())]
}

/// Fisher-Yates. `gen_range` rejects out-of-range samples, so each
/// permutation is equally likely.
#[inline]
fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}
