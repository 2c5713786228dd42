use thiserror::Error;

use super::ComplexityTier;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenError {
    #[error("Password length must be at least 1.")]
    InvalidLength,

    #[error("{} passwords should be at least {minimum} characters long.", .tier.name())]
    LengthBelowTierMinimum {
        tier: ComplexityTier,
        minimum: usize,
        length: usize,
    },

    #[error("Number of passwords must be at least 1.")]
    InvalidCount,

    #[error("Complexity level must be 'strong', 'medium', or 'weak' (got '{0}').")]
    InvalidTier(String),

    #[error("Cannot allocate {count} password(s) of {length} characters.")]
    TooLarge { count: usize, length: usize },
}

pub type Result<T> = std::result::Result<T, GenError>;
