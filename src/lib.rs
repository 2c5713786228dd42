//! Tiered password generation over a cryptographically secure source.
//!
//! ```
//! use passgen::pass::{ComplexityTier, PasswordGenerator};
//! use passgen::rng::{SecureRng, Source};
//!
//! let rng = SecureRng::new(Source::Os).unwrap();
//! let mut generator = PasswordGenerator::new(rng);
//! let batch = generator.generate_batch(3, 12, ComplexityTier::Strong).unwrap();
//! assert_eq!(batch.len(), 3);
//! ```

pub mod pass;
pub mod rng;
