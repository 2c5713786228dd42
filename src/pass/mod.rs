//! Password generation and output.

pub mod charset;
mod error;
mod generate;
pub mod output;

pub use charset::{CharsetPolicy, ComplexityTier};
pub use error::{GenError, Result};
pub use generate::{PasswordGenerator, generate, generate_batch, validate};
