//! Saved defaults for count, length and tier.

mod file;

use std::path::PathBuf;

use passgen::pass::ComplexityTier;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub number_of_passwords: usize,
    pub pass_length: usize,
    pub tier: ComplexityTier,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, std::io::Error> {
        let mut settings = Settings::default();
        file::load(&mut settings, &file::get_path())?;
        Ok(settings)
    }

    pub fn save_to_file(&self) -> Result<PathBuf, std::io::Error> {
        let path = file::get_path();
        file::save(self, &path)?;
        Ok(path)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            number_of_passwords: 1,
            pass_length: 16,
            tier: ComplexityTier::Strong,
        }
    }
}
