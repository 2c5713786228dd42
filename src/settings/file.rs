//! Settings file persistence.

use std::env;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::Settings;

pub fn save(settings: &Settings, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let data = format!(
        "{},{},{}\n",
        settings.number_of_passwords, settings.pass_length, settings.tier
    );

    file.write_all(data.as_bytes())?;
    Ok(())
}

/// A missing file leaves `settings` untouched. Malformed fields keep their
/// current value.
pub fn load(settings: &mut Settings, path: &Path) -> io::Result<()> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e),
    };

    let line = contents.lines().next().unwrap_or("");
    let parts: Vec<&str> = line.trim().split(',').map(str::trim).collect();

    if let Some(count) = parts.first().and_then(|s| s.parse().ok()) {
        settings.number_of_passwords = count;
    }
    if let Some(length) = parts.get(1).and_then(|s| s.parse().ok()) {
        settings.pass_length = length;
    }
    if let Some(tier) = parts.get(2).and_then(|s| s.parse().ok()) {
        settings.tier = tier;
    }

    Ok(())
}

#[inline]
pub fn get_path() -> PathBuf {
    if let Some(path) = env::var_os("PASSGEN_CONFIG") {
        return PathBuf::from(path);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(format!("{}/.config/passgen/settings", home))
}
