//! Settings file persistence.
//!
//! One comma-separated line:
//! `length,lowercase,uppercase,numbers,symbols,entropy`

use std::fs::{self, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use super::{GenerationOptions, Settings};
use crate::entropy::EntropySource;

const FIELDS: usize = 6;

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

    let options = &settings.options;
    let data = format!(
        "{},{},{},{},{},{}\n",
        options.length,
        options.lowercase,
        options.uppercase,
        options.numbers,
        options.symbols,
        settings.entropy.name(),
    );

    file.write_all(data.as_bytes())?;
    log::debug!("saved settings to {}", path.display());
    Ok(())
}

pub fn load(settings: &mut Settings, path: &Path) -> io::Result<()> {
    if !path.exists() {
        log::debug!("no settings at {}, writing defaults", path.display());
        return save(settings, path);
    }

    let file = OpenOptions::new().read(true).open(path)?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    let parts: Vec<&str> = line.trim().split(',').collect();
    if parts.len() != FIELDS {
        log::warn!(
            "settings at {} has {} fields, expected {FIELDS}; rewriting defaults",
            path.display(),
            parts.len()
        );
        return save(settings, path);
    }

    let current = settings.options;
    let length = parts[0].parse().unwrap_or(current.length);
    let lowercase = parts[1].parse().unwrap_or(current.lowercase);
    let uppercase = parts[2].parse().unwrap_or(current.uppercase);
    let numbers = parts[3].parse().unwrap_or(current.numbers);
    let symbols = parts[4].parse().unwrap_or(current.symbols);

    settings.options = GenerationOptions::new(length, lowercase, uppercase, numbers, symbols)
        .unwrap_or_else(|e| {
            log::warn!("{e}; clamping saved length");
            GenerationOptions {
                lowercase,
                uppercase,
                numbers,
                symbols,
                ..current
            }
            .with_length(length)
        });
    settings.entropy = EntropySource::from_name(parts[5]).unwrap_or(settings.entropy);
    log::debug!("loaded settings from {}", path.display());
    Ok(())
}

pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("passgen")
        .join("settings")
}
