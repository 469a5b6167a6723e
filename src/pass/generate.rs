//! Password generation.

use std::fmt;

use rand::Rng;
use rand::distributions::{Distribution, Uniform};
use zeroize::Zeroize;

use super::charset;
use crate::error::{Error, Result};
use crate::settings::GenerationOptions;

/// A password drawn from the character pool. Zeroized on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct GeneratedPassword(String);

impl GeneratedPassword {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Drop for GeneratedPassword {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl fmt::Display for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Keep passwords out of debug logs.
impl fmt::Debug for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GeneratedPassword(<{} chars>)", self.0.len())
    }
}

/// Generate a single password for `options`.
///
/// Returns [`Error::NoCharacterClass`] when every class is disabled,
/// whatever the requested length.
pub fn generate<R: Rng + ?Sized>(
    options: &GenerationOptions,
    rng: &mut R,
) -> Result<GeneratedPassword> {
    if !options.any_class() {
        return Err(Error::NoCharacterClass);
    }
    let mut chars = charset::build(options);
    let password = generate_from_charset(&chars, options.length, rng);
    chars.zeroize();
    Ok(password)
}

/// Generate `count` passwords sharing one pool.
pub fn generate_batch<R: Rng + ?Sized>(
    options: &GenerationOptions,
    count: usize,
    rng: &mut R,
) -> Result<Vec<GeneratedPassword>> {
    if !options.any_class() {
        return Err(Error::NoCharacterClass);
    }
    let mut chars = charset::build(options);
    let passwords = (0..count)
        .map(|_| generate_from_charset(&chars, options.length, rng))
        .collect();
    chars.zeroize();
    Ok(passwords)
}

/// Draw `length` characters independently and with replacement.
fn generate_from_charset<R: Rng + ?Sized>(
    chars: &[u8],
    length: usize,
    rng: &mut R,
) -> GeneratedPassword {
    let index = Uniform::from(0..chars.len());
    // Pool bytes are all ASCII.
    GeneratedPassword(
        (0..length)
            .map(|_| char::from(chars[index.sample(rng)]))
            .collect(),
    )
}

#[cfg(test)]
impl GeneratedPassword {
    pub(crate) fn from_test_str(s: &str) -> Self {
        GeneratedPassword(s.to_string())
    }
}
