//! Generation options and saved defaults.

mod file;

use std::path::{Path, PathBuf};

use crate::entropy::EntropySource;
use crate::error::{Error, Result};
use crate::pass::CharClass;

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 32;
pub const DEFAULT_LENGTH: usize = 16;

/// What to generate. Immutable: every update returns a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationOptions {
    pub length: usize,
    pub lowercase: bool,
    pub uppercase: bool,
    pub numbers: bool,
    pub symbols: bool,
}

impl GenerationOptions {
    pub fn new(
        length: usize,
        lowercase: bool,
        uppercase: bool,
        numbers: bool,
        symbols: bool,
    ) -> Result<Self> {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
            return Err(Error::LengthOutOfRange(length));
        }
        Ok(Self {
            length,
            lowercase,
            uppercase,
            numbers,
            symbols,
        })
    }

    pub fn includes(&self, class: CharClass) -> bool {
        match class {
            CharClass::Lowercase => self.lowercase,
            CharClass::Uppercase => self.uppercase,
            CharClass::Numbers => self.numbers,
            CharClass::Symbols => self.symbols,
        }
    }

    pub fn any_class(&self) -> bool {
        CharClass::ALL.into_iter().any(|c| self.includes(c))
    }

    /// Length clamped to [MIN_LENGTH, MAX_LENGTH].
    pub fn with_length(self, length: usize) -> Self {
        Self {
            length: length.clamp(MIN_LENGTH, MAX_LENGTH),
            ..self
        }
    }

    pub fn lengthened(self) -> Self {
        self.with_length(self.length + 1)
    }

    pub fn shortened(self) -> Self {
        self.with_length(self.length.saturating_sub(1))
    }

    pub fn with_class(self, class: CharClass, on: bool) -> Self {
        let mut next = self;
        match class {
            CharClass::Lowercase => next.lowercase = on,
            CharClass::Uppercase => next.uppercase = on,
            CharClass::Numbers => next.numbers = on,
            CharClass::Symbols => next.symbols = on,
        }
        next
    }

    pub fn toggled(self, class: CharClass) -> Self {
        self.with_class(class, !self.includes(class))
    }
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            lowercase: true,
            uppercase: true,
            numbers: true,
            symbols: true,
        }
    }
}

/// Options plus the RNG choice, as persisted between runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    pub options: GenerationOptions,
    pub entropy: EntropySource,
}

impl Settings {
    pub fn load_from_file() -> Result<Self> {
        Self::load_from(&file::default_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let mut settings = Settings::default();
        file::load(&mut settings, path).map_err(Error::Settings)?;
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        file::save(self, path).map_err(Error::Settings)
    }

    pub fn path() -> PathBuf {
        file::default_path()
    }
}
