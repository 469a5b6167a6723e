//! Crate-wide error type.

use std::io;

use thiserror::Error;

/// Text shown in place of a password when no character class is enabled.
pub const NO_CLASS_MESSAGE: &str = "Please select at least one option";

#[derive(Debug, Error)]
pub enum Error {
    #[error("Please select at least one option")]
    NoCharacterClass,

    #[error("Length must be between 4 and 32, got {0}")]
    LengthOutOfRange(usize),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Settings file error: {0}")]
    Settings(#[source] io::Error),

    #[error("Terminal error: {0}")]
    Terminal(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
