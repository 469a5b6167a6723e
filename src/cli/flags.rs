use clap::Parser;

use crate::entropy::EntropySource;
use crate::error::Error;
use crate::pass::CharClass;
use crate::settings::{MAX_LENGTH, MIN_LENGTH, Settings};

#[derive(Debug, Parser)]
#[command(
    name = "passgen",
    version,
    about = "Generate passwords from selected character classes and rate their strength",
    after_help = "Run without arguments to open the interactive form."
)]
pub struct CliFlags {
    /// Characters per password (4-32)
    #[arg(short, long, value_name = "N", value_parser = parse_length)]
    pub length: Option<usize>,

    /// How many passwords to generate
    #[arg(short, long, value_name = "N", default_value_t = 1, value_parser = parse_count)]
    pub number: usize,

    /// Leave out lowercase letters (a-z)
    #[arg(long)]
    pub no_lowercase: bool,

    /// Leave out uppercase letters (A-Z)
    #[arg(long)]
    pub no_uppercase: bool,

    /// Leave out numbers (0-9)
    #[arg(long)]
    pub no_numbers: bool,

    /// Leave out symbols (!@#$%^&*...)
    #[arg(long)]
    pub no_symbols: bool,

    /// Copy to clipboard instead of printing
    #[arg(short = 'b', long = "board")]
    pub clipboard: bool,

    /// Print the strength rating after each password
    #[arg(long)]
    pub strength: bool,

    /// Rate the given password and exit
    #[arg(long, value_name = "PASSWORD")]
    pub score: Option<String>,

    /// Draw every character straight from the OS random source
    #[arg(long)]
    pub os_rng: bool,

    /// Ignore saved settings
    #[arg(short, long)]
    pub default: bool,

    /// Suppress notices and warnings
    #[arg(short, long)]
    pub quiet: bool,
}

impl CliFlags {
    /// Layer the flags over `base` (saved or default settings).
    pub fn apply(&self, base: Settings) -> Settings {
        let mut options = base.options;

        if let Some(length) = self.length {
            options = options.with_length(length);
        }

        let excluded = [
            (CharClass::Lowercase, self.no_lowercase),
            (CharClass::Uppercase, self.no_uppercase),
            (CharClass::Numbers, self.no_numbers),
            (CharClass::Symbols, self.no_symbols),
        ];
        for (class, off) in excluded {
            if off {
                options = options.with_class(class, false);
            }
        }

        Settings {
            options,
            entropy: if self.os_rng {
                EntropySource::Os
            } else {
                base.entropy
            },
        }
    }
}

fn parse_length(s: &str) -> Result<usize, String> {
    let length: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("invalid number: {s}"))?;
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
        return Err(Error::LengthOutOfRange(length).to_string());
    }
    Ok(length)
}

fn parse_count(s: &str) -> Result<usize, String> {
    match s.trim().parse::<usize>() {
        Ok(0) => Err("at least one password is required".to_string()),
        Ok(count) => Ok(count),
        Err(_) => Err(format!("invalid number: {s}")),
    }
}
