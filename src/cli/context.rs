//! CLI context - bundles settings, flags, and clipboard.

use std::io::{self, Write};

use zeroize::Zeroize;

use super::{CliFlags, prompts};
use crate::clipboard::{Clipboard, SystemClipboard};
use crate::error::{Error, Result};
use crate::pass::{self, GeneratedPassword, StrengthRating};
use crate::settings::Settings;
use crate::terminal::RESET;

pub struct Context<C: Clipboard = SystemClipboard> {
    pub settings: Settings,
    pub flags: CliFlags,
    clipboard: C,
    color_out: bool,
    color_err: bool,
}

impl Context {
    pub fn new(flags: CliFlags) -> Self {
        let saved = if flags.default {
            Settings::default()
        } else {
            Settings::load_from_file().unwrap_or_else(|e| {
                prompts::warn(&format!("Failed to load settings: {e}"));
                Settings::default()
            })
        };
        let mut ctx = Self::with_clipboard(flags, saved, SystemClipboard::new());
        ctx.color_out = prompts::colors_stdout();
        ctx.color_err = prompts::colors_stderr();
        ctx
    }
}

impl<C: Clipboard> Context<C> {
    pub fn with_clipboard(flags: CliFlags, saved: Settings, clipboard: C) -> Self {
        Self {
            settings: flags.apply(saved),
            flags,
            clipboard,
            color_out: false,
            color_err: false,
        }
    }

    /// Passwords and ratings go to `out`. With `--board`, ratings go to
    /// `err` and stdout stays empty.
    pub fn run(&mut self, out: &mut impl Write, err: &mut impl Write) -> Result<()> {
        if let Some(password) = &self.flags.score {
            let rating = describe(pass::score(password), self.color_out);
            writeln!(out, "{rating}").map_err(Error::Terminal)?;
            return Ok(());
        }

        let options = self.settings.options;
        let count = self.flags.number;
        let passwords = self
            .settings
            .entropy
            .with_rng(|rng| pass::generate_batch(&options, count, rng))?;

        if self.flags.clipboard && self.copy(&passwords, err)? {
            return Ok(());
        }
        self.print(&passwords, out)
    }

    /// Returns false when the user chose to print instead.
    fn copy(&mut self, passwords: &[GeneratedPassword], err: &mut impl Write) -> Result<bool> {
        let mut joined = passwords
            .iter()
            .map(GeneratedPassword::as_str)
            .collect::<Vec<_>>()
            .join("\n");

        let result = self.clipboard.write(&joined);
        joined.zeroize();

        match result {
            Ok(()) => {
                prompts::clipboard_copied(passwords.len());
                if self.flags.strength {
                    for password in passwords {
                        let rating = describe(pass::score(password.as_str()), self.color_err);
                        writeln!(err, "{rating}").map_err(Error::Terminal)?;
                    }
                }
                Ok(true)
            }
            Err(e) if self.flags.quiet => {
                log::debug!("copy failed, printing instead: {e}");
                Ok(false)
            }
            Err(e) if prompts::clipboard_fallback_prompt(&e.to_string()) => Ok(false),
            Err(e) => Err(e),
        }
    }

    fn print(&self, passwords: &[GeneratedPassword], out: &mut impl Write) -> Result<()> {
        for password in passwords {
            let written = if self.flags.strength {
                let rating = describe(pass::score(password.as_str()), self.color_out);
                writeln!(out, "{password}  {rating}")
            } else {
                writeln!(out, "{password}")
            };
            written.map_err(Error::Terminal)?;
        }
        out.flush().map_err(Error::Terminal)
    }
}

/// "Strong (5/6)", or a note when there is nothing to rate.
fn describe(rating: Option<StrengthRating>, color: bool) -> String {
    match rating {
        Some(r) if color => format!(
            "{}{}{RESET} ({}/6)",
            r.tier.color(),
            r.tier.label(),
            r.score
        ),
        Some(r) => format!("{} ({}/6)", r.tier.label(), r.score),
        None => "(nothing to rate)".to_string(),
    }
}

/// Generate straight to stdout.
pub fn run_stdout(flags: CliFlags) -> Result<()> {
    prompts::set_quiet(flags.quiet);
    let mut ctx = Context::new(flags);
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();
    ctx.run(&mut out, &mut err)
}
