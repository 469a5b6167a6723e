//! Interactive form state.
//!
//! The form never mutates options in place: each edit swaps in a new
//! `GenerationOptions` value, and generation reads whatever is current.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use rand::Rng;

use crate::clipboard::Clipboard;
use crate::error::Error;
use crate::pass::{self, CharClass, GeneratedPassword, StrengthRating};
use crate::settings::{GenerationOptions, Settings};

/// How long "Copied" stays on screen.
pub const COPY_ACK: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Toggle(CharClass),
    Lengthen,
    Shorten,
    Generate,
    Copy,
    ToggleEntropy,
    Save,
    Help,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug)]
pub enum Output {
    Empty,
    Password(GeneratedPassword),
    NoClass,
}

/// A copy confirmation, valid only for the generation it was made for.
#[derive(Debug, Clone, Copy)]
struct Acknowledgement {
    generation: u64,
    until: Instant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub is_error: bool,
}

pub struct Form {
    settings: Settings,
    settings_path: PathBuf,
    output: Output,
    generation: u64,
    copied: Option<Acknowledgement>,
    notice: Option<Notice>,
    show_help: bool,
}

impl Form {
    pub fn new(settings: Settings, settings_path: PathBuf) -> Self {
        Self {
            settings,
            settings_path,
            output: Output::Empty,
            generation: 0,
            copied: None,
            notice: None,
            show_help: false,
        }
    }

    pub fn options(&self) -> GenerationOptions {
        self.settings.options
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn output(&self) -> &Output {
        &self.output
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn showing_help(&self) -> bool {
        self.show_help
    }

    pub fn strength(&self) -> Option<StrengthRating> {
        match &self.output {
            Output::Password(password) => pass::score(password.as_str()),
            Output::Empty | Output::NoClass => None,
        }
    }

    /// Copy is only offered while a real password is shown.
    pub fn can_copy(&self) -> bool {
        matches!(self.output, Output::Password(_))
    }

    pub fn copied_visible(&self, now: Instant) -> bool {
        self.ack_remaining(now).is_some()
    }

    /// Time left on a live copy confirmation.
    pub fn ack_remaining(&self, now: Instant) -> Option<Duration> {
        let ack = self.copied?;
        if ack.generation != self.generation || now >= ack.until {
            return None;
        }
        Some(ack.until - now)
    }

    pub fn apply(&mut self, action: Action, clipboard: &mut impl Clipboard, now: Instant) -> Flow {
        if action != Action::Help {
            self.show_help = false;
        }
        self.notice = None;

        match action {
            Action::Toggle(class) => self.settings.options = self.settings.options.toggled(class),
            Action::Lengthen => self.settings.options = self.settings.options.lengthened(),
            Action::Shorten => self.settings.options = self.settings.options.shortened(),
            Action::Generate => {
                let source = self.settings.entropy;
                source.with_rng(|rng| self.generate_with(rng));
            }
            Action::Copy if self.can_copy() => self.copy(clipboard, now),
            Action::Copy => log::debug!("nothing to copy"),
            Action::ToggleEntropy => self.settings.entropy = self.settings.entropy.toggled(),
            Action::Save => self.save(),
            Action::Help => self.show_help = !self.show_help,
            Action::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    pub fn generate_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.generation += 1;
        self.copied = None;
        self.output = match pass::generate(&self.settings.options, rng) {
            Ok(password) => Output::Password(password),
            Err(Error::NoCharacterClass) => Output::NoClass,
            Err(e) => {
                self.set_error(e.to_string());
                Output::Empty
            }
        };
    }

    pub fn copy(&mut self, clipboard: &mut impl Clipboard, now: Instant) {
        let Output::Password(password) = &self.output else {
            return;
        };

        match clipboard.write(password.as_str()) {
            Ok(()) => {
                self.copied = Some(Acknowledgement {
                    generation: self.generation,
                    until: now + COPY_ACK,
                });
            }
            Err(e) => {
                log::debug!("copy failed: {e}");
                self.set_error(e.to_string());
            }
        }
    }

    fn save(&mut self) {
        match self.settings.save_to(&self.settings_path) {
            Ok(()) => {
                self.notice = Some(Notice {
                    text: format!("Settings saved to {}", self.settings_path.display()),
                    is_error: false,
                });
            }
            Err(e) => self.set_error(e.to_string()),
        }
    }

    fn set_error(&mut self, text: String) {
        self.notice = Some(Notice {
            text,
            is_error: true,
        });
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::clipboard::fake::FakeClipboard;
    use crate::entropy::EntropySource;

    fn form() -> Form {
        Form::new(Settings::default(), PathBuf::from("unused"))
    }

    fn password(form: &Form) -> String {
        match form.output() {
            Output::Password(p) => p.as_str().to_string(),
            other => panic!("expected password, got {other:?}"),
        }
    }

    #[test]
    fn starts_empty_with_nothing_to_copy() {
        let form = form();
        assert!(matches!(form.output(), Output::Empty));
        assert!(!form.can_copy());
        assert_eq!(form.strength(), None);
    }

    #[test]
    fn generate_shows_password_and_rating() {
        let mut form = form();
        form.generate_with(&mut StdRng::seed_from_u64(5));

        assert_eq!(password(&form).len(), 16);
        assert!(form.can_copy());
        assert!(form.strength().is_some());
    }

    #[test]
    fn no_class_selected_shows_message_not_password() {
        let mut form = form();
        let mut clipboard = FakeClipboard::default();
        let now = Instant::now();
        for class in CharClass::ALL {
            form.apply(Action::Toggle(class), &mut clipboard, now);
        }
        form.generate_with(&mut StdRng::seed_from_u64(5));

        assert!(matches!(form.output(), Output::NoClass));
        assert!(!form.can_copy());
        assert_eq!(form.strength(), None);

        form.apply(Action::Copy, &mut clipboard, now);
        assert_eq!(clipboard.contents, None);
    }

    #[test]
    fn copy_writes_password_and_acknowledges() {
        let mut form = form();
        let mut clipboard = FakeClipboard::default();
        let now = Instant::now();
        form.generate_with(&mut StdRng::seed_from_u64(8));

        form.apply(Action::Copy, &mut clipboard, now);

        assert_eq!(clipboard.contents, Some(password(&form)));
        assert!(form.copied_visible(now));
        assert_eq!(form.ack_remaining(now), Some(COPY_ACK));
    }

    #[test]
    fn acknowledgement_expires() {
        let mut form = form();
        let mut clipboard = FakeClipboard::default();
        let now = Instant::now();
        form.generate_with(&mut StdRng::seed_from_u64(8));
        form.copy(&mut clipboard, now);

        assert!(form.copied_visible(now + Duration::from_millis(1_999)));
        assert!(!form.copied_visible(now + COPY_ACK));
    }

    #[test]
    fn new_generation_cancels_acknowledgement() {
        let mut form = form();
        let mut clipboard = FakeClipboard::default();
        let now = Instant::now();
        let mut rng = StdRng::seed_from_u64(8);
        form.generate_with(&mut rng);
        form.copy(&mut clipboard, now);

        form.generate_with(&mut rng);

        assert!(!form.copied_visible(now + Duration::from_millis(10)));
        assert_eq!(form.ack_remaining(now), None);
    }

    #[test]
    fn clipboard_failure_becomes_notice() {
        let mut form = form();
        let mut clipboard = FakeClipboard {
            fail: true,
            ..Default::default()
        };
        let now = Instant::now();
        form.generate_with(&mut StdRng::seed_from_u64(8));

        form.apply(Action::Copy, &mut clipboard, now);

        assert!(!form.copied_visible(now));
        let notice = form.notice().unwrap();
        assert!(notice.is_error);
        assert_eq!(notice.text, "Clipboard error: no display");
    }

    #[test]
    fn editing_options_keeps_current_password() {
        let mut form = form();
        let mut clipboard = FakeClipboard::default();
        let now = Instant::now();
        form.generate_with(&mut StdRng::seed_from_u64(11));
        let before = password(&form);

        form.apply(Action::Lengthen, &mut clipboard, now);
        form.apply(Action::Toggle(CharClass::Symbols), &mut clipboard, now);

        assert_eq!(password(&form), before);
        assert_eq!(form.options().length, 17);
        assert!(!form.options().symbols);
    }

    #[test]
    fn generate_action_uses_current_options() {
        let mut form = form();
        let mut clipboard = FakeClipboard::default();
        let now = Instant::now();
        form.apply(Action::Shorten, &mut clipboard, now);
        form.apply(Action::Toggle(CharClass::Lowercase), &mut clipboard, now);
        form.apply(Action::Toggle(CharClass::Uppercase), &mut clipboard, now);
        form.apply(Action::Toggle(CharClass::Symbols), &mut clipboard, now);

        form.apply(Action::Generate, &mut clipboard, now);

        let password = password(&form);
        assert_eq!(password.len(), 15);
        assert!(password.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn toggles_entropy_and_help() {
        let mut form = form();
        let mut clipboard = FakeClipboard::default();
        let now = Instant::now();

        form.apply(Action::ToggleEntropy, &mut clipboard, now);
        assert_eq!(form.settings().entropy, EntropySource::Os);

        form.apply(Action::Help, &mut clipboard, now);
        assert!(form.showing_help());
        form.apply(Action::Lengthen, &mut clipboard, now);
        assert!(!form.showing_help());

        assert_eq!(form.apply(Action::Quit, &mut clipboard, now), Flow::Quit);
    }

    #[test]
    fn save_writes_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        let mut form = Form::new(Settings::default(), path.clone());
        let mut clipboard = FakeClipboard::default();
        let now = Instant::now();

        form.apply(Action::Lengthen, &mut clipboard, now);
        form.apply(Action::Save, &mut clipboard, now);

        assert!(!form.notice().unwrap().is_error);
        assert_eq!(Settings::load_from(&path).unwrap().options.length, 17);
    }
}
