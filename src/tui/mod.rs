//! Interactive password form.

mod form;
mod input;
mod text;

use std::time::Instant;

pub use form::*;
pub use input::*;
pub use text::*;

use crate::clipboard::SystemClipboard;
use crate::error::Result;
use crate::settings::Settings;
use crate::terminal::{clear, hide_cursor, reset_terminal};

/// Run the form until the user quits.
///
/// Redraws after every action, and also when a copy confirmation runs out so
/// the indicator clears without a key press.
pub fn run(settings: Settings) -> Result<()> {
    let mut form = Form::new(settings, Settings::path());
    let mut clipboard = SystemClipboard::new();

    hide_cursor();
    let result = event_loop(&mut form, &mut clipboard);
    clear();
    reset_terminal();
    result
}

fn event_loop(form: &mut Form, clipboard: &mut SystemClipboard) -> Result<()> {
    loop {
        let now = Instant::now();
        draw(form, now);

        let Some(action) = next_action(form.ack_remaining(now))? else {
            continue;
        };

        log::debug!("form action {action:?}");
        if form.apply(action, clipboard, Instant::now()) == Flow::Quit {
            return Ok(());
        }
    }
}
