//! Terminal output utilities.
//!
//! Box drawing, the strength meter, ANSI helpers.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[90m";
pub const UNDERLINE: &str = "\x1b[4m";
pub const RED: &str = "\x1b[38;5;9m";
pub const YELLOW: &str = "\x1b[38;5;11m";
pub const GREEN: &str = "\x1b[38;5;10m";
pub const BLUE: &str = "\x1b[38;5;12m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

pub fn hide_cursor() {
    print!("\x1b[?25l");
    flush();
}

pub fn show_cursor() {
    print!("\x1b[?25h");
    flush();
}

/// Reset terminal to sane state.
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}");
    show_cursor();
}

// ============================================================================
// Box Drawing (52 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 52;
const INNER_WIDTH: usize = BOX_WIDTH - 4;

/// ┌─ Title ──────────┐
pub fn top(title: &str) -> String {
    if title.is_empty() {
        format!("┌{}┐", "─".repeat(BOX_WIDTH - 2))
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(console_width(&title_part));
        format!("┌{}{}┐", title_part, "─".repeat(remaining))
    }
}

/// │ content          │
pub fn line(content: &str) -> String {
    let padding = INNER_WIDTH.saturating_sub(console_width(content));
    format!("│ {}{} │", content, " ".repeat(padding))
}

/// │     content      │
pub fn line_center(content: &str) -> String {
    let total_padding = INNER_WIDTH.saturating_sub(console_width(content));
    let left_pad = total_padding / 2;
    let right_pad = total_padding - left_pad;
    format!(
        "│ {}{}{} │",
        " ".repeat(left_pad),
        content,
        " ".repeat(right_pad)
    )
}

/// ├──────────────────┤
pub fn rule() -> String {
    format!("├{}┤", "─".repeat(BOX_WIDTH - 2))
}

/// └──────────────────┘
pub fn bottom() -> String {
    format!("└{}┘", "─".repeat(BOX_WIDTH - 2))
}

/// Key and description in two columns, for help text.
pub fn opt(key: &str, desc: &str) -> String {
    let key_col = 16;
    line(&format!("{:<key_col$}{}", key, desc))
}

/// Display width ignoring ANSI escape codes.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

// ============================================================================
// Strength Meter
// ============================================================================

/// Horizontal bar `width` cells wide, `percent` of it filled in `color`.
pub fn meter(percent: u8, width: usize, color: &str) -> String {
    let filled = if percent >= 100 {
        width
    } else {
        (percent as usize * width) / 100
    };
    format!(
        "{color}{}{RESET}{DIM}{}{RESET}",
        "█".repeat(filled),
        "░".repeat(width - filled)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_lines_share_width() {
        let rows = [
            top("Password Generator"),
            line("hello"),
            line_center("centered"),
            line(&format!("{RED}colored{RESET}")),
            rule(),
            bottom(),
        ];
        for row in &rows {
            assert_eq!(console_width(row), BOX_WIDTH, "{row}");
        }
    }

    #[test]
    fn width_skips_escape_codes() {
        assert_eq!(console_width(&format!("{GREEN}ok{RESET}")), 2);
    }

    #[test]
    fn meter_fills_by_percent() {
        let bar = meter(33, 30, RED);
        assert_eq!(console_width(&bar), 30);
        assert_eq!(bar.matches('█').count(), 9);

        let full = meter(100, 30, GREEN);
        assert_eq!(full.matches('█').count(), 30);
        assert_eq!(full.matches('░').count(), 0);
    }
}
