use std::time::Instant;

use super::{Form, Output};
use crate::error::NO_CLASS_MESSAGE;
use crate::pass::{CharClass, charset};
use crate::settings::{MAX_LENGTH, MIN_LENGTH};
use crate::terminal::{
    BLUE, BOLD, DIM, GREEN, RED, RESET, UNDERLINE, YELLOW, bottom, clear, console_width, flush, line,
    line_center, meter, opt, rule, top,
};

const METER_WIDTH: usize = 48;
const PLACEHOLDER: &str = "Your password will appear here";
const FOOTER: &str = "Your password is generated locally and never sent to any server";

/// Key order on screen; digits 1-4 follow it.
const FORM_ORDER: [CharClass; 4] = [
    CharClass::Uppercase,
    CharClass::Lowercase,
    CharClass::Numbers,
    CharClass::Symbols,
];

/// Password text on the left, copy state on the right.
fn password_line(form: &Form, now: Instant) -> String {
    let (text, status) = match form.output() {
        Output::Empty => (format!("{DIM}{PLACEHOLDER}{RESET}"), String::new()),
        Output::NoClass => (format!("{RED}{NO_CLASS_MESSAGE}{RESET}"), String::new()),
        Output::Password(password) => {
            let status = if form.copied_visible(now) {
                format!("{GREEN}✓ Copied{RESET}")
            } else {
                format!("{DIM}c) copy{RESET}")
            };
            (format!("{BOLD}{}{RESET}", password.as_str()), status)
        }
    };

    let gap = METER_WIDTH
        .saturating_sub(console_width(&text) + console_width(&status))
        .max(1);
    line(&format!("{text}{}{status}", " ".repeat(gap)))
}

fn strength_lines(form: &Form) -> Vec<String> {
    let Some(rating) = form.strength() else {
        return vec![line(""), line("")];
    };

    let tier = rating.tier;
    let label = format!("{}{}{RESET}", tier.color(), tier.label());
    let gap = METER_WIDTH.saturating_sub("Strength".len() + tier.label().len());
    vec![
        line(&format!("{DIM}Strength{RESET}{}{label}", " ".repeat(gap))),
        line(&meter(tier.fill_percent(), METER_WIDTH, tier.color())),
    ]
}

fn length_lines(form: &Form) -> Vec<String> {
    let length = form.options().length;
    let percent = ((length - MIN_LENGTH) * 100 / (MAX_LENGTH - MIN_LENGTH)) as u8;
    let range = format!("{MIN_LENGTH}{}{MAX_LENGTH}", " ".repeat(METER_WIDTH - 3));

    vec![
        line(&format!("Length: {BLUE}{length}{RESET}   {DIM}←/→ adjust{RESET}")),
        line(&meter(percent, METER_WIDTH, BLUE)),
        line(&format!("{DIM}{range}{RESET}")),
    ]
}

fn class_lines(form: &Form) -> Vec<String> {
    let options = form.options();
    FORM_ORDER
        .iter()
        .enumerate()
        .map(|(i, class)| {
            let mark = if options.includes(*class) {
                format!("{BLUE}[x]{RESET}")
            } else {
                "[ ]".to_string()
            };
            line(&format!("{mark} {}) {}", i + 1, class.label()))
        })
        .collect()
}

/// Every line of the form, top to bottom.
pub fn form_lines(form: &Form, now: Instant) -> Vec<String> {
    let options = form.options();
    let entropy = charset::entropy_bits(options.length, charset::size(&options));
    let source = form.settings().entropy;

    let mut lines = vec![
        top("Password Generator"),
        line_center(&format!("{DIM}Create secure passwords instantly{RESET}")),
        line(""),
        password_line(form, now),
    ];
    lines.extend(strength_lines(form));
    lines.push(rule());
    lines.extend(length_lines(form));
    lines.push(line(""));
    lines.extend(class_lines(form));
    lines.push(line(""));
    lines.push(line(&format!(
        "{DIM}Pool: {} chars • {:.1} bits{RESET}",
        charset::size(&options),
        entropy
    )));
    lines.push(line(&format!("{DIM}Source: {} (e){RESET}", source.describe())));
    lines.push(rule());
    lines.push(line_center("Enter) generate  c) copy  h) help  q) quit"));
    lines.push(bottom());
    lines.push(format!("{DIM}{FOOTER}{RESET}"));

    match form.notice() {
        Some(notice) if notice.is_error => lines.push(format!("{RED}{}{RESET}", notice.text)),
        Some(notice) => lines.push(format!("{GREEN}{}{RESET}", notice.text)),
        None => lines.push(String::new()),
    }
    lines
}

pub fn help_lines() -> Vec<String> {
    vec![
        top("Help"),
        line_center("Password Generator"),
        line(""),
        line(&format!("{UNDERLINE}Form keys{RESET}:")),
        opt("  1-4, u/l/n/s", "toggle a character class"),
        opt("  ←/→, -/+", "password length (4-32)"),
        opt("  Enter, g", "generate a password"),
        opt("  c", "copy password to clipboard"),
        opt("  e", "switch random source"),
        opt("  w", "save options as defaults"),
        opt("  h, ?", "toggle this help"),
        opt("  q, Esc", "quit"),
        line(""),
        line(&format!("{UNDERLINE}Strength{RESET}: one point each for")),
        line("  8+, 12+ and 16+ characters, mixed case,"),
        line("  a digit, and a symbol."),
        line(&format!(
            "  {RED}Weak{RESET} 0-2  {YELLOW}Medium{RESET} 3-4  {GREEN}Strong{RESET} 5-6"
        )),
        line(""),
        line(&format!("{UNDERLINE}Command line{RESET}: passgen --help")),
        bottom(),
    ]
}

/// Redraw the whole screen.
pub fn draw(form: &Form, now: Instant) {
    clear();
    let lines = if form.showing_help() {
        help_lines()
    } else {
        form_lines(form, now)
    };
    for row in lines {
        println!("{row}");
    }
    flush();
}
