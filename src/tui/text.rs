use std::time::Instant;

use super::form::{Form, Status};
use crate::pass::CharacterClass;
use crate::settings::{MAX_LENGTH, MIN_LENGTH};
use crate::terminal::{BLUE, BOLD, DIM, Frame, ITALIC, RED, RESET};

const PLACEHOLDER: &str = "Your password will be generated here";
const SLIDER_WIDTH: usize = 30;

/// Draw the whole form for the moment `now`.
pub fn form_frame(form: &mut Form, now: Instant) -> Frame {
    let highlighted = form.highlighted(now);
    let mut frame = Frame::new();

    frame.top("Passform").blank();

    match form.password() {
        Some(p) if highlighted => frame.center(&format!("{BLUE}{BOLD}{}{RESET}", p.as_str())),
        Some(p) => frame.center(p.as_str()),
        None => frame.center(&format!("{DIM}{ITALIC}{PLACEHOLDER}{RESET}")),
    };

    let copy = if highlighted {
        format!("{BLUE}[c] Copied{RESET}")
    } else {
        "[c] Copy".to_string()
    };
    frame.center(&copy).rule();

    frame
        .center(&slider(form.length()))
        .center(&format!(
            "{ITALIC}Character length {BOLD}{}{RESET}",
            form.length()
        ))
        .rule();

    let selection = form.selection();
    for class in CharacterClass::ALL {
        let mark = if selection.is_enabled(class) { "[x]" } else { "[ ]" };
        let line = format!("{}) {} {}", class.index() + 1, mark, class.label());
        if selection.is_locked(class) {
            frame.line(&format!("{DIM}{line}{RESET}"));
        } else {
            frame.line(&line);
        }
    }

    frame.rule();
    match form.status() {
        Some(Status::Info(msg)) => frame.line(msg),
        Some(Status::Error(msg)) => frame.line(&format!("{RED}{msg}{RESET}")),
        None => frame.line(&format!("{DIM}source: {}{RESET}", form.rng_label())),
    };
    frame
        .center("[Enter] Generate  [1-4] Classes  [-/+] Length")
        .center("[l] Type length  [s] Save  [h] Help  [q] Quit")
        .bottom();

    frame
}

/// Range slider: 1 [=====|--------] 50
fn slider(length: usize) -> String {
    let span = MAX_LENGTH - MIN_LENGTH;
    let pos = (length.saturating_sub(MIN_LENGTH) * (SLIDER_WIDTH - 1) + span / 2) / span;
    let pos = pos.min(SLIDER_WIDTH - 1);
    format!(
        "{MIN_LENGTH} [{}|{}] {MAX_LENGTH}",
        "=".repeat(pos),
        "-".repeat(SLIDER_WIDTH - 1 - pos)
    )
}

pub fn help_frame() -> Frame {
    let mut frame = Frame::new();
    frame
        .top("Passform")
        .center("Password generator form")
        .blank()
        .line("KEYS:")
        .opt("  1-4", "Toggle lowercase, uppercase, numbers, symbols. The last enabled class cannot be turned off.")
        .opt("  + / - / arrows", "Change length by one (1-50)")
        .opt("  l", "Type a length")
        .opt("  Enter, g", "Generate a new password")
        .opt("  c", "Copy the password to the clipboard")
        .opt("  u", "Switch between thread and OS random source")
        .opt("  s", "Save length, classes and source as defaults")
        .opt("  r", "Reset to defaults")
        .opt("  q, Esc", "Quit")
        .blank()
        .line("COMMAND LINE:")
        .line("  passform -l 16 -aAd       one password, 16 chars")
        .line("  passform -l 20 -n 3 -y   three symbol-only passwords")
        .line("  passform -b              copy to clipboard")
        .line("  passform --help          all flags")
        .blank()
        .center(&format!("{DIM}press any key{RESET}"))
        .bottom();
    frame
}
