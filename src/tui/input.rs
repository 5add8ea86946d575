use std::io;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::settings::{MAX_LENGTH, MIN_LENGTH, clamp_length};
use crate::terminal::{flush, read_key};

/// Result of feeding one key to the line editor.
#[derive(Debug, PartialEq, Eq)]
pub enum Edit {
    Continue,
    Done,
    Cancel,
}

/// Digit-only line editor state with a 0-based cursor.
#[derive(Debug, Default)]
pub struct DigitLine {
    pub digits: String,
    pub cursor: usize,
}

impl DigitLine {
    pub fn new(initial: usize) -> Self {
        let digits = initial.to_string();
        let cursor = digits.len();
        Self { digits, cursor }
    }

    pub fn apply(&mut self, key: &KeyEvent) -> Edit {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') if ctrl => return Edit::Cancel,
            KeyCode::Char('u') if ctrl => {
                self.digits.clear();
                self.cursor = 0;
            }
            KeyCode::Esc => return Edit::Cancel,
            KeyCode::Enter => return Edit::Done,
            KeyCode::Backspace if self.cursor > 0 => {
                self.cursor -= 1;
                self.digits.remove(self.cursor);
            }
            KeyCode::Delete if self.cursor < self.digits.len() => {
                self.digits.remove(self.cursor);
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.digits.len()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.digits.len(),
            // Two digits cover the whole range.
            KeyCode::Char(c) if c.is_ascii_digit() && self.digits.len() < 2 => {
                self.digits.insert(self.cursor, c);
                self.cursor += 1;
            }
            _ => {}
        }
        Edit::Continue
    }

    /// Parsed value clamped into the allowed range; `None` when empty.
    pub fn value(&self) -> Option<usize> {
        self.digits.parse().ok().map(clamp_length)
    }
}

/// Prompt for a new length below the form. `None` when cancelled.
pub fn read_length(initial: usize) -> io::Result<Option<usize>> {
    let prompt = format!("Password length ({MIN_LENGTH}-{MAX_LENGTH})");
    let mut line = DigitLine::new(initial);

    loop {
        print!("\r\x1b[2K{}: {}", prompt, line.digits);
        print!("\x1b[{}G", prompt.len() + 3 + line.cursor);
        flush();

        let Some(key) = read_key(None)? else {
            continue;
        };
        match line.apply(&key) {
            Edit::Continue => {}
            Edit::Done => {
                println!();
                return Ok(line.value());
            }
            Edit::Cancel => {
                println!();
                return Ok(None);
            }
        }
    }
}
