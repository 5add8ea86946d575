//! Terminal output utilities.
//!
//! Box drawing into a frame buffer, ANSI helpers.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const ITALIC: &str = "\x1b[3m";
pub const RED: &str = "\x1b[38;5;9m";
pub const BLUE: &str = "\x1b[38;5;33m";

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

/// Reset terminal to sane state (raw mode off, attributes off, cursor shown).
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}\x1b[?25h");
    flush();
}

// ============================================================================
// Box Drawing (60 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 60;

/// A screen's worth of boxed lines, printed in one go.
#[derive(Debug, Default)]
pub struct Frame {
    buf: String,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Box top with optional title: ┌─ Title ─────────┐
    pub fn top(&mut self, title: &str) -> &mut Self {
        if title.is_empty() {
            self.push(format!("┌{}┐", "─".repeat(BOX_WIDTH - 2)));
        } else {
            let title_part = format!("─ {} ", title);
            let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
            self.push(format!("┌{}{}┐", title_part, "─".repeat(remaining)));
        }
        self
    }

    /// Box content line: │ content             │
    pub fn line(&mut self, content: &str) -> &mut Self {
        let inner_width = BOX_WIDTH - 4;
        let padding = inner_width.saturating_sub(display_width(content));
        self.push(format!("│ {}{} │", content, " ".repeat(padding)));
        self
    }

    /// Centered content line: │      content      │
    pub fn center(&mut self, content: &str) -> &mut Self {
        let inner_width = BOX_WIDTH - 4;
        let total_padding = inner_width.saturating_sub(display_width(content));
        let left_pad = total_padding / 2;
        let right_pad = total_padding - left_pad;
        self.push(format!(
            "│ {}{}{} │",
            " ".repeat(left_pad),
            content,
            " ".repeat(right_pad)
        ));
        self
    }

    /// Horizontal rule: ├──────┤
    pub fn rule(&mut self) -> &mut Self {
        self.push(format!("├{}┤", "─".repeat(BOX_WIDTH - 2)));
        self
    }

    /// Box bottom: └──────┘
    pub fn bottom(&mut self) -> &mut Self {
        self.push(format!("└{}┘", "─".repeat(BOX_WIDTH - 2)));
        self
    }

    /// Key/description pair, wrapping the description if needed.
    pub fn opt(&mut self, key: &str, desc: &str) -> &mut Self {
        let inner_width = BOX_WIDTH - 4;
        let key_col = 18;
        let desc_col = inner_width - key_col;

        let key_padded = format!("{:<width$}", key, width = key_col);

        let mut lines: Vec<String> = Vec::new();
        let mut current = String::new();
        for word in desc.split_whitespace() {
            if current.is_empty() {
                current = word.to_string();
            } else if current.len() + 1 + word.len() <= desc_col {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                current = word.to_string();
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }

        let first = lines.first().map(String::as_str).unwrap_or("");
        self.line(&format!("{key_padded}{first}"));
        let indent = " ".repeat(key_col);
        for line in lines.iter().skip(1) {
            self.line(&format!("{indent}{line}"));
        }
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.line("")
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Write the frame to stdout.
    pub fn print(&self) {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let _ = out.write_all(self.buf.as_bytes());
        let _ = out.flush();
    }

    fn push(&mut self, line: String) {
        self.buf.push_str(&line);
        self.buf.push_str("\r\n");
    }
}

/// Display width ignoring ANSI escape sequences.
pub fn display_width(s: &str) -> usize {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_width_skips_escapes() {
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width(&format!("{BLUE}abc{RESET}")), 3);
        assert_eq!(display_width("│ ─"), 3);
    }

    #[test]
    fn every_line_has_box_width() {
        let mut frame = Frame::new();
        frame
            .top("Title")
            .line("hello")
            .center(&format!("{BOLD}centered{RESET}"))
            .rule()
            .opt("[1]", "a long description that needs to wrap onto a second line for sure")
            .bottom();
        for line in frame.as_str().split("\r\n").filter(|l| !l.is_empty()) {
            assert_eq!(display_width(line), BOX_WIDTH, "bad width: {line:?}");
        }
    }

    #[test]
    fn opt_wraps_long_descriptions() {
        let mut frame = Frame::new();
        frame.opt("[x]", "one two three four five six seven eight nine ten eleven twelve");
        assert!(frame.as_str().matches("\r\n").count() >= 2);
    }
}
