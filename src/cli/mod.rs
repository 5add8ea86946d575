//! Non-interactive command line mode.

mod args;
pub mod prompts;
pub mod quiet;

use std::io::{self, Write};

use anyhow::{Context, Result};
use zeroize::Zeroizing;

use crate::clipboard::{Clipboard, SystemClipboard};
use crate::entropy;
use crate::pass::{self, GenerationRequest, Password};
use crate::settings::{self, Settings};
use crate::tui;

pub use args::Cli;

/// Saved defaults, or built-in ones when the file can't be read.
pub fn saved_settings() -> Settings {
    Settings::load_from_file().unwrap_or_else(|e| {
        prompts::warn(&format!("Failed to load settings: {e}"));
        Settings::default()
    })
}

pub fn run(cli: Cli) -> Result<()> {
    quiet::set(cli.quiet);

    let settings = cli.apply(saved_settings());

    if cli.save {
        settings
            .save_to_file()
            .context("could not save defaults")?;
        prompts::settings_saved(&settings::get_path().display().to_string());
    }

    if cli.interactive {
        return tui::run(settings, cli.seed);
    }

    let request = GenerationRequest::from_selection(settings.selection, settings.length);
    let mut rng = entropy::select(settings.source, cli.seed);
    let passwords = pass::generate_batch(&request, cli.number, &mut *rng)?;

    if cli.board {
        match SystemClipboard::new() {
            Ok(mut clipboard) => return copy_all(&mut clipboard, &passwords),
            Err(e) => prompts::clipboard_fallback(&e.to_string()),
        }
    }

    print_all(&passwords)
}

fn copy_all(clipboard: &mut dyn Clipboard, passwords: &[Password]) -> Result<()> {
    let joined = Zeroizing::new(
        passwords
            .iter()
            .map(Password::as_str)
            .collect::<Vec<_>>()
            .join("\n"),
    );
    match clipboard.write(&joined) {
        Ok(()) => {
            prompts::clipboard_copied(passwords.len());
            Ok(())
        }
        Err(e) => {
            prompts::clipboard_fallback(&e.to_string());
            print_all(passwords)
        }
    }
}

fn print_all(passwords: &[Password]) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for p in passwords {
        out.write_all(p.as_str().as_bytes())?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}
