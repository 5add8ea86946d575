//! Interactive password form.

pub mod form;
mod input;
pub mod pulse;
mod text;

use std::time::Instant;

use anyhow::Result;

use crate::clipboard::{CopyError, SystemClipboard};
use crate::settings::Settings;
use crate::terminal::{clear, read_key, reset_terminal};

use form::{Action, Form, Status};

/// Run the form until the user quits. A `seed` makes its passwords
/// reproducible until the source is switched or reset.
pub fn run(settings: Settings, seed: Option<u64>) -> Result<()> {
    let mut form = Form::new(&settings, seed);
    let mut clipboard: Option<SystemClipboard> = None;

    loop {
        let now = Instant::now();
        clear();
        text::form_frame(&mut form, now).print();

        let Some(key) = read_key(form.poll_timeout(now))? else {
            continue;
        };
        form.clear_status();

        match form::action_for(&key) {
            Action::Toggle(class) => {
                form.toggle(class);
            }
            Action::Longer => form.longer(),
            Action::Shorter => form.shorter(),
            Action::EditLength => {
                if let Some(length) = input::read_length(form.length())? {
                    form.set_length(length);
                }
            }
            Action::Generate => {
                if let Err(e) = form.generate() {
                    form.report(Status::Error(e.to_string()));
                }
            }
            Action::Copy => match system_clipboard(&mut clipboard) {
                Ok(clip) => {
                    form.copy(clip, Instant::now());
                }
                Err(e) => {
                    log::warn!("{e}");
                    form.report(Status::Error(e.to_string()));
                }
            },
            Action::Save => match form.to_settings().save_to_file() {
                Ok(()) => form.report(Status::Info("Settings saved".into())),
                Err(e) => form.report(Status::Error(e.to_string())),
            },
            Action::Reset => form.reset(),
            Action::SwitchSource => {
                form.switch_source();
            }
            Action::Help => {
                clear();
                text::help_frame().print();
                read_key(None)?;
            }
            Action::Quit => break,
            Action::Ignore => {}
        }
    }

    clear();
    reset_terminal();
    Ok(())
}

/// Open the system clipboard on first use and keep it for the session.
fn system_clipboard(slot: &mut Option<SystemClipboard>) -> Result<&mut SystemClipboard, CopyError> {
    if slot.is_none() {
        *slot = Some(SystemClipboard::new()?);
    }
    slot.as_mut()
        .ok_or_else(|| CopyError::Unavailable("clipboard not initialised".into()))
}
