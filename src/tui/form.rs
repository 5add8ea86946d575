//! Form state and key bindings, independent of the terminal.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::RngCore;

use super::pulse::Pulse;
use crate::clipboard::{self, Clipboard};
use crate::entropy::{self, Source};
use crate::pass::{self, CharacterClass, GenerateError, GenerationRequest, Password, Selection};
use crate::settings::{self, Settings};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Toggle(CharacterClass),
    Longer,
    Shorter,
    EditLength,
    Generate,
    Copy,
    Save,
    Reset,
    SwitchSource,
    Help,
    Quit,
    Ignore,
}

pub fn action_for(key: &KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Action::Quit,
            _ => Action::Ignore,
        };
    }

    match key.code {
        KeyCode::Char(d @ '1'..='4') => CharacterClass::from_index(d as usize - '1' as usize)
            .map(Action::Toggle)
            .unwrap_or(Action::Ignore),
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right | KeyCode::Up => Action::Longer,
        KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Left | KeyCode::Down => Action::Shorter,
        KeyCode::Char('l') => Action::EditLength,
        KeyCode::Enter | KeyCode::Char('g') => Action::Generate,
        KeyCode::Char('c') => Action::Copy,
        KeyCode::Char('s') => Action::Save,
        KeyCode::Char('r') => Action::Reset,
        KeyCode::Char('u') => Action::SwitchSource,
        KeyCode::Char('h') | KeyCode::Char('?') => Action::Help,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => Action::Ignore,
    }
}

/// One-line message under the checkboxes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Info(String),
    Error(String),
}

pub struct Form {
    selection: Selection,
    length: usize,
    source: Source,
    pulse_ms: u64,
    rng: Box<dyn RngCore>,
    /// Source `rng` was built from; `None` while it runs from a fixed seed.
    rng_source: Option<Source>,
    password: Option<Password>,
    status: Option<Status>,
    pulse: Pulse,
}

impl Form {
    /// A fixed `seed` replaces the settings' source until the source is
    /// switched or reset.
    pub fn new(settings: &Settings, seed: Option<u64>) -> Self {
        Self {
            selection: settings.selection,
            length: settings::clamp_length(settings.length),
            source: settings.source,
            pulse_ms: settings.pulse_ms,
            rng: entropy::select(settings.source, seed),
            rng_source: seed.is_none().then_some(settings.source),
            password: None,
            status: None,
            pulse: Pulse::new(settings.pulse()),
        }
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn source(&self) -> Source {
        self.source
    }

    /// The source passwords are drawn from, or `None` when seeded.
    pub fn rng_source(&self) -> Option<Source> {
        self.rng_source
    }

    pub fn rng_label(&self) -> &'static str {
        match self.rng_source {
            Some(source) => source.describe(),
            None => "seeded rng (reproducible)",
        }
    }

    pub fn password(&self) -> Option<&Password> {
        self.password.as_ref()
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    pub fn report(&mut self, status: Status) {
        self.status = Some(status);
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    /// Returns false when the toggle was refused (last enabled class).
    pub fn toggle(&mut self, class: CharacterClass) -> bool {
        let next = self.selection.toggle(class);
        let changed = next != self.selection;
        self.selection = next;
        changed
    }

    pub fn set_length(&mut self, length: usize) {
        self.length = settings::clamp_length(length);
    }

    pub fn longer(&mut self) {
        self.set_length(self.length.saturating_add(1));
    }

    pub fn shorter(&mut self) {
        self.set_length(self.length.saturating_sub(1));
    }

    pub fn switch_source(&mut self) -> Source {
        self.use_source(self.source.toggled());
        self.source
    }

    fn use_source(&mut self, source: Source) {
        self.source = source;
        self.rng = entropy::select(source, None);
        self.rng_source = Some(source);
    }

    /// Replace the shown password with a fresh one.
    pub fn generate(&mut self) -> Result<&Password, GenerateError> {
        let request = GenerationRequest::from_selection(self.selection, self.length);
        let password = pass::generate(&request, &mut *self.rng)?;
        self.pulse.cancel();
        Ok(self.password.insert(password))
    }

    /// Copy the shown password and start the highlight pulse.
    /// The outcome lands in the status line; a failure leaves the form as is.
    pub fn copy(&mut self, clipboard: &mut dyn Clipboard, now: Instant) -> bool {
        match clipboard::copy_password(clipboard, self.password.as_ref()) {
            Ok(()) => {
                self.pulse.trigger(now);
                self.status = Some(Status::Info("Copied to clipboard".into()));
                true
            }
            Err(e) => {
                log::warn!("copy failed: {e}");
                self.status = Some(Status::Error(e.to_string()));
                false
            }
        }
    }

    /// Whether the password should be drawn highlighted at `now`.
    pub fn highlighted(&mut self, now: Instant) -> bool {
        self.pulse.is_active(now)
    }

    /// How long the event loop may block before the next redraw is due.
    pub fn poll_timeout(&self, now: Instant) -> Option<Duration> {
        self.pulse.remaining(now)
    }

    pub fn to_settings(&self) -> Settings {
        Settings {
            length: self.length,
            selection: self.selection,
            source: self.source,
            pulse_ms: self.pulse_ms,
        }
    }

    /// Back to defaults, including an unseeded generator; the current
    /// password stays on screen.
    pub fn reset(&mut self) {
        let defaults = Settings::default();
        self.selection = defaults.selection;
        self.length = defaults.length;
        self.use_source(defaults.source);
    }
}
