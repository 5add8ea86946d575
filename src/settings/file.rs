//! Settings file persistence.
//!
//! One line: `length,lower,upper,digits,symbols,source,pulse_ms`.

use std::env;
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use super::{Settings, clamp_length};
use crate::pass::Selection;

const FIELDS: usize = 7;

pub fn save(settings: &Settings, path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let [lower, upper, digits, symbols] = settings.selection.flags();
    let data = format!(
        "{},{},{},{},{},{},{}\n",
        settings.length, lower, upper, digits, symbols, settings.source, settings.pulse_ms
    );

    file.write_all(data.as_bytes())?;
    log::info!("settings saved to {}", path.display());
    Ok(())
}

pub fn load(settings: &mut Settings, path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        log::info!("no settings at {}, writing defaults", path.display());
        return save(settings, path);
    }

    let file = OpenOptions::new().read(true).open(path)?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    let parts: Vec<&str> = line.trim().split(',').collect();
    if parts.len() != FIELDS {
        log::warn!(
            "settings at {} has {} fields, expected {}; rewriting defaults",
            path.display(),
            parts.len(),
            FIELDS
        );
        return save(settings, path);
    }

    settings.length = clamp_length(parts[0].parse().unwrap_or(settings.length));

    let defaults = settings.selection.flags();
    let mut flags = [false; 4];
    for (i, flag) in flags.iter_mut().enumerate() {
        *flag = parts[1 + i].parse().unwrap_or(defaults[i]);
    }
    settings.selection = Selection::from_flags(flags).unwrap_or_else(|| {
        log::warn!("settings enable no character class; using default selection");
        Selection::default()
    });

    settings.source = parts[5].parse().unwrap_or(settings.source);
    settings.pulse_ms = parts[6].parse().unwrap_or(settings.pulse_ms);

    Ok(())
}

pub fn get_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    Path::new(&home).join(".config/passform/settings")
}
