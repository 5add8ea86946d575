use clap::Parser;

use crate::entropy::Source;
use crate::pass::Selection;
use crate::settings::{MAX_LENGTH, MIN_LENGTH, Settings};

/// Upper bound for `--number`.
pub const MAX_COUNT: usize = 10_000;

#[derive(Parser, Debug)]
#[command(
    name = "passform",
    version,
    about = "Password generator with selectable character classes",
    after_help = "Run without arguments to open the interactive form."
)]
pub struct Cli {
    /// Characters per password (1-50)
    #[arg(short, long, value_parser = parse_length)]
    pub length: Option<usize>,

    /// Include lowercase letters
    #[arg(short = 'a', long)]
    pub lower: bool,

    /// Include uppercase letters
    #[arg(short = 'A', long)]
    pub upper: bool,

    /// Include digits
    #[arg(short, long)]
    pub digits: bool,

    /// Include symbols
    #[arg(short = 'y', long)]
    pub symbols: bool,

    /// How many passwords to generate (1-10000)
    #[arg(short, long, default_value_t = 1, value_parser = parse_count)]
    pub number: usize,

    /// Copy to clipboard instead of printing
    #[arg(short = 'b', long)]
    pub board: bool,

    /// Use the operating system RNG for every draw
    #[arg(short, long)]
    pub urandom: bool,

    /// Seed for reproducible output, also in the interactive form
    #[arg(long)]
    pub seed: Option<u64>,

    /// Suppress warnings and confirmations
    #[arg(short, long)]
    pub quiet: bool,

    /// Open the interactive form with these options
    #[arg(short, long)]
    pub interactive: bool,

    /// Save length, classes and source as defaults
    #[arg(short, long)]
    pub save: bool,
}

impl Cli {
    /// Classes named on the command line, if any were.
    pub fn selection(&self) -> Option<Selection> {
        Selection::from_flags([self.lower, self.upper, self.digits, self.symbols])
    }

    /// Layer the flags over saved settings.
    pub fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(length) = self.length {
            settings.length = length;
        }
        if let Some(selection) = self.selection() {
            settings.selection = selection;
        }
        if self.urandom {
            settings.source = Source::Os;
        }
        settings
    }
}

fn parse_length(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|_| format!("`{s}` is not a number"))?;
    if (MIN_LENGTH..=MAX_LENGTH).contains(&n) {
        Ok(n)
    } else {
        Err(format!("length must be between {MIN_LENGTH} and {MAX_LENGTH}"))
    }
}

fn parse_count(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(n) if (1..=MAX_COUNT).contains(&n) => Ok(n),
        Ok(_) => Err(format!("number must be between 1 and {MAX_COUNT}")),
        Err(_) => Err(format!("`{s}` is not a number")),
    }
}
