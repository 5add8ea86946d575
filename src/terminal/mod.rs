//! Shared terminal utilities.
//!
//! Box drawing, raw mode management, key reads and ANSI helpers.

mod output;
mod raw_mode;

pub use output::*;
pub use raw_mode::*;
