//! Password generator form: character-class selection, generation and
//! clipboard copy, with a terminal form and a command line on top.

pub mod cli;
pub mod clipboard;
pub mod entropy;
pub mod exits;
pub mod pass;
pub mod settings;
pub mod terminal;
pub mod tui;

pub use pass::{
    CharacterClass, GenerateError, GenerationRequest, Password, Selection, generate,
};
