//! Password generation core: character classes, selection state, generator.

pub mod charset;
mod generate;
mod selection;

pub use charset::CharacterClass;
pub use generate::{GenerateError, GenerationRequest, Password, generate, generate_batch};
pub use selection::Selection;
