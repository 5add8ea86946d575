//! Character classes and alphabet assembly.

use std::fmt;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// One of the fixed alphabets a password can draw from.
///
/// Variant order is the canonical alphabet order; `Ord` follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digits,
    Symbols,
}

impl CharacterClass {
    /// All classes in canonical order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digits,
        CharacterClass::Symbols,
    ];

    pub fn alphabet(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Digits => DIGITS,
            CharacterClass::Symbols => SYMBOLS,
        }
    }

    /// Checkbox label used by the form.
    pub fn label(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => "Include Lowercase",
            CharacterClass::Uppercase => "Include Uppercase",
            CharacterClass::Digits => "Include Numbers",
            CharacterClass::Symbols => "Include Symbols",
        }
    }

    /// Position in canonical order (0..4).
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub(crate) fn bit(self) -> u8 {
        1 << self.index()
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Digits => "digits",
            CharacterClass::Symbols => "symbols",
        };
        f.write_str(name)
    }
}

/// Concatenate the alphabets of `classes` in canonical order.
///
/// Input order and duplicates do not matter.
pub fn build<I>(classes: I) -> Vec<u8>
where
    I: IntoIterator<Item = CharacterClass>,
{
    let mut mask = 0u8;
    for class in classes {
        mask |= class.bit();
    }

    let mut chars = Vec::new();
    for class in CharacterClass::ALL {
        if mask & class.bit() != 0 {
            chars.extend_from_slice(class.alphabet().as_bytes());
        }
    }
    chars
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn alphabets_have_expected_sizes() {
        assert_eq!(CharacterClass::Lowercase.alphabet().len(), 26);
        assert_eq!(CharacterClass::Uppercase.alphabet().len(), 26);
        assert_eq!(CharacterClass::Digits.alphabet().len(), 10);
        assert_eq!(CharacterClass::Symbols.alphabet().len(), 26);
    }

    #[test]
    fn alphabets_are_disjoint_ascii() {
        let mut seen = HashSet::new();
        for class in CharacterClass::ALL {
            for b in class.alphabet().bytes() {
                assert!(b.is_ascii_graphic(), "{class} contains non-graphic byte {b}");
                assert!(seen.insert(b), "byte {:?} appears twice", b as char);
            }
        }
        assert_eq!(seen.len(), 88);
    }

    #[test]
    fn build_uses_canonical_order() {
        let chars = build([CharacterClass::Digits, CharacterClass::Lowercase]);
        let expected = format!("{LOWERCASE}{DIGITS}");
        assert_eq!(chars, expected.as_bytes());
    }

    #[test]
    fn build_collapses_duplicates() {
        let chars = build([
            CharacterClass::Symbols,
            CharacterClass::Symbols,
            CharacterClass::Uppercase,
        ]);
        assert_eq!(chars.len(), 52);
        assert!(chars.starts_with(UPPERCASE.as_bytes()));
    }

    #[test]
    fn build_empty_is_empty() {
        assert!(build([]).is_empty());
        assert_eq!(build(CharacterClass::ALL).len(), 88);
    }

    #[test]
    fn index_round_trip() {
        for (i, class) in CharacterClass::ALL.iter().enumerate() {
            assert_eq!(class.index(), i);
            assert_eq!(CharacterClass::from_index(i), Some(*class));
        }
        assert_eq!(CharacterClass::from_index(4), None);
    }
}
