//! Enabled character classes with a never-empty invariant.

use super::charset::{self, CharacterClass};

const ALL_BITS: u8 = 0b1111;

/// Set of enabled character classes. Always holds at least one class.
///
/// A plain value: `toggle` returns the next selection instead of
/// mutating in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selection {
    bits: u8,
}

impl Selection {
    /// A selection with exactly `class` enabled.
    pub fn new(class: CharacterClass) -> Self {
        Self { bits: class.bit() }
    }

    /// Selection with every class enabled.
    pub fn all() -> Self {
        Self { bits: ALL_BITS }
    }

    /// Build from a list of classes. Returns `None` when the list is empty.
    pub fn from_classes<I>(classes: I) -> Option<Self>
    where
        I: IntoIterator<Item = CharacterClass>,
    {
        let bits = classes.into_iter().fold(0u8, |acc, c| acc | c.bit());
        (bits != 0).then_some(Self { bits })
    }

    /// Build from flags in canonical order
    /// (lowercase, uppercase, digits, symbols).
    pub fn from_flags(flags: [bool; 4]) -> Option<Self> {
        Self::from_classes(
            CharacterClass::ALL
                .into_iter()
                .zip(flags)
                .filter_map(|(class, on)| on.then_some(class)),
        )
    }

    pub fn flags(self) -> [bool; 4] {
        CharacterClass::ALL.map(|class| self.is_enabled(class))
    }

    pub fn is_enabled(self, class: CharacterClass) -> bool {
        self.bits & class.bit() != 0
    }

    /// Number of enabled classes, always >= 1.
    pub fn count(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// True when `class` is the sole enabled class and cannot be turned off.
    pub fn is_locked(self, class: CharacterClass) -> bool {
        self.is_enabled(class) && self.count() == 1
    }

    /// Flip `class`. Turning off the last enabled class is ignored and
    /// returns the selection unchanged.
    pub fn toggle(self, class: CharacterClass) -> Self {
        if self.is_locked(class) {
            log::debug!("ignoring toggle of last enabled class {class}");
            return self;
        }
        Self {
            bits: self.bits ^ class.bit(),
        }
    }

    /// Enabled classes in canonical order.
    pub fn classes(self) -> impl Iterator<Item = CharacterClass> {
        CharacterClass::ALL
            .into_iter()
            .filter(move |class| self.is_enabled(*class))
    }

    /// Concatenated alphabet of the enabled classes.
    pub fn alphabet(self) -> Vec<u8> {
        charset::build(self.classes())
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::new(CharacterClass::Lowercase)
    }
}

#[cfg(test)]
mod tests {
    use super::CharacterClass::*;
    use super::*;

    #[test]
    fn default_is_lowercase_only() {
        let s = Selection::default();
        assert!(s.is_enabled(Lowercase));
        assert_eq!(s.count(), 1);
        assert_eq!(s.flags(), [true, false, false, false]);
    }

    #[test]
    fn toggling_sole_class_is_noop() {
        for class in CharacterClass::ALL {
            let s = Selection::new(class);
            let next = s.toggle(class);
            assert_eq!(next, s);
            assert_eq!(next.count(), 1);
            assert!(next.is_enabled(class));
        }
    }

    #[test]
    fn toggle_down_to_one_then_locked() {
        let s = Selection::from_classes([Lowercase, Uppercase]).unwrap();
        assert_eq!(s.count(), 2);
        assert!(!s.is_locked(Lowercase));

        let s = s.toggle(Lowercase);
        assert!(!s.is_enabled(Lowercase));
        assert!(s.is_enabled(Uppercase));
        assert_eq!(s.count(), 1);
        assert!(s.is_locked(Uppercase));

        let after = s.toggle(Uppercase);
        assert_eq!(after, s);
    }

    #[test]
    fn toggle_enables_disabled_class() {
        let s = Selection::default().toggle(Digits);
        assert_eq!(s.count(), 2);
        assert!(s.is_enabled(Digits));
        assert!(!s.is_locked(Lowercase));
    }

    #[test]
    fn count_never_drops_to_zero() {
        let mut s = Selection::all();
        // Hammer every class many times; invariant must hold after each step.
        for round in 0..32 {
            let class = CharacterClass::ALL[round % 4];
            s = s.toggle(class);
            assert!(s.count() >= 1);
        }
    }

    #[test]
    fn empty_inputs_are_rejected() {
        assert_eq!(Selection::from_classes([]), None);
        assert_eq!(Selection::from_flags([false; 4]), None);
    }

    #[test]
    fn flags_round_trip() {
        let flags = [false, true, false, true];
        let s = Selection::from_flags(flags).unwrap();
        assert_eq!(s.flags(), flags);
        assert_eq!(s.classes().collect::<Vec<_>>(), vec![Uppercase, Symbols]);
    }

    #[test]
    fn alphabet_follows_canonical_order() {
        let s = Selection::from_classes([Symbols, Digits]).unwrap();
        let alphabet = s.alphabet();
        assert!(alphabet.starts_with(b"0123456789"));
        assert_eq!(alphabet.len(), 36);
    }
}
