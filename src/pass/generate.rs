//! Password generation.

use std::collections::BTreeSet;
use std::fmt;

use rand::Rng;
use zeroize::Zeroizing;

use super::charset::{self, CharacterClass};
use super::selection::Selection;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

/// What to generate: the enabled classes and the password length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub classes: BTreeSet<CharacterClass>,
    pub length: usize,
}

impl GenerationRequest {
    pub fn new<I>(classes: I, length: usize) -> Self
    where
        I: IntoIterator<Item = CharacterClass>,
    {
        Self {
            classes: classes.into_iter().collect(),
            length,
        }
    }

    pub fn from_selection(selection: Selection, length: usize) -> Self {
        Self::new(selection.classes(), length)
    }
}

/// A generated password. The buffer is wiped when dropped.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(Zeroizing<String>);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters (every character is single-byte ASCII).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// Keep secrets out of debug output and logs.
impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password({} chars)", self.len())
    }
}

/// Generate a password for `request`, drawing every character uniformly
/// and independently from the combined alphabet using `rng`.
pub fn generate<R>(request: &GenerationRequest, rng: &mut R) -> Result<Password, GenerateError>
where
    R: Rng + ?Sized,
{
    if request.classes.is_empty() {
        return Err(GenerateError::InvalidArgument("no character classes enabled"));
    }
    if request.length == 0 {
        return Err(GenerateError::InvalidArgument("length must be at least 1"));
    }

    let chars = Zeroizing::new(charset::build(request.classes.iter().copied()));
    let mut out = Zeroizing::new(String::with_capacity(request.length));
    for _ in 0..request.length {
        out.push(chars[rng.gen_range(0..chars.len())] as char);
    }

    log::debug!(
        "generated {} chars from {} classes ({} symbol alphabet)",
        request.length,
        request.classes.len(),
        chars.len()
    );
    Ok(Password(out))
}

/// Generate `count` passwords with the same request.
pub fn generate_batch<R>(
    request: &GenerationRequest,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Password>, GenerateError>
where
    R: Rng + ?Sized,
{
    (0..count).map(|_| generate(request, rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::CharacterClass::*;
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn empty_classes_rejected() {
        let req = GenerationRequest::new([], 10);
        assert!(matches!(
            generate(&req, &mut rng()),
            Err(GenerateError::InvalidArgument(_))
        ));
    }

    #[test]
    fn zero_length_rejected() {
        let req = GenerationRequest::new([Lowercase], 0);
        assert!(matches!(
            generate(&req, &mut rng()),
            Err(GenerateError::InvalidArgument(_))
        ));
    }

    #[test]
    fn exact_length_and_membership() {
        let req = GenerationRequest::new([Uppercase, Symbols], 37);
        let alphabet = charset::build([Uppercase, Symbols]);
        let pass = generate(&req, &mut rng()).unwrap();
        assert_eq!(pass.len(), 37);
        assert!(pass.as_str().bytes().all(|b| alphabet.contains(&b)));
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let req = GenerationRequest::new(CharacterClass::ALL, 24);
        let a = generate(&req, &mut rng()).unwrap();
        let b = generate(&req, &mut rng()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn from_selection_matches_enabled_classes() {
        let selection = Selection::from_classes([Digits, Lowercase]).unwrap();
        let req = GenerationRequest::from_selection(selection, 5);
        assert_eq!(req.classes.iter().copied().collect::<Vec<_>>(), vec![Lowercase, Digits]);
        assert_eq!(req.length, 5);
    }

    #[test]
    fn batch_yields_count_passwords() {
        let req = GenerationRequest::new([Digits], 8);
        let batch = generate_batch(&req, 3, &mut rng()).unwrap();
        assert_eq!(batch.len(), 3);
        assert!(batch.iter().all(|p| p.len() == 8));
    }

    #[test]
    fn debug_hides_contents() {
        let req = GenerationRequest::new([Lowercase], 12);
        let pass = generate(&req, &mut rng()).unwrap();
        let shown = format!("{pass:?}");
        assert_eq!(shown, "Password(12 chars)");
        assert!(!shown.contains(pass.as_str()));
    }

    #[test]
    fn works_through_dyn_rng() {
        let mut boxed: Box<dyn rand::RngCore> = Box::new(rng());
        let req = GenerationRequest::new([Digits], 4);
        let pass = generate(&req, &mut *boxed).unwrap();
        assert_eq!(pass.len(), 4);
    }
}
