use std::collections::HashSet;

use passform::{CharacterClass, GenerateError, GenerationRequest, Selection, generate};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn subsets() -> impl Iterator<Item = Vec<CharacterClass>> {
    (1u8..16).map(|mask| {
        CharacterClass::ALL
            .into_iter()
            .filter(|c| mask & (1 << c.index()) != 0)
            .collect()
    })
}

fn alphabet_of(classes: &[CharacterClass]) -> HashSet<char> {
    classes.iter().flat_map(|c| c.alphabet().chars()).collect()
}

#[test]
fn every_subset_and_length_yields_valid_password() {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    for classes in subsets() {
        let allowed = alphabet_of(&classes);
        for length in 1..=50 {
            let req = GenerationRequest::new(classes.iter().copied(), length);
            let p = generate(&req, &mut rng).unwrap();
            assert_eq!(p.as_str().chars().count(), length);
            assert!(
                p.as_str().chars().all(|ch| allowed.contains(&ch)),
                "{:?} produced out-of-alphabet char",
                classes
            );
        }
    }
}

#[test]
fn lowercase_only_stays_lowercase() {
    let mut rng = StdRng::seed_from_u64(1);
    let req = GenerationRequest::new([CharacterClass::Lowercase], 50);
    for _ in 0..100 {
        let p = generate(&req, &mut rng).unwrap();
        assert!(p.as_str().chars().all(|ch| "abcdefghijklmnopqrstuvwxyz".contains(ch)));
    }
}

#[test]
fn sole_class_cannot_be_disabled() {
    for class in CharacterClass::ALL {
        let s = Selection::new(class);
        let after = s.toggle(class);
        assert_eq!(after, s);
        assert_eq!(after.count(), 1);
        assert!(after.is_enabled(class));
    }
}

#[test]
fn disable_down_to_one_then_refuse() {
    let s = Selection::from_classes([CharacterClass::Lowercase, CharacterClass::Uppercase]).unwrap();
    let s = s.toggle(CharacterClass::Lowercase);
    assert!(!s.is_enabled(CharacterClass::Lowercase));
    assert!(s.is_enabled(CharacterClass::Uppercase));
    assert_eq!(s.count(), 1);

    let refused = s.toggle(CharacterClass::Uppercase);
    assert_eq!(refused, s);
}

#[test]
fn digits_distribution_covers_all_ten() {
    // Tolerance check: with 10,000 draws each digit is expected ~1,000 times.
    let mut rng = StdRng::seed_from_u64(2024);
    let req = GenerationRequest::new([CharacterClass::Digits], 10_000);
    let p = generate(&req, &mut rng).unwrap();

    let mut counts = [0usize; 10];
    for b in p.as_str().bytes() {
        counts[(b - b'0') as usize] += 1;
    }
    for (digit, n) in counts.iter().enumerate() {
        assert!(*n > 0, "digit {digit} never drawn");
        assert!((700..1300).contains(n), "digit {digit} drawn {n} times");
    }
}

#[test]
fn length_boundaries() {
    let mut rng = StdRng::seed_from_u64(5);
    let req = GenerationRequest::new(CharacterClass::ALL, 1);
    assert_eq!(generate(&req, &mut rng).unwrap().len(), 1);
    let req = GenerationRequest::new(CharacterClass::ALL, 50);
    assert_eq!(generate(&req, &mut rng).unwrap().len(), 50);
}

#[test]
fn invalid_requests_fail_fast() {
    let mut rng = StdRng::seed_from_u64(5);
    let empty = GenerationRequest::new([], 10);
    assert!(matches!(generate(&empty, &mut rng), Err(GenerateError::InvalidArgument(_))));
    let zero = GenerationRequest::new([CharacterClass::Digits], 0);
    assert!(matches!(generate(&zero, &mut rng), Err(GenerateError::InvalidArgument(_))));
}

#[test]
fn generation_does_not_touch_selection() {
    let selection = Selection::all();
    let req = GenerationRequest::from_selection(selection, 12);
    let _ = generate(&req, &mut StdRng::seed_from_u64(8)).unwrap();
    assert_eq!(selection, Selection::all());
}
