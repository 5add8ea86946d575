//! Character distribution check for generated passwords.
//!
//! Usage:
//!   ./charset_stats                     # 10,000 chars, digits only
//!   ./charset_stats 100000 lower upper  # any mix of lower/upper/digits/symbols
//!   ./charset_stats 50000 digits --os   # use the OS rng
//!
//! Prints the count of every alphabet character and the worst deviation
//! from the uniform expectation.

use std::env;
use std::process::exit;

use passform::entropy::Source;
use passform::{CharacterClass, GenerationRequest, generate};

fn class_named(name: &str) -> Option<CharacterClass> {
    match name {
        "lower" | "lowercase" => Some(CharacterClass::Lowercase),
        "upper" | "uppercase" => Some(CharacterClass::Uppercase),
        "digits" | "numbers" => Some(CharacterClass::Digits),
        "symbols" => Some(CharacterClass::Symbols),
        _ => None,
    }
}

fn main() {
    let mut total = 10_000usize;
    let mut classes = Vec::new();
    let mut source = Source::Thread;

    for arg in env::args().skip(1) {
        if arg == "--os" {
            source = Source::Os;
        } else if let Ok(n) = arg.parse() {
            total = n;
        } else if let Some(class) = class_named(&arg) {
            classes.push(class);
        } else {
            eprintln!("unknown argument: {arg}");
            exit(2);
        }
    }
    if classes.is_empty() {
        classes.push(CharacterClass::Digits);
    }
    if total == 0 {
        eprintln!("need at least one character");
        exit(2);
    }

    let request = GenerationRequest::new(classes, total);
    let alphabet = passform::pass::charset::build(request.classes.iter().copied());
    let mut rng = source.rng();
    let password = match generate(&request, &mut *rng) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{e}");
            exit(1);
        }
    };

    let mut counts = [0usize; 128];
    for b in password.as_str().bytes() {
        counts[b as usize] += 1;
    }

    let expected = total as f64 / alphabet.len() as f64;
    let mut worst = 0.0f64;
    let mut missing = 0;
    println!("{} chars over {} symbols ({} rng)", total, alphabet.len(), source);
    for &b in &alphabet {
        let n = counts[b as usize];
        let dev = (n as f64 - expected) / expected * 100.0;
        worst = worst.max(dev.abs());
        if n == 0 {
            missing += 1;
        }
        println!("  {}  {:>8}  {:+6.2}%", b as char, n, dev);
    }
    println!("expected {:.1} each, worst deviation {:.2}%", expected, worst);

    if missing > 0 {
        println!("{missing} symbol(s) never drawn");
        exit(1);
    }
}
