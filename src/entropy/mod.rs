//! Entropy sources for the host layers.
//!
//! The generator itself takes any `rand::Rng`; this module only decides
//! which one the form and CLI hand it.

use std::fmt;
use std::str::FromStr;

use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Source {
    /// Thread-local generator seeded from the OS.
    #[default]
    Thread,
    /// Read every value straight from the operating system.
    Os,
}

impl Source {
    pub fn name(self) -> &'static str {
        match self {
            Source::Thread => "thread",
            Source::Os => "os",
        }
    }

    /// Human-readable description for the form header.
    pub fn describe(self) -> &'static str {
        match self {
            Source::Thread => "thread rng (OS-seeded)",
            Source::Os => "operating system rng",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Source::Thread => Source::Os,
            Source::Os => Source::Thread,
        }
    }

    pub fn rng(self) -> Box<dyn RngCore> {
        match self {
            Source::Thread => Box::new(rand::thread_rng()),
            Source::Os => Box::new(OsRng),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown random source: {0}")]
pub struct UnknownSource(String);

impl FromStr for Source {
    type Err = UnknownSource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "thread" => Ok(Source::Thread),
            "os" | "urandom" => Ok(Source::Os),
            other => Err(UnknownSource(other.to_string())),
        }
    }
}

/// Deterministic generator for reproducible runs.
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Pick the generator for a run: a fixed seed wins over the source.
pub fn select(source: Source, seed: Option<u64>) -> Box<dyn RngCore> {
    match seed {
        Some(seed) => {
            log::info!("using seeded rng");
            Box::new(seeded(seed))
        }
        None => {
            log::debug!("using {} rng", source);
            source.rng()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn parses_names() {
        assert_eq!("thread".parse::<Source>().unwrap(), Source::Thread);
        assert_eq!("os".parse::<Source>().unwrap(), Source::Os);
        assert_eq!(" urandom ".parse::<Source>().unwrap(), Source::Os);
        assert!("rdrand".parse::<Source>().is_err());
    }

    #[test]
    fn display_round_trips() {
        for source in [Source::Thread, Source::Os] {
            assert_eq!(source.to_string().parse::<Source>().unwrap(), source);
        }
    }

    #[test]
    fn toggled_flips() {
        assert_eq!(Source::Thread.toggled(), Source::Os);
        assert_eq!(Source::Os.toggled(), Source::Thread);
    }

    #[test]
    fn seed_overrides_source() {
        let mut a = select(Source::Os, Some(7));
        let mut b = select(Source::Thread, Some(7));
        let xs: Vec<u32> = (0..8).map(|_| a.gen_range(0..1000)).collect();
        let ys: Vec<u32> = (0..8).map(|_| b.gen_range(0..1000)).collect();
        assert_eq!(xs, ys);
    }
}
