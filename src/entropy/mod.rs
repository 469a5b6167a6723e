//! Random source selection.
//!
//! Both sources are cryptographically secure. `Thread` is a ChaCha-based
//! generator reseeded from the OS; `Os` reads every draw from the OS.

use rand::RngCore;
use rand::rngs::OsRng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntropySource {
    #[default]
    Thread,
    Os,
}

impl EntropySource {
    pub fn name(self) -> &'static str {
        match self {
            EntropySource::Thread => "thread",
            EntropySource::Os => "os",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            "thread" => Some(EntropySource::Thread),
            "os" => Some(EntropySource::Os),
            _ => None,
        }
    }

    /// Human-readable description for the form.
    pub fn describe(self) -> &'static str {
        match self {
            EntropySource::Thread => "ChaCha12 thread RNG (OS-seeded)",
            EntropySource::Os => "Operating system RNG",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            EntropySource::Thread => EntropySource::Os,
            EntropySource::Os => EntropySource::Thread,
        }
    }

    /// Run `f` with a generator for this source.
    pub fn with_rng<T>(self, f: impl FnOnce(&mut dyn RngCore) -> T) -> T {
        log::debug!("drawing from {} rng", self.name());
        match self {
            EntropySource::Thread => f(&mut rand::thread_rng()),
            EntropySource::Os => f(&mut OsRng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::generate;
    use crate::settings::GenerationOptions;

    #[test]
    fn names_round_trip() {
        for source in [EntropySource::Thread, EntropySource::Os] {
            assert_eq!(EntropySource::from_name(source.name()), Some(source));
        }
        assert_eq!(EntropySource::from_name("rdtsc"), None);
    }

    #[test]
    fn toggle_flips_between_sources() {
        assert_eq!(EntropySource::Thread.toggled(), EntropySource::Os);
        assert_eq!(EntropySource::Os.toggled().toggled(), EntropySource::Os);
    }

    #[test]
    fn both_sources_generate() {
        let options = GenerationOptions::default();
        for source in [EntropySource::Thread, EntropySource::Os] {
            let password = source.with_rng(|rng| generate(&options, rng)).unwrap();
            assert_eq!(password.as_str().len(), options.length);
        }
    }
}
