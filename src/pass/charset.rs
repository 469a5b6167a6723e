//! Character classes and pool building for password generation.

use crate::settings::GenerationOptions;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const NUMBERS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()_+-=[]{}|;:,.<>?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Numbers,
    Symbols,
}

impl CharClass {
    /// Pool order: lowercase, uppercase, numbers, symbols.
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Numbers,
        CharClass::Symbols,
    ];

    pub fn alphabet(self) -> &'static [u8] {
        match self {
            CharClass::Lowercase => LOWERCASE,
            CharClass::Uppercase => UPPERCASE,
            CharClass::Numbers => NUMBERS,
            CharClass::Symbols => SYMBOLS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CharClass::Lowercase => "Lowercase Letters (a-z)",
            CharClass::Uppercase => "Uppercase Letters (A-Z)",
            CharClass::Numbers => "Numbers (0-9)",
            CharClass::Symbols => "Symbols (!@#$%^&*)",
        }
    }

    /// Which alphabet `c` belongs to, if any.
    #[cfg(test)]
    pub fn of(c: char) -> Option<CharClass> {
        Self::ALL
            .into_iter()
            .find(|class| c.is_ascii() && class.alphabet().contains(&(c as u8)))
    }
}

/// Build the character pool for the enabled classes.
pub fn build(options: &GenerationOptions) -> Vec<u8> {
    let mut chars = Vec::with_capacity(size(options));

    for class in CharClass::ALL {
        if options.includes(class) {
            chars.extend_from_slice(class.alphabet());
        }
    }

    log::debug!("built pool of {} chars", chars.len());
    chars
}

/// Pool size without building it.
pub fn size(options: &GenerationOptions) -> usize {
    CharClass::ALL
        .into_iter()
        .filter(|class| options.includes(*class))
        .map(|class| class.alphabet().len())
        .sum()
}

/// Password entropy in bits for a uniformly drawn password.
pub fn entropy_bits(length: usize, pool_size: usize) -> f64 {
    if pool_size == 0 {
        return 0.0;
    }
    length as f64 * (pool_size as f64).log2()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_sizes() {
        assert_eq!(LOWERCASE.len(), 26);
        assert_eq!(UPPERCASE.len(), 26);
        assert_eq!(NUMBERS.len(), 10);
        assert_eq!(SYMBOLS.len(), 26);
    }

    #[test]
    fn alphabets_are_disjoint() {
        for c in 0u8..128 {
            let owners = CharClass::ALL
                .iter()
                .filter(|class| class.alphabet().contains(&c))
                .count();
            assert!(owners <= 1, "{:?} in several alphabets", c as char);
        }
    }

    #[test]
    fn pool_follows_fixed_order() {
        let options = GenerationOptions::default();
        let pool = build(&options);
        let expected = [LOWERCASE, UPPERCASE, NUMBERS, SYMBOLS].concat();
        assert_eq!(pool, expected);
        assert_eq!(size(&options), 88);
    }

    #[test]
    fn pool_skips_disabled_classes() {
        let options = GenerationOptions::default()
            .with_class(CharClass::Lowercase, false)
            .with_class(CharClass::Symbols, false);
        let pool = build(&options);
        assert_eq!(pool, [UPPERCASE, NUMBERS].concat());
        assert_eq!(size(&options), pool.len());
    }

    #[test]
    fn empty_pool_when_nothing_selected() {
        let options = GenerationOptions::default()
            .with_class(CharClass::Lowercase, false)
            .with_class(CharClass::Uppercase, false)
            .with_class(CharClass::Numbers, false)
            .with_class(CharClass::Symbols, false);
        assert!(build(&options).is_empty());
        assert_eq!(size(&options), 0);
    }

    #[test]
    fn classifies_characters() {
        assert_eq!(CharClass::of('q'), Some(CharClass::Lowercase));
        assert_eq!(CharClass::of('Q'), Some(CharClass::Uppercase));
        assert_eq!(CharClass::of('7'), Some(CharClass::Numbers));
        assert_eq!(CharClass::of('?'), Some(CharClass::Symbols));
        assert_eq!(CharClass::of(' '), None);
        assert_eq!(CharClass::of('é'), None);
    }

    #[test]
    fn entropy_of_empty_pool_is_zero() {
        assert_eq!(entropy_bits(16, 0), 0.0);
        assert!((entropy_bits(8, 16) - 32.0).abs() < f64::EPSILON);
    }
}
