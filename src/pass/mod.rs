//! Password generation and strength rating.

pub mod charset;
mod generate;
pub mod strength;

pub use charset::CharClass;
pub use generate::{GeneratedPassword, generate, generate_batch};
pub use strength::{StrengthRating, score};
