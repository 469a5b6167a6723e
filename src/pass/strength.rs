//! Heuristic password strength rating.
//!
//! Six independent checks worth one point each, mapped to three tiers.
//! This is user-facing feedback, not an entropy estimate.

use crate::error::NO_CLASS_MESSAGE;
use crate::terminal::{GREEN, RED, YELLOW};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Weak,
    Medium,
    Strong,
}

impl Tier {
    pub fn from_score(score: u8) -> Tier {
        match score {
            0..=2 => Tier::Weak,
            3..=4 => Tier::Medium,
            _ => Tier::Strong,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::Weak => "Weak",
            Tier::Medium => "Medium",
            Tier::Strong => "Strong",
        }
    }

    /// Share of the meter filled for this tier.
    pub fn fill_percent(self) -> u8 {
        match self {
            Tier::Weak => 33,
            Tier::Medium => 66,
            Tier::Strong => 100,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Tier::Weak => RED,
            Tier::Medium => YELLOW,
            Tier::Strong => GREEN,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthRating {
    pub tier: Tier,
    pub score: u8,
}

/// Rate `password`. `None` means there is nothing to rate.
pub fn score(password: &str) -> Option<StrengthRating> {
    if password.is_empty() || password == NO_CLASS_MESSAGE {
        return None;
    }

    let length = password.chars().count();
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());

    let checks = [
        length >= 8,
        length >= 12,
        length >= 16,
        has_lower && has_upper,
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    let score = checks.iter().filter(|&&passed| passed).count() as u8;

    Some(StrengthRating {
        tier: Tier::from_score(score),
        score,
    })
}
