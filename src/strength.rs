//! Rating how strong a password looks.
//!
//! The rating only looks at the password itself (its length and which kinds of character it
//! contains), never at how it was generated.

use std::fmt;

use serde::{Serialize, Serializer};

const MIN_LENGTH: usize = 8;
const MEDIUM_LENGTH: usize = 14;
const STRONG_LENGTH: usize = 18;
const VERY_STRONG_LENGTH: usize = 24;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Strength {
    /// The password is empty; there is nothing to rate.
    None,
    TooShort,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl Strength {
    pub fn label(self) -> &'static str {
        match self {
            Strength::None => "",
            Strength::TooShort => "Too Short",
            Strength::Weak => "Weak",
            Strength::Medium => "Medium",
            Strength::Strong => "Strong",
            Strength::VeryStrong => "Very Strong",
        }
    }

    /// 0 for an empty password, up to 5 for [`Strength::VeryStrong`].
    pub fn level(self) -> u8 {
        match self {
            Strength::None => 0,
            Strength::TooShort => 1,
            Strength::Weak => 2,
            Strength::Medium => 3,
            Strength::Strong => 4,
            Strength::VeryStrong => 5,
        }
    }

    pub const MAX_LEVEL: u8 = 5;
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Strength {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        #[derive(Serialize)]
        struct Assessment {
            label: &'static str,
            level: u8,
        }

        Assessment {
            label: self.label(),
            level: self.level(),
        }
        .serialize(serializer)
    }
}

/// Rate `password`.
///
/// The rules are tried in order and the first match wins. Several of them overlap (a two-type
/// password of 14+ characters already satisfies the 8+ arm, say); the order is what decides the
/// outcome, so e.g. a 9-character password with three kinds of character is still `Weak`.
pub fn assess(password: &str) -> Strength {
    let len = password.chars().count();
    let types = character_types(password);

    match (len, types) {
        (0, _) => Strength::None,
        (len, _) if len < MIN_LENGTH => Strength::TooShort,
        (len, 4) if len >= VERY_STRONG_LENGTH => Strength::VeryStrong,
        (len, types)
            if (len >= STRONG_LENGTH && types >= 3) || (len >= VERY_STRONG_LENGTH && types == 2) =>
        {
            Strength::Strong
        }
        (len, types)
            if (len >= MEDIUM_LENGTH && types == 2) || (len >= MIN_LENGTH && types == 2) =>
        {
            Strength::Medium
        }
        (len, types) if len < MEDIUM_LENGTH || types == 1 => Strength::Weak,
        _ => Strength::Medium,
    }
}

/// How many of uppercase, lowercase, digit and "anything else" occur in `password`.
fn character_types(password: &str) -> usize {
    let has_upper = password.chars().any(|ch| ch.is_ascii_uppercase());
    let has_lower = password.chars().any(|ch| ch.is_ascii_lowercase());
    let has_digit = password.chars().any(|ch| ch.is_ascii_digit());
    let has_symbol = password.chars().any(|ch| !ch.is_ascii_alphanumeric());
    [has_upper, has_lower, has_digit, has_symbol]
        .into_iter()
        .filter(|present| *present)
        .count()
}
