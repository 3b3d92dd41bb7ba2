use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

pub mod password_generation;
pub mod settings;
pub mod strength;

pub use password_generation::{generate_password, GenerationError};
pub use settings::SettingsError;
pub use strength::{assess, Strength};

/// The shortest password length the CLI will ask for.
pub const MIN_LENGTH: usize = 6;
/// The longest password length the CLI will ask for.
pub const MAX_LENGTH: usize = 32;

/// A category of characters a password may be drawn from.
///
/// Variants are declared in the order their alphabets are concatenated, and `Ord` follows that
/// order, so a `BTreeSet<CharacterClass>` always iterates Uppercase, Lowercase, Digit, Symbol.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    /// The characters belonging to this class. Always non-empty ASCII; no two classes share a
    /// character.
    pub fn alphabet(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Symbol => SYMBOLS,
        }
    }

    pub fn contains(self, ch: char) -> bool {
        self.alphabet().contains(ch)
    }

    /// Human-readable name, as shown next to a checkbox.
    pub fn description(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "Uppercase letters",
            CharacterClass::Lowercase => "Lowercase letters",
            CharacterClass::Digit => "Numbers",
            CharacterClass::Symbol => "Symbols",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

static UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
static LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
static DIGITS: &str = "0123456789";
static SYMBOLS: &str = "!@#$%^&*()_+[]{}|;:,.<>?";

/// What to generate: how long the password should be, and which classes it draws from.
///
/// Built fresh for every generation; the CLI assembles it from defaults, the settings file and
/// command-line flags.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationRequest {
    pub length: usize,
    pub classes: BTreeSet<CharacterClass>,
}

impl GenerationRequest {
    pub fn new(length: usize, classes: impl IntoIterator<Item = CharacterClass>) -> Self {
        GenerationRequest {
            length,
            classes: classes.into_iter().collect(),
        }
    }

    /// Number of distinct characters any position of the password may take.
    pub fn pool_size(&self) -> usize {
        self.classes.iter().map(|c| c.alphabet().len()).sum()
    }

    /// `length * log2(pool_size)`. Purely informational; it plays no part in [`assess`].
    pub fn entropy_bits(&self) -> f64 {
        match self.pool_size() {
            0 => 0.0,
            pool => self.length as f64 * (pool as f64).log2(),
        }
    }
}

impl Default for GenerationRequest {
    fn default() -> Self {
        GenerationRequest::new(
            12,
            [
                CharacterClass::Uppercase,
                CharacterClass::Lowercase,
                CharacterClass::Digit,
            ],
        )
    }
}

/// A generated password.
///
/// `Debug` does not reveal the contents, so a `Secret` can sit inside logged structures.
#[derive(Clone, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Secret(String);

opaque_debug::implement!(Secret);

impl Secret {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Secret {
    fn from(s: String) -> Secret {
        Secret(s)
    }
}
