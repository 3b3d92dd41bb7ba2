//! Utilities for generating passwords.

use std::collections::BTreeSet;

use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};

use crate::{CharacterClass, GenerationRequest};

#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum GenerationError {
    #[error("Please select at least one character type.")]
    NoCharacterClassSelected,
}

/// Generate a password for `request`, containing at least one character of every selected class.
///
/// One character is drawn from each selected class (in class order), the rest are drawn from the
/// union of the selected alphabets, and the whole lot is shuffled so the guaranteed characters
/// don't sit at predictable positions.
///
/// If `request.length` is smaller than the number of selected classes, only the first `length`
/// guaranteed characters are kept, so some classes will be missing from the result.
pub fn generate_password<R>(
    rng: &mut R,
    request: &GenerationRequest,
) -> Result<crate::Secret, GenerationError>
where
    R: Rng + CryptoRng,
{
    if request.classes.is_empty() {
        log::debug!("refusing to generate a password: no character classes selected");
        return Err(GenerationError::NoCharacterClassSelected);
    }

    let alphabet = combined_alphabet(&request.classes)
        .chars()
        .collect::<Vec<_>>();
    log::debug!(
        "generating a {}-character password from {} classes ({} candidate characters)",
        request.length,
        request.classes.len(),
        alphabet.len(),
    );

    let mut chars = Vec::with_capacity(request.length);
    for class in request.classes.iter().take(request.length) {
        chars.push(draw_from_class(rng, *class));
    }
    if chars.len() < request.classes.len() {
        log::debug!(
            "length {} is below the number of selected classes; not every class is represented",
            request.length
        );
    }

    let remaining = request.length - chars.len();
    let filler = generate_random_password(rng, &alphabet, remaining);
    chars.extend(filler.0.chars());

    chars.shuffle(rng);
    Ok(crate::Secret(chars.into_iter().collect()))
}

/// Generate a simple, impossible-to-guess password by just randomly sampling the given alphabet.
///
/// These are ugly, hard to remember passwords, but perfect if you're just copying them from a
/// password manager. An empty alphabet yields an empty password.
///
/// Note that `rand`'s underlying uniform sampler does the right thing to prevent bias: if it can't
/// generate a value that is within the given range (or really, a multiple of the range), it
/// re-samples.
pub fn generate_random_password<R>(rng: &mut R, alphabet: &[char], len: usize) -> crate::Secret
where
    R: Rng + CryptoRng,
{
    let password = (0..len)
        .filter_map(|_| alphabet.choose(rng))
        .collect::<String>();
    crate::Secret(password)
}

/// The alphabets of `classes`, concatenated in class order.
pub fn combined_alphabet(classes: &BTreeSet<CharacterClass>) -> String {
    classes.iter().map(|class| class.alphabet()).collect()
}

fn draw_from_class<R: Rng>(rng: &mut R, class: CharacterClass) -> char {
    // Alphabets are ASCII, so a byte index is a character index.
    let alphabet = class.alphabet().as_bytes();
    char::from(alphabet[rng.gen_range(0..alphabet.len())])
}
