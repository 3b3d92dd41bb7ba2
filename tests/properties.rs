use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::SeedableRng;

use passgen::{
    assess, generate_password, CharacterClass, GenerationError, GenerationRequest, Strength,
};

/// Every non-empty subset of the character classes.
fn selections() -> Vec<BTreeSet<CharacterClass>> {
    (1u8..16)
        .map(|mask| {
            CharacterClass::ALL
                .into_iter()
                .enumerate()
                .filter(|(bit, _)| mask & (1 << bit) != 0)
                .map(|(_, class)| class)
                .collect()
        })
        .collect()
}

#[test]
fn generated_passwords_have_requested_length_and_every_class() {
    let mut rng = StdRng::seed_from_u64(1);
    for classes in selections() {
        for length in [classes.len(), 6, 12, 32, 100] {
            let request = GenerationRequest {
                length,
                classes: classes.clone(),
            };
            for _ in 0..20 {
                let password = generate_password(&mut rng, &request).unwrap();
                let password = password.as_str();
                assert_eq!(password.chars().count(), length);
                for class in classes.iter() {
                    assert!(
                        password.chars().any(|ch| class.contains(ch)),
                        "{class:?} missing from {password:?}"
                    );
                }
                assert!(
                    password
                        .chars()
                        .all(|ch| classes.iter().any(|class| class.contains(ch))),
                    "foreign character in {password:?} for {classes:?}"
                );
            }
        }
    }
}

#[test]
fn empty_selection_always_fails() {
    let mut rng = StdRng::seed_from_u64(2);
    for length in [0, 1, 6, 32] {
        let request = GenerationRequest::new(length, []);
        assert_eq!(
            generate_password(&mut rng, &request),
            Err(GenerationError::NoCharacterClassSelected)
        );
    }
}

#[test]
fn degenerate_lengths_do_not_fail() {
    let mut rng = StdRng::seed_from_u64(3);
    let request = GenerationRequest::new(1, CharacterClass::ALL);
    let password = generate_password(&mut rng, &request).unwrap();
    assert_eq!(password.as_str().len(), 1);
    assert!(password.as_str().chars().all(|ch| ch.is_ascii_uppercase()));
}

#[test]
fn generated_passwords_vary() {
    let mut rng = StdRng::seed_from_u64(4);
    let request = GenerationRequest::new(16, CharacterClass::ALL);
    let passwords = (0..50)
        .map(|_| generate_password(&mut rng, &request).unwrap().as_str().to_owned())
        .collect::<BTreeSet<_>>();
    assert_eq!(passwords.len(), 50);
}

#[test]
fn documented_assessments() {
    assert_eq!((assess("").label(), assess("").level()), ("", 0));
    assert_eq!((assess("abc").label(), assess("abc").level()), ("Too Short", 1));
    assert_eq!(assess("abcdefgh"), Strength::Weak);
    assert_eq!(assess("Abcdefgh1"), Strength::Weak);
    let very_strong = assess("Qw3$rtyuiopasdfghjklzxcv");
    assert_eq!((very_strong.label(), very_strong.level()), ("Very Strong", 5));
}

#[test]
fn assess_is_pure() {
    let passwords = [
        "",
        "abc",
        "abcdefgh",
        "Abcdefgh1",
        "Abcdefghijklm1",
        "Qw3$rtyuiopasdfghjklzxcv",
    ];
    for password in passwords {
        assert_eq!(assess(password), assess(password));
    }
}

#[test]
fn long_four_class_passwords_are_very_strong() {
    let mut rng = StdRng::seed_from_u64(5);
    let request = GenerationRequest::new(24, CharacterClass::ALL);
    for _ in 0..50 {
        let password = generate_password(&mut rng, &request).unwrap();
        assert_eq!(assess(password.as_str()), Strength::VeryStrong);
    }
}
