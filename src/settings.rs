//! Loading generation defaults from a YAML settings file.
//!
//! A settings file is just a serialized [`GenerationRequest`]:
//!
//! ```yaml
//! length: 20
//! classes: [uppercase, lowercase, digit, symbol]
//! ```
//!
//! Either key may be left out, in which case the built-in default is used for it.

use std::fs;
use std::io;
use std::path::Path;

use crate::{GenerationRequest, MAX_LENGTH, MIN_LENGTH};

/// Load settings from `path`, failing if it doesn't exist.
pub fn load(path: &Path) -> Result<GenerationRequest, SettingsError> {
    let contents = fs::read_to_string(path).map_err(SettingsErrorRepr::Io)?;
    let request = parse(&contents)?;
    log::debug!("loaded settings from {}", path.display());
    Ok(request)
}

/// Load settings from `path`, or fall back to [`GenerationRequest::default`] if there's no file
/// there.
pub fn load_or_default(path: &Path) -> Result<GenerationRequest, SettingsError> {
    match fs::read_to_string(path) {
        Ok(contents) => {
            log::debug!("loaded settings from {}", path.display());
            parse(&contents)
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            log::debug!("no settings at {}; using defaults", path.display());
            Ok(GenerationRequest::default())
        }
        Err(err) => Err(SettingsErrorRepr::Io(err).into()),
    }
}

pub fn parse(contents: &str) -> Result<GenerationRequest, SettingsError> {
    let request: GenerationRequest =
        serde_yaml::from_str(contents).map_err(SettingsErrorRepr::Parse)?;
    check_length(request.length)?;
    Ok(request)
}

pub fn to_yaml(request: &GenerationRequest) -> Result<String, SettingsError> {
    Ok(serde_yaml::to_string(request).map_err(SettingsErrorRepr::Serialize)?)
}

/// Check that `length` is one the CLI offers.
pub fn check_length(length: usize) -> Result<(), SettingsError> {
    if (MIN_LENGTH..=MAX_LENGTH).contains(&length) {
        Ok(())
    } else {
        Err(SettingsErrorRepr::LengthOutOfRange(length).into())
    }
}

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct SettingsError(SettingsErrorRepr);

impl From<SettingsErrorRepr> for SettingsError {
    fn from(err: SettingsErrorRepr) -> SettingsError {
        SettingsError(err)
    }
}

#[derive(Debug, thiserror::Error)]
enum SettingsErrorRepr {
    #[error("I/O error: {0}")]
    Io(io::Error),
    #[error("failed to parse settings as YAML: {0}")]
    Parse(#[source] serde_yaml::Error),
    #[error("failed to serialize settings as YAML: {0}")]
    Serialize(#[source] serde_yaml::Error),
    #[error(
        "password length {0} is out of range (must be between {min} and {max})",
        min = MIN_LENGTH,
        max = MAX_LENGTH
    )]
    LengthOutOfRange(usize),
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::CharacterClass;

    #[test]
    fn partial_settings_keep_other_defaults() {
        let request = parse("length: 20\n").unwrap();
        assert_eq!(request.length, 20);
        assert_eq!(request.classes, GenerationRequest::default().classes);

        let request = parse("classes: [symbol, digit]\n").unwrap();
        assert_eq!(request.length, 12);
        assert_eq!(
            request.classes.into_iter().collect::<Vec<_>>(),
            [CharacterClass::Digit, CharacterClass::Symbol]
        );
    }

    #[test]
    fn empty_class_list_is_allowed() {
        let request = parse("classes: []\n").unwrap();
        assert!(request.classes.is_empty());
    }

    #[test]
    fn bad_settings_are_rejected() {
        assert!(parse("length: 5\n").is_err());
        assert!(parse("length: 33\n").is_err());
        assert!(parse("classes: [emoji]\n").is_err());
        assert!(parse("colour: blue\n").is_err());
    }

    #[test]
    fn round_trips_through_yaml() {
        let request = GenerationRequest::new(16, CharacterClass::ALL);
        let yaml = to_yaml(&request).unwrap();
        assert_eq!(parse(&yaml).unwrap(), request);
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        assert!(load(&path).is_err());
        assert_eq!(load_or_default(&path).unwrap(), GenerationRequest::default());
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"length: 32\nclasses: [lowercase]\n").unwrap();
        let request = load(file.path()).unwrap();
        assert_eq!(request, GenerationRequest::new(32, [CharacterClass::Lowercase]));
        assert_eq!(load_or_default(file.path()).unwrap(), request);
    }
}
