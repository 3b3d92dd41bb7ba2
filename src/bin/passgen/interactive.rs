use std::path::PathBuf;

use anyhow::Context;
use dialoguer::theme::ColorfulTheme;

use passgen::CharacterClass;

use crate::ProgError;

/// Prompt for options, generate, and repeat until the user is done. The previous round's answers
/// become the next round's defaults.
pub(crate) fn interactive(settings_path: Option<PathBuf>) -> Result<(), ProgError> {
    let mut request = crate::load_settings(settings_path)?;
    let mut rng = rand::thread_rng();
    let theme = ColorfulTheme::default();

    loop {
        let checked = CharacterClass::ALL.map(|class| request.classes.contains(&class));
        let selection = dialoguer::MultiSelect::with_theme(&theme)
            .with_prompt("Character types")
            .items(&CharacterClass::ALL.map(CharacterClass::description))
            .defaults(&checked)
            .interact_opt()
            .context("failed to query your selection")?
            .ok_or(ProgError::SelectionCancelled)?;
        request.classes = selection
            .into_iter()
            .map(|index| CharacterClass::ALL[index])
            .collect();

        request.length = dialoguer::Input::<usize>::with_theme(&theme)
            .with_prompt(format!(
                "Length ({}-{})",
                passgen::MIN_LENGTH,
                passgen::MAX_LENGTH
            ))
            .default(request.length)
            .validate_with(|length: &usize| {
                passgen::settings::check_length(*length).map_err(|err| err.to_string())
            })
            .interact_text()
            .context("failed to read the password length")?;

        match passgen::generate_password(&mut rng, &request) {
            Ok(password) => {
                println!("{}", password.as_str());
                eprintln!(
                    "Strength: {}",
                    crate::meter::render(passgen::assess(password.as_str()))
                );
            }
            Err(err) => {
                eprintln!("{}", console::style(err).red().for_stderr());
                continue;
            }
        }

        let again = dialoguer::Confirm::with_theme(&theme)
            .with_prompt("Generate another?")
            .default(true)
            .interact()
            .context("failed to prompt you, somehow")?;
        if !again {
            break;
        }
    }
    Ok(())
}
