use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;

use passgen::GenerationRequest;

mod assess;
mod generate;
mod interactive;
mod meter;
mod table;

#[derive(Parser)]
#[command(version, about = "Generate random passwords and rate how strong they are")]
enum Args {
    /// Generate one or more passwords.
    Generate(generate::GenerateArgs),
    /// Rate a password's strength. Reads one password per line from stdin if none is given.
    Assess {
        #[arg(allow_hyphen_values = true)]
        password: Option<String>,
        /// Output one JSON object per password.
        #[arg(long)]
        json: bool,
    },
    /// Pick the character types and length with prompts, then generate.
    Interactive {
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print the settings `generate` would use, as YAML.
    Config {
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn run() -> Result<(), ProgError> {
    let args = Args::parse();

    match args {
        Args::Generate(args) => generate::generate(args)?,
        Args::Assess { password, json } => assess::assess(password, json)?,
        Args::Interactive { config } => interactive::interactive(config)?,
        Args::Config { config } => print_config(config)?,
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(()) => (),
        Err(ProgError::Other(err)) => {
            eprintln!("Error: {err:?}");
            process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

fn default_settings_path() -> Option<PathBuf> {
    let home = env::var_os("HOME")?;
    let default_path = {
        let mut p = PathBuf::from(home);
        p.push(".config");
        p.push("passgen");
        p.push("config.yaml");
        p
    };
    Some(default_path)
}

/// Load the settings file: the one given on the command line (which must exist), else the default
/// one (which may not).
fn load_settings(settings_path: Option<PathBuf>) -> Result<GenerationRequest, ProgError> {
    match settings_path {
        Some(path) => {
            passgen::settings::load(&path).map_err(|err| ProgError::Settings(path, err))
        }
        None => match default_settings_path() {
            Some(path) => passgen::settings::load_or_default(&path)
                .map_err(|err| ProgError::Settings(path, err)),
            None => {
                log::warn!("HOME is not set; using the built-in defaults");
                Ok(GenerationRequest::default())
            }
        },
    }
}

fn print_config(settings_path: Option<PathBuf>) -> Result<(), ProgError> {
    let request = load_settings(settings_path)?;
    let yaml = passgen::settings::to_yaml(&request)
        .context("failed to encode the settings as YAML")?;
    io::stdout()
        .lock()
        .write_all(yaml.as_bytes())
        .context("failed to write settings to stdout")?;
    Ok(())
}


#[derive(Debug, thiserror::Error)]
enum ProgError {
    #[error("{0}")]
    Generation(passgen::GenerationError),
    #[error("Failed to load settings from {}: {}", .0.display(), .1)]
    Settings(PathBuf, #[source] passgen::SettingsError),
    #[error("Selection cancelled; exiting.")]
    SelectionCancelled,
    #[error(transparent)]
    Other(anyhow::Error),
}

impl From<anyhow::Error> for ProgError {
    fn from(err: anyhow::Error) -> ProgError {
        ProgError::Other(err)
    }
}

impl From<passgen::GenerationError> for ProgError {
    fn from(err: passgen::GenerationError) -> ProgError {
        ProgError::Generation(err)
    }
}
