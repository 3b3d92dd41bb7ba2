use std::collections::BTreeSet;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use serde::Serialize;

use passgen::{CharacterClass, GenerationRequest, Secret, Strength};

use crate::ProgError;

#[derive(clap::Args)]
pub(crate) struct GenerateArgs {
    /// Number of characters in each password.
    #[arg(short, long, value_parser = parse_length)]
    length: Option<usize>,
    /// How many passwords to generate.
    #[arg(short = 'n', long, default_value_t = 1, value_parser = parse_count)]
    count: usize,
    /// Output one JSON object per password.
    #[arg(long)]
    json: bool,
    /// Read defaults from this settings file instead of ~/.config/passgen/config.yaml.
    #[arg(long)]
    config: Option<PathBuf>,
    #[command(flatten)]
    classes: ClassFlags,
}

/// `--foo`/`--no-foo` pairs; the last one given wins, and leaving both out keeps the setting.
#[derive(clap::Args)]
struct ClassFlags {
    /// Include uppercase letters.
    #[arg(long, overrides_with = "no_uppercase")]
    uppercase: bool,
    #[arg(long, overrides_with = "uppercase", hide = true)]
    no_uppercase: bool,
    /// Include lowercase letters.
    #[arg(long, overrides_with = "no_lowercase")]
    lowercase: bool,
    #[arg(long, overrides_with = "lowercase", hide = true)]
    no_lowercase: bool,
    /// Include digits.
    #[arg(long, overrides_with = "no_digits")]
    digits: bool,
    #[arg(long, overrides_with = "digits", hide = true)]
    no_digits: bool,
    /// Include symbols.
    #[arg(long, overrides_with = "no_symbols")]
    symbols: bool,
    #[arg(long, overrides_with = "symbols", hide = true)]
    no_symbols: bool,
}

impl ClassFlags {
    fn apply(&self, classes: &mut BTreeSet<CharacterClass>) {
        let flags = [
            (CharacterClass::Uppercase, self.uppercase, self.no_uppercase),
            (CharacterClass::Lowercase, self.lowercase, self.no_lowercase),
            (CharacterClass::Digit, self.digits, self.no_digits),
            (CharacterClass::Symbol, self.symbols, self.no_symbols),
        ];
        for (class, include, exclude) in flags {
            if include {
                classes.insert(class);
            } else if exclude {
                classes.remove(&class);
            }
        }
    }
}

fn parse_length(s: &str) -> Result<usize, String> {
    let length = s.parse::<usize>().map_err(|err| err.to_string())?;
    passgen::settings::check_length(length).map_err(|err| err.to_string())?;
    Ok(length)
}

fn parse_count(s: &str) -> Result<usize, String> {
    match s.parse::<usize>().map_err(|err| err.to_string())? {
        0 => Err("at least one password must be generated".to_owned()),
        count => Ok(count),
    }
}

#[derive(Serialize)]
struct Generated<'a> {
    password: &'a Secret,
    strength: Strength,
}

pub(crate) fn generate(args: GenerateArgs) -> Result<(), ProgError> {
    let request = {
        let mut request = crate::load_settings(args.config)?;
        if let Some(length) = args.length {
            request.length = length;
        }
        args.classes.apply(&mut request.classes);
        request
    };
    log::info!(
        "generating {} password(s) of length {} from {:?}",
        args.count,
        request.length,
        request.classes
    );

    let mut rng = rand::thread_rng();
    let passwords = (0..args.count)
        .map(|_| passgen::generate_password(&mut rng, &request))
        .collect::<Result<Vec<_>, _>>()?;

    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    if args.json {
        for password in passwords.iter() {
            let generated = Generated {
                password,
                strength: passgen::assess(password.as_str()),
            };
            serde_json::to_writer(&mut stdout, &generated)
                .context("failed to write password as JSON to stdout")?;
            writeln!(stdout).context("failed to write to stdout")?;
        }
    } else if let [password] = passwords.as_slice() {
        writeln!(stdout, "{}", password.as_str()).context("failed to write to stdout")?;
        eprintln!(
            "Strength: {}",
            crate::meter::render(passgen::assess(password.as_str()))
        );
        print_pool_summary(&request);
    } else {
        display_batch(&passwords, stdout).context("failed to output table")?;
        print_pool_summary(&request);
    }
    Ok(())
}

fn print_pool_summary(request: &GenerationRequest) {
    eprintln!(
        "{} characters from a pool of {} (~{:.0} bits)",
        request.length,
        request.pool_size(),
        request.entropy_bits()
    );
}

fn display_batch(passwords: &[Secret], output: impl Write) -> io::Result<()> {
    struct Row<'a> {
        password: &'a str,
        strength: Strength,
        bar: String,
    }

    impl crate::table::TableDisplay for Row<'_> {
        fn columns() -> usize {
            3
        }

        fn column_name(column_index: usize) -> &'static str {
            match column_index {
                0 => "Password",
                1 => "Strength",
                2 => "Meter",
                _ => panic!(),
            }
        }

        fn item(&self, column_index: usize) -> &str {
            match column_index {
                0 => self.password,
                1 => self.strength.label(),
                2 => &self.bar,
                _ => panic!(),
            }
        }
    }

    let rows = passwords
        .iter()
        .map(|password| {
            let strength = passgen::assess(password.as_str());
            Row {
                password: password.as_str(),
                strength,
                bar: crate::meter::bar(strength),
            }
        })
        .collect::<Vec<_>>();
    crate::table::display_table(&rows, output)
}
