//! cli.rs
//!
//! Command-line surface. Both positionals are taken as raw text and
//! converted here so that a bad value falls back to its default with a
//! warning instead of aborting the program. Unknown dash arguments are
//! values too; only `-h`/`--help` is a flag.

use std::ffi::OsStr;

use chrono::Datelike;
use clap::Parser;

use crate::date::{default_birthday, parse_birthday};
use crate::error::{DateParseError, InputError};
use crate::lifespan::{DEFAULT_YEARS_TO_LIFE, Lifespan};

#[derive(Parser, Debug)]
#[command(name = "days2live")]
#[command(about = "Live countdown from your birthday to your statistical deathday")]
#[command(after_help = "Examples:\n  days2live\n  days2live 100\n  days2live 90 2000-01-01")]
pub struct Args {
    /// Average lifetime in years [default: 125]
    #[arg(allow_hyphen_values = true)]
    pub years_to_life: Option<String>,

    /// Birthday in format YYYY-MM-DD [default: 1978-10-09]
    #[arg(value_name = "YYYY-MM-DD", allow_hyphen_values = true)]
    pub birthday: Option<String>,

    /// Anything after the birthday is ignored
    #[arg(hide = true, allow_hyphen_values = true)]
    pub rest: Vec<String>,
}

/// Inputs after defaults have been applied.
#[derive(Debug)]
pub struct Settings {
    pub lifespan: Lifespan,
    /// Rejected inputs, in argument order. Each is one warning line.
    pub warnings: Vec<InputError>,
}

impl Args {
    /// Whether `-h` or `--help` appears anywhere after the program name.
    ///
    /// clap stops recognising flags once a positional that takes hyphenated
    /// values has started, so this is checked before parsing.
    pub fn help_requested<I, T>(argv: I) -> bool
    where
        I: IntoIterator<Item = T>,
        T: AsRef<OsStr>,
    {
        argv.into_iter()
            .skip(1)
            .any(|arg| matches!(arg.as_ref().to_str(), Some("-h" | "--help")))
    }

    /// Apply defaults to missing or invalid inputs. Never fails: every
    /// rejected value is replaced and reported in `warnings`.
    pub fn resolve(&self) -> Settings {
        let mut warnings = Vec::new();

        let mut years_to_life = DEFAULT_YEARS_TO_LIFE;
        if let Some(input) = &self.years_to_life {
            match input.trim().parse::<i32>() {
                Ok(years) => years_to_life = years,
                Err(_) => warnings.push(InputError::InvalidYearsToLife {
                    input: input.clone(),
                    default: DEFAULT_YEARS_TO_LIFE,
                }),
            }
        }

        let mut birthday = default_birthday();
        let mut birthday_warning = None;
        if let Some(input) = &self.birthday {
            match parse_birthday(input) {
                Ok(date) => birthday = date,
                Err(source) => {
                    birthday_warning = Some(InputError::InvalidBirthday {
                        input: input.clone(),
                        source,
                        default: birthday,
                    })
                }
            }
        }

        let lifespan = match Lifespan::compute(birthday, years_to_life) {
            Ok(lifespan) => lifespan,
            Err(_) => {
                // parsed fine but too far to add; treat like an unparsable value
                warnings.push(InputError::InvalidYearsToLife {
                    input: years_to_life.to_string(),
                    default: DEFAULT_YEARS_TO_LIFE,
                });
                match Lifespan::compute(birthday, DEFAULT_YEARS_TO_LIFE) {
                    Ok(lifespan) => lifespan,
                    Err(_) => {
                        birthday_warning.get_or_insert(InputError::InvalidBirthday {
                            input: birthday.to_string(),
                            source: DateParseError::YearOutOfRange(birthday.year()),
                            default: default_birthday(),
                        });
                        Lifespan::default()
                    }
                }
            }
        };
        warnings.extend(birthday_warning);

        Settings { lifespan, warnings }
    }
}
