//! Command-line and environment configuration for the `kinship` binary.

use std::path::{Path, PathBuf};

use crate::error::{KinError, KinResult};

/// Environment variable naming the database file.
pub const DB_ENV_VAR: &str = "KINSHIP_DB";

pub const DEFAULT_DB_PATH: &str = ".data/kinship.db";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    List,
    Show(String),
    Profile(String),
    Fathers(String),
    Mothers(String),
    Spouses { date: String, gender: String },
    Import(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
    pub command: Command,
}

impl Config {
    /// Resolve from arguments (program name already skipped) and the value
    /// of [`DB_ENV_VAR`]. `--file` wins over the environment, which wins
    /// over [`DEFAULT_DB_PATH`].
    pub fn from_args<I>(args: I, env_db: Option<String>) -> KinResult<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let mut db_path: Option<PathBuf> = None;
        let mut command: Option<Command> = None;

        while let Some(arg) = args.next() {
            let next = match arg.as_str() {
                "--file" | "-f" => {
                    db_path = Some(PathBuf::from(required(args.next(), "--file requires a path argument")?));
                    continue;
                }
                "--import" => Command::Import(PathBuf::from(required(
                    args.next(),
                    "--import requires a JSON file path",
                )?)),
                "--help" | "-h" | "help" => Command::Help,
                "list" => Command::List,
                "show" => Command::Show(required(args.next(), "show requires a person id")?),
                "profile" => {
                    Command::Profile(required(args.next(), "profile requires a person id")?)
                }
                "fathers" => Command::Fathers(required(args.next(), "fathers requires a date")?),
                "mothers" => Command::Mothers(required(args.next(), "mothers requires a date")?),
                "spouses" => Command::Spouses {
                    date: required(args.next(), "spouses requires a date")?,
                    gender: required(args.next(), "spouses requires a gender")?,
                },
                other => return Err(KinError::Other(format!("Unknown argument: {}", other))),
            };
            if command.replace(next).is_some() {
                return Err(KinError::Other("Only one command may be given".into()));
            }
        }

        let db_path = db_path
            .or_else(|| env_db.filter(|s| !s.trim().is_empty()).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH));

        Ok(Self {
            db_path,
            command: command.unwrap_or(Command::Help),
        })
    }

    /// Create the database's parent directory if it does not exist yet.
    pub fn ensure_db_dir(&self) -> KinResult<()> {
        match self.db_path.parent() {
            Some(dir) if dir != Path::new("") && !dir.exists() => {
                std::fs::create_dir_all(dir)?;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

fn required(value: Option<String>, message: &str) -> KinResult<String> {
    value.ok_or_else(|| KinError::Other(message.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_to_help_and_default_path() {
        let config = Config::from_args(args(&[]), None).unwrap();
        assert_eq!(config.command, Command::Help);
        assert_eq!(config.db_path, PathBuf::from(DEFAULT_DB_PATH));
    }

    #[test]
    fn environment_overrides_default() {
        let config = Config::from_args(args(&["list"]), Some("/tmp/family.db".into())).unwrap();
        assert_eq!(config.db_path, PathBuf::from("/tmp/family.db"));
        assert_eq!(config.command, Command::List);
    }

    #[test]
    fn blank_environment_is_ignored() {
        let config = Config::from_args(args(&["list"]), Some("  ".into())).unwrap();
        assert_eq!(config.db_path, PathBuf::from(DEFAULT_DB_PATH));
    }

    #[test]
    fn file_flag_overrides_environment() {
        let config = Config::from_args(
            args(&["-f", "here.db", "profile", "abc"]),
            Some("/tmp/family.db".into()),
        )
        .unwrap();
        assert_eq!(config.db_path, PathBuf::from("here.db"));
        assert_eq!(config.command, Command::Profile("abc".into()));
    }

    #[test]
    fn spouses_takes_date_and_gender() {
        let config = Config::from_args(args(&["spouses", "1990-01-01", "Male"]), None).unwrap();
        assert_eq!(
            config.command,
            Command::Spouses {
                date: "1990-01-01".into(),
                gender: "Male".into()
            }
        );
    }

    #[test]
    fn missing_values_are_errors() {
        assert!(Config::from_args(args(&["--file"]), None).is_err());
        assert!(Config::from_args(args(&["profile"]), None).is_err());
        assert!(Config::from_args(args(&["spouses", "1990-01-01"]), None).is_err());
    }

    #[test]
    fn rejects_unknown_and_repeated_commands() {
        assert!(Config::from_args(args(&["--verbose"]), None).is_err());
        assert!(Config::from_args(args(&["list", "list"]), None).is_err());
    }
}
