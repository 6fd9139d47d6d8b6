use std::path::PathBuf;

use migrun_common::{Error, Result};
use tracing::debug;

/// Connection string for the target database. The URL scheme selects the
/// engine: `postgres://`, `mysql://` or `sqlite://`.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

/// Directory holding the `.sql` migration files.
pub const MIGRATIONS_DIR_VAR: &str = "MIGRATIONS_DIR";

/// Configuration read from the process environment.
///
/// Not every command needs every value, so the two halves can also be
/// loaded independently via [`Config::database_url`] and
/// [`Config::migrations_dir`].
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub migrations_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            database_url: Self::database_url()?,
            migrations_dir: Self::migrations_dir()?,
        })
    }

    pub fn database_url() -> Result<String> {
        require(DATABASE_URL_VAR, |k| std::env::var(k).ok())
    }

    pub fn migrations_dir() -> Result<PathBuf> {
        require(MIGRATIONS_DIR_VAR, |k| std::env::var(k).ok()).map(PathBuf::from)
    }

    /// The migrations directory if configured, for display purposes.
    pub fn migrations_dir_opt() -> Option<PathBuf> {
        std::env::var(MIGRATIONS_DIR_VAR).ok().map(PathBuf::from)
    }
}

fn require(key: &str, lookup: impl Fn(&str) -> Option<String>) -> Result<String> {
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => {
            debug!("loaded {key} from environment");
            Ok(value)
        }
        _ => Err(Error::Config(format!("{key} environment variable is not set"))),
    }
}
