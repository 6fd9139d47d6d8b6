pub mod env;

pub use env::{Config, DATABASE_URL_VAR, MIGRATIONS_DIR_VAR};
