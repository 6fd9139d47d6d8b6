use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid migration filename: {0}")]
    Filename(String),

    #[error("database error: {0}")]
    Database(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn error_display_includes_context() {
        let e = Error::Config("DATABASE_URL is not set".into());
        assert_eq!(e.to_string(), "configuration error: DATABASE_URL is not set");

        let e = Error::Filename("nodash.sql".into());
        assert_eq!(e.to_string(), "invalid migration filename: nodash.sql");

        let e = Error::Database("connection refused".into());
        assert_eq!(e.to_string(), "database error: connection refused");
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.sql");
        let e: Error = io.into();
        assert!(e.to_string().starts_with("io error:"));
    }
}
