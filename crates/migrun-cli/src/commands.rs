use std::path::PathBuf;

use anyhow::Result;
use chrono::Utc;
use migrun_config::Config;
use migrun_db::{Database, apply_directory, apply_file, naming};
use tracing::{error, info};

/// `check`: one connectivity probe against the configured database.
pub async fn check() -> Result<()> {
    let db = Database::connect(&Config::database_url()?)?;
    db.check().await?;
    info!("connected to database");
    Ok(())
}

/// `create`: write one empty migration file per description and print each
/// created path.
pub fn create(descriptions: &[String]) -> Result<()> {
    let dir = Config::migrations_dir()?;
    std::fs::create_dir_all(&dir)?;

    info!("creating {} migration files", descriptions.len());
    for description in descriptions {
        let name = naming::file_name(description, Utc::now().timestamp_millis());
        let path = dir.join(name);
        std::fs::write(&path, "")?;
        println!("created migration file: {}", path.display());
    }
    info!("created {} migration files", descriptions.len());
    Ok(())
}

/// `migrate`: apply explicitly named files in the order given, fail-fast.
pub async fn migrate(files: &[PathBuf]) -> Result<()> {
    let db = Database::connect(&Config::database_url()?)?;

    info!("running {} migrations", files.len());
    for file in files {
        if let Err(e) = apply_file(&db, file).await {
            error!("failed migration: {}", file.display());
            return Err(e.into());
        }
        info!("ran migration: {}", file.display());
    }
    info!("ran {} migrations", files.len());
    Ok(())
}

/// `dir`: apply every file in the configured directory in timestamp order.
pub async fn dir() -> Result<()> {
    let config = Config::from_env()?;
    let db = Database::connect(&config.database_url)?;

    info!("running all migrations in directory");
    apply_directory(&db, &config.migrations_dir).await?;
    info!("migrations completed successfully");
    Ok(())
}
