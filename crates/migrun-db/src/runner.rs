use std::path::Path;

use migrun_common::{Error, Result};
use tracing::{error, info};

use crate::naming;
use crate::pool::Database;

/// Read the SQL file at `path` and execute it as one raw script.
///
/// The script may contain multiple statements. Failures propagate unchanged;
/// the caller decides whether the run continues.
pub async fn apply_file(db: &Database, path: &Path) -> Result<()> {
    let sql = tokio::fs::read_to_string(path).await?;
    sqlx::raw_sql(&sql)
        .execute(db.pool())
        .await
        .map_err(|e| Error::Database(format!("{}: {e}", path.display())))?;
    Ok(())
}

/// Apply every migration file in `dir`, ascending by timestamp prefix.
///
/// The listing is non-recursive and every entry must be a well-formed
/// migration name; one malformed name aborts the run before any SQL
/// executes. Application is sequential and fail-fast: the first failure
/// stops the run and later files are never attempted.
pub async fn apply_directory(db: &Database, dir: &Path) -> Result<()> {
    let mut names = Vec::new();
    let mut entries = tokio::fs::read_dir(dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        names.push(entry.file_name().to_string_lossy().into_owned());
    }

    let names = naming::sort_ascending(names)?;
    info!("migrating directory ({} files): {}", names.len(), dir.display());

    for name in &names {
        info!("migrating {name}");
        if let Err(e) = apply_file(db, &dir.join(name)).await {
            error!("failed to migrate {name}");
            return Err(e);
        }
        info!("migrated {name}");
    }
    Ok(())
}
