use std::sync::Once;

use migrun_common::{Error, Result};
use sqlx::AnyPool;
use sqlx::any::{AnyPoolOptions, install_default_drivers};
use tracing::info;

static DRIVERS: Once = Once::new();

/// Handle to the target database, shared by the executor and runner.
///
/// Construction is lazy: the pool opens its single connection on first use,
/// so an unreachable host or bad credentials surface at the first query, not
/// here. Cloning shares the same pool. The handle is passed explicitly to
/// whatever needs it and lives for the rest of the process; there is no
/// teardown beyond process exit.
#[derive(Clone)]
pub struct Database {
    pool: AnyPool,
}

impl Database {
    /// Build a lazy pool from a connection-string URL. The scheme selects the
    /// driver: `postgres://`, `mysql://` or `sqlite://`.
    pub fn connect(url: &str) -> Result<Self> {
        DRIVERS.call_once(install_default_drivers);
        let pool = AnyPoolOptions::new()
            .max_connections(1)
            .connect_lazy(url)
            .map_err(|e| Error::Database(format!("invalid connection string: {e}")))?;
        Ok(Self { pool })
    }

    /// Probe connectivity with a no-op query, surfacing the driver error.
    pub async fn check(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| Error::Database(format!("connectivity check failed: {e}")))?;
        info!("database connectivity check passed");
        Ok(())
    }

    pub fn pool(&self) -> &AnyPool {
        &self.pool
    }
}
